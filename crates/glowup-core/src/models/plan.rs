//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Plan-level metadata. Weeks and tasks live in the owning
/// [`RoadmapGraph`](super::RoadmapGraph).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Highest week number present in the plan (0 when it has no weeks)
    pub current_week: u32,

    /// Mirrors `current_week`
    pub total_weeks: u32,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}
