//! Events produced by roadmap mutations.

use serde::{Deserialize, Serialize};

/// Something the caller may want to tell the user about.
///
/// The engine never dispatches these itself; see
/// [`crate::engine::Notifier`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoadmapEvent {
    /// A week became completed. Carries the number of the week after it.
    WeekCompleted { next_week: u32 },

    /// A week was unlocked during this operation.
    WeekUnlocked { week: u32 },
}
