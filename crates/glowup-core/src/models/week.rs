//! Week model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One sequential unit of a plan, owning a set of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Unique identifier for the week
    pub id: u64,

    /// ID of the owning plan
    pub plan_id: u64,

    /// 1-based week number, unique within the plan
    pub number: u32,

    /// Title of the week
    pub title: String,

    /// Short summary of the week's focus
    pub summary: String,

    /// True iff the week has tasks and all of them are completed
    pub is_completed: bool,

    /// Whether the user may work on this week; never reverts once set
    pub is_unlocked: bool,

    /// When the week was first unlocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<Timestamp>,

    /// When the week last became completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Week {
    /// Unlocks the week. Returns `true` if it was locked before.
    ///
    /// An existing `unlocked_at` is never overwritten.
    pub fn unlock(&mut self, now: Timestamp) -> bool {
        let was_locked = !self.is_unlocked;
        self.is_unlocked = true;
        if self.unlocked_at.is_none() {
            self.unlocked_at = Some(now);
        }
        was_locked
    }
}
