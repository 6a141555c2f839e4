//! Pure roadmap logic: unlocking, completion toggling and projections.
//!
//! Nothing in this module touches storage. Every operation works on an owned
//! [`RoadmapGraph`](crate::models::RoadmapGraph) and receives the current time
//! explicitly, so callers decide when a mutation is committed and tests can
//! pin the clock.

pub mod notify;
pub mod projection;
pub mod toggle;
pub mod unlock;

pub use notify::{dispatch, Notifier};
pub use projection::{select_week, RoadmapSummary, WeekProgress};
pub use toggle::{toggle_task, ToggleOutcome};
pub use unlock::{evaluate_unlocks, reconcile, UnlockPolicy};
