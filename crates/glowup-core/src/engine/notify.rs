//! Dispatching roadmap events to a notification collaborator.

use crate::models::RoadmapEvent;

/// Receives one-way roadmap notifications. Return values are never consumed.
pub trait Notifier {
    /// Called when a week is completed, with the number of the following week.
    fn week_completed(&self, next_week: u32);

    /// Called when a week is unlocked. Ignored by default.
    fn week_unlocked(&self, _week: u32) {}
}

/// Forwards events to a notifier in order.
pub fn dispatch<N: Notifier + ?Sized>(events: &[RoadmapEvent], notifier: &N) {
    for event in events {
        match *event {
            RoadmapEvent::WeekCompleted { next_week } => notifier.week_completed(next_week),
            RoadmapEvent::WeekUnlocked { week } => notifier.week_unlocked(week),
        }
    }
}
