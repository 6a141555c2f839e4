//! Notification sink for roadmap events.

use glowup_core::Notifier;
use log::info;

/// Reports roadmap milestones through the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn week_completed(&self, next_week: u32) {
        info!("Week {} completed, week {next_week} is next", next_week.saturating_sub(1));
    }

    fn week_unlocked(&self, week: u32) {
        info!("Week {week} unlocked");
    }
}

#[cfg(test)]
mod tests {
    use glowup_core::{dispatch, RoadmapEvent};

    use super::*;

    #[test]
    fn test_dispatch_to_log_notifier() {
        // Must not panic without a logger installed
        dispatch(
            &[
                RoadmapEvent::WeekCompleted { next_week: 2 },
                RoadmapEvent::WeekUnlocked { week: 2 },
            ],
            &LogNotifier,
        );
    }
}
