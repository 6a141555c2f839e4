//! Display wrappers for loaded roadmaps and toggle outcomes.

use std::fmt;

use super::{models::WeekDetail, progress::ProgressBar};
use crate::{engine::ToggleOutcome, roadmap::RoadmapView};

impl fmt::Display for RoadmapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.summary.header)?;
        writeln!(f)?;
        writeln!(f, "Overall: {}", ProgressBar(self.summary.overall_ratio()))?;
        writeln!(f)?;

        for event in &self.events {
            writeln!(f, "> {event}")?;
        }
        if !self.events.is_empty() {
            writeln!(f)?;
        }

        for week in &self.summary.weeks {
            let marker = if Some(week.number) == self.selected_week {
                "▸ "
            } else {
                ""
            };
            let status = if week.is_completed {
                "✓"
            } else if week.is_unlocked {
                "➤"
            } else {
                "○"
            };
            writeln!(
                f,
                "- {marker}{status} Week {}: {} ({}/{})",
                week.number, week.title, week.completed_tasks, week.total_tasks
            )?;
        }

        let selected = self
            .selected_week
            .and_then(|number| self.graph.week_by_number(number));
        if let Some(week) = selected {
            writeln!(f)?;
            write!(
                f,
                "{}",
                WeekDetail {
                    graph: &self.graph,
                    week,
                }
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.task.is_completed {
            "Completed"
        } else {
            "Reopened"
        };
        writeln!(f, "{verb} task '{}' (ID: {})", self.task.title, self.task.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Week {}: {} ({})",
            self.week.number,
            self.week.title,
            self.week.status_with_icon()
        )?;
        for event in &self.events {
            writeln!(f, "- {event}")?;
        }
        Ok(())
    }
}
