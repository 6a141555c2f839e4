//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as-is.

use std::fmt;

use jiff::Timestamp;

use super::{
    datetime::{Age, LocalDateTime},
    progress::ProgressBar,
};
use crate::models::{PlanSummary, RoadmapEvent, RoadmapGraph, Task, Week};

impl Week {
    /// Status label with a consistent icon.
    ///
    /// ```rust
    /// # use glowup_core::models::Week;
    /// let mut week = Week {
    ///     id: 1, plan_id: 1, number: 2,
    ///     title: "Glow".into(), summary: String::new(),
    ///     is_completed: false, is_unlocked: false,
    ///     unlocked_at: None, completed_at: None,
    /// };
    /// assert_eq!(week.status_with_icon(), "○ Locked");
    /// week.is_unlocked = true;
    /// assert_eq!(week.status_with_icon(), "➤ Unlocked");
    /// ```
    pub fn status_with_icon(&self) -> &'static str {
        if self.is_completed {
            "✓ Completed"
        } else if self.is_unlocked {
            "➤ Unlocked"
        } else {
            "○ Locked"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_completed { "x" } else { " " };
        writeln!(f, "- [{check}] **{}** (ID: {})", self.title, self.id)?;

        let labels: Vec<&str> = [self.category.as_str(), self.timeframe.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !labels.is_empty() {
            writeln!(f, "  - *{}*", labels.join(" · "))?;
        }
        if !self.body.is_empty() {
            writeln!(f, "  - {}", self.body)?;
        }
        if !self.products.is_empty() {
            writeln!(f, "  - Products: {}", self.products.join(", "))?;
        }
        if let Some(done) = &self.completed_at {
            writeln!(f, "  - Completed: {}", LocalDateTime(done))?;
        }
        Ok(())
    }
}

/// A week rendered together with its tasks.
pub struct WeekDetail<'a> {
    pub graph: &'a RoadmapGraph,
    pub week: &'a Week,
}

impl fmt::Display for WeekDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let week = self.week;
        writeln!(
            f,
            "## Week {}: {} ({})",
            week.number,
            week.title,
            week.status_with_icon()
        )?;
        writeln!(f)?;

        if !week.summary.is_empty() {
            writeln!(f, "{}", week.summary)?;
            writeln!(f)?;
        }

        if !week.is_unlocked {
            writeln!(f, "Finish the previous week to unlock these tasks.")?;
            return Ok(());
        }

        let (done, total) = self.graph.task_counts(week.id);
        if total > 0 {
            let bar = ProgressBar(f64::from(done) / f64::from(total));
            writeln!(f, "Progress: {bar} ({done}/{total})")?;
            writeln!(f)?;
        }

        let tasks = self.graph.tasks_for_week(week.id);
        if tasks.is_empty() {
            writeln!(f, "No tasks in this week.")?;
        }
        for task in tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RoadmapGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanSummary::from(self))?;

        let weeks = self.weeks_in_order();
        if weeks.is_empty() {
            writeln!(f, "No weeks in this plan.")?;
            return Ok(());
        }
        for week in weeks {
            write!(f, "{}", WeekDetail { graph: self, week })?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## Plan {}{progress}", self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Weeks**: {} ({} unlocked)",
            self.week_count, self.unlocked_weeks
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(
            f,
            "- **Updated**: {} ({})",
            LocalDateTime(&self.updated_at),
            Age {
                since: self.updated_at,
                now: Timestamp::now(),
            }
        )?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for RoadmapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapEvent::WeekCompleted { next_week } => {
                write!(f, "Week {} completed", next_week.saturating_sub(1))
            }
            RoadmapEvent::WeekUnlocked { week } => write!(f, "Week {week} unlocked"),
        }
    }
}
