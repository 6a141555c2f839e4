//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::PlanSummary;

/// Newtype wrapper for displaying the plan history.
///
/// # Examples
///
/// ```rust
/// use glowup_core::{display::PlanSummaries, models::PlanSummary};
/// use jiff::Timestamp;
///
/// let plan = PlanSummary {
///     id: 3,
///     current_week: 4,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     week_count: 4,
///     unlocked_weeks: 2,
///     total_tasks: 12,
///     completed_tasks: 5,
/// };
///
/// let output = PlanSummaries(vec![plan]).to_string();
/// assert!(output.contains("Plan 3 (5/12)"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No plans found.");
        }

        let noun = if self.len() == 1 { "plan" } else { "plans" };
        writeln!(f, "# History: {} {noun}", self.len())?;
        writeln!(f)?;
        for plan in self {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}
