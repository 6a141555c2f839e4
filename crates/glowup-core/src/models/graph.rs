//! Arena-style container for one plan and everything it owns.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, Task, Week};

/// A plan together with its weeks and tasks, held in flat tables keyed by id.
///
/// Children point at their parent through `plan_id` / `week_id`; nothing
/// holds a reference back up the tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapGraph {
    pub plan: Plan,
    pub weeks: BTreeMap<u64, Week>,
    pub tasks: BTreeMap<u64, Task>,
}

impl RoadmapGraph {
    /// Creates a graph from a plan and its rows.
    pub fn new(plan: Plan, weeks: Vec<Week>, tasks: Vec<Task>) -> Self {
        Self {
            plan,
            weeks: weeks.into_iter().map(|w| (w.id, w)).collect(),
            tasks: tasks.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Week ids ordered by ascending week number.
    pub fn week_ids_in_order(&self) -> Vec<u64> {
        self.weeks_in_order().iter().map(|w| w.id).collect()
    }

    /// Weeks ordered by ascending week number.
    pub fn weeks_in_order(&self) -> Vec<&Week> {
        let mut weeks: Vec<&Week> = self.weeks.values().collect();
        weeks.sort_by_key(|w| (w.number, w.id));
        weeks
    }

    /// Tasks of a week ordered by priority, ties broken by id.
    pub fn tasks_for_week(&self, week_id: u64) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .values()
            .filter(|t| t.week_id == week_id)
            .collect();
        tasks.sort_by_key(|t| (t.priority, t.id));
        tasks
    }

    /// Returns `(completed, total)` task counts for a week.
    pub fn task_counts(&self, week_id: u64) -> (u32, u32) {
        self.tasks
            .values()
            .filter(|t| t.week_id == week_id)
            .fold((0, 0), |(done, total), t| {
                (done + u32::from(t.is_completed), total + 1)
            })
    }

    /// Looks up a week by its number.
    pub fn week_by_number(&self, number: u32) -> Option<&Week> {
        self.weeks.values().find(|w| w.number == number)
    }

    /// Highest week number present, or 0 for a plan without weeks.
    pub fn max_week_number(&self) -> u32 {
        self.weeks.values().map(|w| w.number).max().unwrap_or(0)
    }

    /// The week whose number equals the plan's current-week number.
    pub fn current_week(&self) -> Option<&Week> {
        self.week_by_number(self.plan.current_week)
    }

    /// Whether the stored current-week pointer disagrees with the weeks present.
    pub fn metadata_is_stale(&self) -> bool {
        let max = self.max_week_number();
        self.plan.current_week != max || self.plan.total_weeks != max
    }

    /// Recomputes plan-level metadata after a mutation.
    pub fn refresh_metadata(&mut self, now: Timestamp) {
        let max = self.max_week_number();
        self.plan.current_week = max;
        self.plan.total_weeks = max;
        self.plan.updated_at = now;
    }
}
