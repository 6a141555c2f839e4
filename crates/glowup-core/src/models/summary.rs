//! Plan summary types for the plan history listing.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::RoadmapGraph;

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Highest week number in the plan
    pub current_week: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Number of weeks actually present
    pub week_count: u32,
    /// Number of unlocked weeks
    pub unlocked_weeks: u32,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
}

impl From<&RoadmapGraph> for PlanSummary {
    fn from(graph: &RoadmapGraph) -> Self {
        let unlocked_weeks = graph.weeks.values().filter(|w| w.is_unlocked).count() as u32;
        let completed_tasks = graph.tasks.values().filter(|t| t.is_completed).count() as u32;

        Self {
            id: graph.plan.id,
            current_week: graph.plan.current_week,
            created_at: graph.plan.created_at,
            updated_at: graph.plan.updated_at,
            week_count: graph.weeks.len() as u32,
            unlocked_weeks,
            total_tasks: graph.tasks.len() as u32,
            completed_tasks,
        }
    }
}
