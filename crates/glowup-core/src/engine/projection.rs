//! Read-only progress projections over a roadmap snapshot.
//!
//! Projections are derived on demand and never persisted.

use serde::Serialize;

use crate::models::RoadmapGraph;

/// Progress of a single week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekProgress {
    pub week_id: u64,
    pub number: u32,
    pub title: String,
    pub is_unlocked: bool,
    pub is_completed: bool,
    pub completed_tasks: u32,
    pub total_tasks: u32,
}

impl WeekProgress {
    /// Completed over total tasks, 0 for a week without tasks.
    pub fn ratio(&self) -> f64 {
        ratio(self.completed_tasks, self.total_tasks)
    }
}

/// Plan-wide progress and the header shown above the roadmap.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoadmapSummary {
    /// Number of the week treated as current focus, if the plan has weeks
    pub current_week: Option<u32>,
    /// Per-week progress in ascending week order
    pub weeks: Vec<WeekProgress>,
    pub completed_tasks: u32,
    pub total_tasks: u32,
    pub header: String,
}

impl RoadmapSummary {
    /// Derives the summary from a snapshot.
    ///
    /// The current week is the one whose number matches the plan's
    /// current-week pointer, i.e. the highest-numbered week, whatever its
    /// completion or unlock state.
    pub fn project(graph: &RoadmapGraph) -> Self {
        let weeks: Vec<WeekProgress> = graph
            .weeks_in_order()
            .into_iter()
            .map(|week| {
                let (completed_tasks, total_tasks) = graph.task_counts(week.id);
                WeekProgress {
                    week_id: week.id,
                    number: week.number,
                    title: week.title.clone(),
                    is_unlocked: week.is_unlocked,
                    is_completed: week.is_completed,
                    completed_tasks,
                    total_tasks,
                }
            })
            .collect();

        let completed_tasks: u32 = weeks.iter().map(|w| w.completed_tasks).sum();
        let total_tasks: u32 = weeks.iter().map(|w| w.total_tasks).sum();
        let current_week = graph.current_week().map(|w| w.number);

        let header = match (current_week, total_tasks) {
            (_, 0) => "No tasks yet".to_string(),
            (Some(number), _) => {
                format!("Week {number} · {completed_tasks} of {total_tasks} tasks complete")
            }
            (None, _) => format!("{completed_tasks} of {total_tasks} tasks complete"),
        };

        Self {
            current_week,
            weeks,
            completed_tasks,
            total_tasks,
            header,
        }
    }

    /// Completed over total tasks across all weeks, 0 when there are none.
    pub fn overall_ratio(&self) -> f64 {
        ratio(self.completed_tasks, self.total_tasks)
    }

    /// Progress entry for a week number.
    pub fn week(&self, number: u32) -> Option<&WeekProgress> {
        self.weeks.iter().find(|w| w.number == number)
    }
}

/// Picks the week to display after a (re)load.
///
/// A previous selection survives if a week with that number still exists;
/// otherwise the current week is selected. Returns `None` only for a plan
/// without weeks.
pub fn select_week(graph: &RoadmapGraph, previous: Option<u32>) -> Option<u32> {
    previous
        .and_then(|number| graph.week_by_number(number))
        .or_else(|| graph.current_week())
        .map(|w| w.number)
}

fn ratio(done: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(done) / f64::from(total)
    }
}
