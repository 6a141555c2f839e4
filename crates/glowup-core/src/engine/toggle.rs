//! Task completion toggling and completion propagation.

use jiff::Timestamp;
use log::{info, warn};
use serde::Serialize;

use super::unlock::{evaluate_unlocks, UnlockPolicy};
use crate::{
    error::{Result, RoadmapError},
    models::{RoadmapEvent, RoadmapGraph, Task, Week},
};

/// Everything a caller needs after a task was toggled.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToggleOutcome {
    /// The task after the toggle
    pub task: Task,
    /// The owning week after completion was recomputed
    pub week: Week,
    /// Events to dispatch, in the order they happened
    pub events: Vec<RoadmapEvent>,
}

/// Flips a task's completion and propagates the change through the plan.
///
/// The owning week's completion is recomputed, the unlock pass runs over the
/// whole plan and plan metadata is refreshed. If the task, its week or the
/// week's plan cannot be resolved, an error is returned and the graph is left
/// untouched.
pub fn toggle_task(
    graph: &mut RoadmapGraph,
    task_id: u64,
    now: Timestamp,
    policy: &UnlockPolicy,
) -> Result<ToggleOutcome> {
    let week_id = resolve_week(graph, task_id).map_err(|e| {
        warn!("Cannot toggle task {task_id}: {e}");
        e
    })?;

    let mut events = Vec::new();

    if let Some(task) = graph.tasks.get_mut(&task_id) {
        let completed = !task.is_completed;
        task.set_completed(completed, now);
    }

    let (done, total) = graph.task_counts(week_id);
    let all_done = total > 0 && done == total;

    if let Some(week) = graph.weeks.get_mut(&week_id) {
        match (week.is_completed, all_done) {
            (false, true) => {
                week.is_completed = true;
                if week.completed_at.is_none() {
                    week.completed_at = Some(now);
                }
                info!("Week {} of plan {} completed", week.number, week.plan_id);
                events.push(RoadmapEvent::WeekCompleted {
                    next_week: week.number.saturating_add(1),
                });
            }
            (true, false) => {
                week.is_completed = false;
                week.completed_at = None;
            }
            _ => {}
        }
    }

    events.extend(
        evaluate_unlocks(graph, now, policy)
            .into_iter()
            .map(|week| RoadmapEvent::WeekUnlocked { week }),
    );
    graph.refresh_metadata(now);

    let task = graph
        .tasks
        .get(&task_id)
        .cloned()
        .ok_or(RoadmapError::TaskNotFound { id: task_id })?;
    let week = graph
        .weeks
        .get(&week_id)
        .cloned()
        .ok_or(RoadmapError::WeekNotFound { id: week_id })?;

    Ok(ToggleOutcome { task, week, events })
}

/// Follows task → week → plan, returning the week id if every link holds.
fn resolve_week(graph: &RoadmapGraph, task_id: u64) -> Result<u64> {
    let task = graph
        .tasks
        .get(&task_id)
        .ok_or(RoadmapError::TaskNotFound { id: task_id })?;
    let week = graph
        .weeks
        .get(&task.week_id)
        .ok_or(RoadmapError::WeekNotFound { id: task.week_id })?;
    if week.plan_id != graph.plan.id {
        return Err(RoadmapError::PlanNotFound { id: week.plan_id });
    }
    Ok(week.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::RoadmapSummary,
        models::{Plan, Task, Week},
    };

    const NOW: i64 = 1_700_000_000;
    const DAY: i64 = 86_400;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn week(id: u64, number: u32, unlocked: bool) -> Week {
        Week {
            id,
            plan_id: 1,
            number,
            title: format!("Week {number}"),
            summary: String::new(),
            is_completed: false,
            is_unlocked: unlocked,
            unlocked_at: unlocked.then(|| at(NOW - DAY)),
            completed_at: None,
        }
    }

    fn task(id: u64, week_id: u64) -> Task {
        Task {
            id,
            week_id,
            title: format!("Task {id}"),
            body: String::new(),
            category: "Skincare".to_string(),
            timeframe: "Daily".to_string(),
            priority: id as i64,
            is_completed: false,
            completed_at: None,
            products: vec![],
        }
    }

    /// Week 1 (unlocked) with tasks 11 and 12, week 2 (locked) with task 21.
    fn two_week_graph() -> RoadmapGraph {
        let plan = Plan {
            id: 1,
            current_week: 2,
            total_weeks: 2,
            created_at: at(NOW - DAY),
            updated_at: at(NOW - DAY),
        };
        RoadmapGraph::new(
            plan,
            vec![week(1, 1, true), week(2, 2, false)],
            vec![task(11, 1), task(12, 1), task(21, 2)],
        )
    }

    fn assert_invariants(graph: &RoadmapGraph) {
        for task in graph.tasks.values() {
            assert_eq!(task.completed_at.is_some(), task.is_completed);
        }
        for week in graph.weeks.values() {
            let (done, total) = graph.task_counts(week.id);
            assert_eq!(week.is_completed, total > 0 && done == total);
        }
    }

    #[test]
    fn test_toggle_cascade() {
        let mut g = two_week_graph();
        let policy = UnlockPolicy::default();

        let first = toggle_task(&mut g, 11, at(NOW), &policy).unwrap();
        assert!(first.task.is_completed);
        assert_eq!(first.task.completed_at, Some(at(NOW)));
        assert!(!first.week.is_completed);
        assert!(first.events.is_empty());
        let summary = RoadmapSummary::project(&g);
        assert_eq!(summary.weeks[0].ratio(), 0.5);
        assert_invariants(&g);

        let second = toggle_task(&mut g, 12, at(NOW + 60), &policy).unwrap();
        assert!(second.week.is_completed);
        assert_eq!(second.week.completed_at, Some(at(NOW + 60)));
        assert_eq!(
            second.events,
            vec![
                RoadmapEvent::WeekCompleted { next_week: 2 },
                RoadmapEvent::WeekUnlocked { week: 2 },
            ]
        );
        assert!(g.weeks[&2].is_unlocked);
        assert_eq!(g.weeks[&2].unlocked_at, Some(at(NOW + 60)));
        assert_eq!(g.plan.updated_at, at(NOW + 60));
        assert_invariants(&g);
    }

    #[test]
    fn test_uncompleting_task_clears_week_completion_only() {
        let mut g = two_week_graph();
        let policy = UnlockPolicy::default();
        toggle_task(&mut g, 11, at(NOW), &policy).unwrap();
        toggle_task(&mut g, 12, at(NOW), &policy).unwrap();

        let outcome = toggle_task(&mut g, 12, at(NOW + 60), &policy).unwrap();
        assert!(!outcome.task.is_completed);
        assert_eq!(outcome.task.completed_at, None);
        assert!(!outcome.week.is_completed);
        assert_eq!(outcome.week.completed_at, None);
        // No compensating event, and the unlock sticks.
        assert!(outcome.events.is_empty());
        assert!(g.weeks[&2].is_unlocked);
        assert_invariants(&g);
    }

    #[test]
    fn test_recompleting_week_emits_event_again() {
        let mut g = two_week_graph();
        let policy = UnlockPolicy::default();
        toggle_task(&mut g, 11, at(NOW), &policy).unwrap();
        toggle_task(&mut g, 12, at(NOW), &policy).unwrap();
        toggle_task(&mut g, 12, at(NOW + 60), &policy).unwrap();

        let outcome = toggle_task(&mut g, 12, at(NOW + 120), &policy).unwrap();
        assert_eq!(outcome.events, vec![RoadmapEvent::WeekCompleted { next_week: 2 }]);
        assert_eq!(outcome.week.completed_at, Some(at(NOW + 120)));
    }

    #[test]
    fn test_last_week_completion_reports_following_number() {
        let mut g = two_week_graph();
        let outcome = toggle_task(&mut g, 21, at(NOW), &UnlockPolicy::default()).unwrap();
        assert_eq!(outcome.events, vec![RoadmapEvent::WeekCompleted { next_week: 3 }]);
        assert_eq!(g.plan.current_week, 2);
    }

    #[test]
    fn test_completing_highest_possible_week_does_not_overflow() {
        let plan = Plan {
            id: 1,
            current_week: u32::MAX,
            total_weeks: u32::MAX,
            created_at: at(NOW),
            updated_at: at(NOW),
        };
        let mut g = RoadmapGraph::new(plan, vec![week(1, u32::MAX, true)], vec![task(11, 1)]);

        let outcome = toggle_task(&mut g, 11, at(NOW), &UnlockPolicy::default()).unwrap();
        assert!(outcome.week.is_completed);
        assert_eq!(
            outcome.events,
            vec![RoadmapEvent::WeekCompleted { next_week: u32::MAX }]
        );
    }

    #[test]
    fn test_missing_task_leaves_graph_untouched() {
        let mut g = two_week_graph();
        let before = g.clone();
        let err = toggle_task(&mut g, 99, at(NOW), &UnlockPolicy::default()).unwrap_err();
        assert!(matches!(err, RoadmapError::TaskNotFound { id: 99 }));
        assert_eq!(g, before);
    }

    #[test]
    fn test_orphaned_task_leaves_graph_untouched() {
        let mut g = two_week_graph();
        g.tasks.insert(50, task(50, 7));
        let before = g.clone();
        let err = toggle_task(&mut g, 50, at(NOW), &UnlockPolicy::default()).unwrap_err();
        assert!(matches!(err, RoadmapError::WeekNotFound { id: 7 }));
        assert_eq!(g, before);
    }

    #[test]
    fn test_week_from_foreign_plan_is_rejected() {
        let mut g = two_week_graph();
        g.weeks.get_mut(&2).unwrap().plan_id = 9;
        let before = g.clone();
        let err = toggle_task(&mut g, 21, at(NOW), &UnlockPolicy::default()).unwrap_err();
        assert!(matches!(err, RoadmapError::PlanNotFound { id: 9 }));
        assert_eq!(g, before);
    }
}
