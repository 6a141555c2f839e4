mod common;

use std::path::Path;

use common::{create_test_roadmap, fixture_plan};
use glowup_core::{Id, Roadmap, RoadmapEvent, RoadmapGraph, RoadmapState, RoadmapView, ShowRoadmap};
use jiff::{SignedDuration, Timestamp};

async fn ready_view(roadmap: &Roadmap) -> RoadmapView {
    match roadmap
        .show_roadmap(&ShowRoadmap::default())
        .await
        .expect("Failed to show roadmap")
    {
        RoadmapState::Ready(view) => view,
        RoadmapState::Empty => panic!("Expected a roadmap"),
    }
}

/// Moves a week's unlock time into the past, as if days had gone by.
fn backdate_unlock(db_path: &Path, plan_id: u64, number: u32, days: i64) {
    let at = Timestamp::now()
        .checked_sub(SignedDuration::from_hours(days * 24))
        .unwrap();
    let conn = rusqlite::Connection::open(db_path).unwrap();
    let rows = conn
        .execute(
            "UPDATE weeks SET unlocked_at = ?1 WHERE plan_id = ?2 AND number = ?3",
            rusqlite::params![at.to_string(), plan_id as i64, number],
        )
        .unwrap();
    assert_eq!(rows, 1);
}

fn week_task_ids(graph: &RoadmapGraph, number: u32) -> Vec<u64> {
    let week = graph.week_by_number(number).unwrap();
    graph.tasks_for_week(week.id).iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_stalled_week_unlocks_after_seven_days() {
    let (_temp_dir, roadmap) = create_test_roadmap().await;
    let graph = roadmap.import_plan(&fixture_plan()).await.unwrap();

    backdate_unlock(roadmap.database_path(), graph.plan.id, 1, 8);

    let view = ready_view(&roadmap).await;
    assert_eq!(view.events, vec![RoadmapEvent::WeekUnlocked { week: 2 }]);

    let week_two = view.graph.week_by_number(2).unwrap();
    assert!(week_two.is_unlocked);
    assert!(!view.graph.week_by_number(1).unwrap().is_completed);
    // Week 2 was unlocked just now, so week 3 still waits
    assert!(!view.graph.week_by_number(3).unwrap().is_unlocked);

    // The unlock was committed with its timestamp
    let again = ready_view(&roadmap).await;
    assert!(again.events.is_empty());
    assert_eq!(
        again.graph.week_by_number(2).unwrap().unlocked_at,
        week_two.unlocked_at
    );
}

#[tokio::test]
async fn test_recent_week_stays_locked() {
    let (_temp_dir, roadmap) = create_test_roadmap().await;
    let graph = roadmap.import_plan(&fixture_plan()).await.unwrap();

    backdate_unlock(roadmap.database_path(), graph.plan.id, 1, 3);

    let view = ready_view(&roadmap).await;
    assert!(view.events.is_empty());
    assert!(!view.graph.week_by_number(2).unwrap().is_unlocked);
}

#[tokio::test]
async fn test_stale_unlocks_cascade_in_one_load() {
    let (_temp_dir, roadmap) = create_test_roadmap().await;
    let graph = roadmap.import_plan(&fixture_plan()).await.unwrap();

    // Complete week 1, then pretend week 2 has been open for ten days
    for id in week_task_ids(&graph, 1) {
        roadmap.toggle_task(&Id { id }).await.unwrap();
    }
    backdate_unlock(roadmap.database_path(), graph.plan.id, 2, 10);

    let view = ready_view(&roadmap).await;
    assert_eq!(view.events, vec![RoadmapEvent::WeekUnlocked { week: 3 }]);
    assert!(view.summary.weeks.iter().all(|w| w.is_unlocked));
}

#[tokio::test]
async fn test_complete_fixture_plan() {
    let (_temp_dir, roadmap) = create_test_roadmap().await;
    let graph = roadmap.import_plan(&fixture_plan()).await.unwrap();

    let mut events = Vec::new();
    for number in 1..=3 {
        for id in week_task_ids(&graph, number) {
            events.extend(roadmap.toggle_task(&Id { id }).await.unwrap().events);
        }
    }

    assert_eq!(
        events,
        vec![
            RoadmapEvent::WeekCompleted { next_week: 2 },
            RoadmapEvent::WeekUnlocked { week: 2 },
            RoadmapEvent::WeekCompleted { next_week: 3 },
            RoadmapEvent::WeekUnlocked { week: 3 },
            RoadmapEvent::WeekCompleted { next_week: 4 },
        ]
    );

    let view = ready_view(&roadmap).await;
    assert_eq!(view.summary.header, "Week 3 · 4 of 4 tasks complete");
    assert!((view.summary.overall_ratio() - 1.0).abs() < f64::EPSILON);
    assert!(view.graph.weeks.values().all(|w| w.is_completed));

    let plans = roadmap.list_plans().await.unwrap();
    assert!(plans.to_string().contains("(4/4)"));
}
