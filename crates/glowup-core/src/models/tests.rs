#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        display::{PlanSummaries, WeekDetail},
        models::{
            join_products, parse_products, Plan, PlanSummary, RoadmapEvent, RoadmapGraph, Task,
            Week,
        },
    };

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn create_test_task(id: u64, week_id: u64, priority: i64, completed: bool) -> Task {
        Task {
            id,
            week_id,
            title: format!("Task {id}"),
            body: "Do the thing".to_string(),
            category: "Skincare".to_string(),
            timeframe: "Morning".to_string(),
            priority,
            is_completed: completed,
            completed_at: completed.then(|| ts(1641081600)),
            products: vec!["Cleanser".to_string(), "Toner".to_string()],
        }
    }

    fn create_test_week(id: u64, number: u32, unlocked: bool) -> Week {
        Week {
            id,
            plan_id: 1,
            number,
            title: format!("Week {number} title"),
            summary: format!("Summary for week {number}"),
            is_completed: false,
            is_unlocked: unlocked,
            unlocked_at: unlocked.then(|| ts(1640995200)),
            completed_at: None,
        }
    }

    fn create_test_graph() -> RoadmapGraph {
        let plan = Plan {
            id: 1,
            current_week: 2,
            total_weeks: 2,
            created_at: ts(1640995200), // 2022-01-01 00:00:00 UTC
            updated_at: ts(1641081600), // 2022-01-02 00:00:00 UTC
        };
        RoadmapGraph::new(
            plan,
            vec![create_test_week(20, 2, false), create_test_week(10, 1, true)],
            vec![
                create_test_task(3, 10, 2, false),
                create_test_task(2, 10, 1, true),
                create_test_task(1, 10, 2, false),
                create_test_task(4, 20, 1, false),
            ],
        )
    }

    #[test]
    fn test_set_completed_keeps_timestamp_in_sync() {
        let mut task = create_test_task(1, 10, 0, false);
        task.set_completed(true, ts(1700000000));
        assert!(task.is_completed);
        assert_eq!(task.completed_at, Some(ts(1700000000)));

        task.set_completed(false, ts(1700000100));
        assert!(!task.is_completed);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn test_parse_products() {
        assert_eq!(
            parse_products("Vitamin C serum\n\n  SPF 50  \r\nLip balm\n"),
            vec!["Vitamin C serum", "SPF 50", "Lip balm"]
        );
        assert!(parse_products("").is_empty());
        assert!(parse_products("\n \n").is_empty());
    }

    #[test]
    fn test_join_products() {
        assert_eq!(join_products(&[]), None);
        assert_eq!(
            join_products(&["A".to_string(), "B".to_string()]),
            Some("A\nB".to_string())
        );
    }

    #[test]
    fn test_weeks_in_order_by_number() {
        let graph = create_test_graph();
        let numbers: Vec<u32> = graph.weeks_in_order().iter().map(|w| w.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(graph.week_ids_in_order(), vec![10, 20]);
    }

    #[test]
    fn test_tasks_ordered_by_priority_then_id() {
        let graph = create_test_graph();
        let ids: Vec<u64> = graph.tasks_for_week(10).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_task_counts() {
        let graph = create_test_graph();
        assert_eq!(graph.task_counts(10), (1, 3));
        assert_eq!(graph.task_counts(20), (0, 1));
        assert_eq!(graph.task_counts(99), (0, 0));
    }

    #[test]
    fn test_current_week_is_max_number() {
        let graph = create_test_graph();
        assert_eq!(graph.max_week_number(), 2);
        assert_eq!(graph.current_week().map(|w| w.id), Some(20));
        assert!(!graph.metadata_is_stale());
    }

    #[test]
    fn test_refresh_metadata() {
        let mut graph = create_test_graph();
        graph.weeks.remove(&20);
        assert!(graph.metadata_is_stale());

        graph.refresh_metadata(ts(1700000000));
        assert_eq!(graph.plan.current_week, 1);
        assert_eq!(graph.plan.total_weeks, 1);
        assert_eq!(graph.plan.updated_at, ts(1700000000));
    }

    #[test]
    fn test_plan_summary_from_graph() {
        let summary = PlanSummary::from(&create_test_graph());
        assert_eq!(summary.id, 1);
        assert_eq!(summary.week_count, 2);
        assert_eq!(summary.unlocked_weeks, 1);
        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.completed_tasks, 1);
    }

    #[test]
    fn test_task_display() {
        let output = create_test_task(7, 10, 1, false).to_string();
        assert!(output.contains("- [ ] **Task 7** (ID: 7)"));
        assert!(output.contains("*Skincare · Morning*"));
        assert!(output.contains("Products: Cleanser, Toner"));
        assert!(!output.contains("Completed:"));

        let done = create_test_task(8, 10, 1, true).to_string();
        assert!(done.contains("- [x] **Task 8**"));
        assert!(done.contains("Completed:"));
    }

    #[test]
    fn test_week_detail_display_unlocked() {
        let graph = create_test_graph();
        let week = &graph.weeks[&10];
        let output = WeekDetail {
            graph: &graph,
            week,
        }
        .to_string();

        assert!(output.contains("## Week 1: Week 1 title (➤ Unlocked)"));
        assert!(output.contains("Summary for week 1"));
        assert!(output.contains("(1/3)"));
        let first = output.find("Task 2").unwrap();
        let second = output.find("Task 1").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_week_detail_display_locked_hides_tasks() {
        let graph = create_test_graph();
        let week = &graph.weeks[&20];
        let output = WeekDetail {
            graph: &graph,
            week,
        }
        .to_string();

        assert!(output.contains("(○ Locked)"));
        assert!(output.contains("Finish the previous week"));
        assert!(!output.contains("Task 4"));
    }

    #[test]
    fn test_graph_display() {
        let output = create_test_graph().to_string();
        assert!(output.contains("## Plan 1 (1/4)"));
        assert!(output.contains("- **Weeks**: 2 (1 unlocked)"));
        assert!(output.find("Week 1 title").unwrap() < output.find("Week 2 title").unwrap());
    }

    #[test]
    fn test_empty_graph_display() {
        let mut graph = create_test_graph();
        graph.weeks.clear();
        graph.tasks.clear();
        assert!(graph.to_string().contains("No weeks in this plan."));
    }

    #[test]
    fn test_plan_summary_display() {
        let output = PlanSummary::from(&create_test_graph()).to_string();
        assert!(output.contains("## Plan 1 (1/4)"));
        assert!(output.contains("- **Weeks**: 2 (1 unlocked)"));
    }

    #[test]
    fn test_plan_summaries_display() {
        let summary = PlanSummary::from(&create_test_graph());
        let mut newer = summary.clone();
        newer.id = 2;

        let output = PlanSummaries(vec![newer, summary]).to_string();
        assert!(output.starts_with("# History: 2 plans"));
        assert!(output.find("## Plan 2").unwrap() < output.find("## Plan 1").unwrap());

        assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            RoadmapEvent::WeekCompleted { next_week: 3 }.to_string(),
            "Week 2 completed"
        );
        assert_eq!(
            RoadmapEvent::WeekUnlocked { week: 3 }.to_string(),
            "Week 3 unlocked"
        );
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&RoadmapEvent::WeekCompleted { next_week: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"week_completed","next_week":2}"#);
    }

    #[test]
    fn test_task_serialization_skips_empty_fields() {
        let mut task = create_test_task(1, 10, 0, false);
        task.products.clear();
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("completed_at").is_none());
        assert!(value.get("products").is_none());
    }
}
