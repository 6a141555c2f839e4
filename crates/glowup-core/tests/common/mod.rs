use glowup_core::{NewPlan, Roadmap, RoadmapBuilder};
use tempfile::TempDir;

/// Sample three-week plan shared by the integration tests.
pub const FIXTURE_PLAN: &str = include_str!("../fixtures/plan.json");

/// Helper function to create a test roadmap
pub async fn create_test_roadmap() -> (TempDir, Roadmap) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let roadmap = RoadmapBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create roadmap");
    (temp_dir, roadmap)
}

/// Parses the fixture plan.
pub fn fixture_plan() -> NewPlan {
    NewPlan::from_json(FIXTURE_PLAN).expect("Fixture should parse")
}
