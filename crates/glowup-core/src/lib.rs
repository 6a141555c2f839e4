//! Core library for the GlowUp glow roadmap.
//!
//! A roadmap is a multi-week [`Plan`] of [`Week`]s, each holding [`Task`]s.
//! Weeks unlock one after another: a week opens when the previous one is
//! completed, or when the previous one has been open for seven days without
//! being finished. Completing every task of a week completes the week.
//!
//! The crate is layered:
//!
//! - [`models`]: plain data, held in an id-keyed [`RoadmapGraph`]
//! - [`engine`]: pure unlock, toggle and projection logic
//! - [`db`]: SQLite persistence with transactional saves
//! - [`roadmap`]: async facade tying storage and engine together
//! - [`display`]: markdown formatting for terminals
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glowup_core::{params::{Id, NewPlan}, RoadmapBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let roadmap = RoadmapBuilder::new()
//!     .with_database_path(Some("glowup.db"))
//!     .build()
//!     .await?;
//!
//! let generated = r#"{"weeks": [
//!     {"number": 1, "title": "Foundations", "tasks": [{"title": "Morning cleanse"}]},
//!     {"number": 2, "title": "Protect", "tasks": [{"title": "Apply SPF 30+"}]}
//! ]}"#;
//! let plan = roadmap.import_plan(&NewPlan::from_json(generated)?).await?;
//!
//! // Completing week 1's only task completes the week and unlocks week 2
//! let first_task = plan.tasks.keys().copied().min().unwrap_or_default();
//! let outcome = roadmap.toggle_task(&Id { id: first_task }).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod roadmap;

// Re-export commonly used types
pub use db::Database;
pub use display::{ClearResult, ImportResult, PlanSummaries};
pub use engine::{
    dispatch, evaluate_unlocks, select_week, toggle_task, Notifier, RoadmapSummary,
    ToggleOutcome, UnlockPolicy, WeekProgress,
};
pub use error::{Result, RoadmapError};
pub use models::{Plan, PlanSummary, RoadmapEvent, RoadmapGraph, Task, Week};
pub use params::{Id, NewPlan, NewTask, NewWeek, ShowRoadmap};
pub use roadmap::{Roadmap, RoadmapBuilder, RoadmapState, RoadmapView};
