//! High-level roadmap API backed by the SQLite store.
//!
//! [`Roadmap`] is the handle front ends hold. Each call opens the database on
//! a blocking worker, runs the pure [`engine`](crate::engine) over the loaded
//! graph and commits the result in one transaction:
//!
//! ```text
//! load latest plan ─▶ engine (unlock / toggle) ─▶ save in one transaction
//!                                              └─▶ events back to caller
//! ```
//!
//! A failed commit leaves the store untouched and the in-memory graph is
//! dropped; the next load starts from what the store holds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use glowup_core::{params::{NewPlan, ShowRoadmap}, RoadmapBuilder, RoadmapState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let roadmap = RoadmapBuilder::new()
//!     .with_database_path(Some("glowup.db"))
//!     .build()
//!     .await?;
//!
//! let plan = NewPlan::from_json(r#"{"weeks":[{"number":1,"title":"Start","tasks":[{"title":"Cleanse"}]}]}"#)?;
//! roadmap.import_plan(&plan).await?;
//!
//! if let RoadmapState::Ready(view) = roadmap.show_roadmap(&ShowRoadmap::default()).await? {
//!     println!("{}", view.summary.header);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    engine::{RoadmapSummary, UnlockPolicy},
    error::{Result, RoadmapError},
    models::{RoadmapEvent, RoadmapGraph},
};

pub mod builder;
pub mod plan_ops;
pub mod task_ops;


pub use builder::RoadmapBuilder;

/// Main interface for reading and progressing the user's roadmap.
pub struct Roadmap {
    pub(crate) db_path: PathBuf,
    pub(crate) policy: UnlockPolicy,
}

/// Outcome of loading the authoritative plan.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapState {
    /// No plan has been generated yet
    Empty,
    /// The latest plan, with unlocks evaluated
    Ready(RoadmapView),
}

/// A reconciled snapshot ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapView {
    pub graph: RoadmapGraph,
    pub summary: RoadmapSummary,
    /// Week number to display
    pub selected_week: Option<u32>,
    /// Unlocks that happened while loading
    pub events: Vec<RoadmapEvent>,
}

impl Roadmap {
    /// Creates a new roadmap handle with the specified database path.
    pub(crate) fn new(db_path: PathBuf, policy: UnlockPolicy) -> Self {
        Self { db_path, policy }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
