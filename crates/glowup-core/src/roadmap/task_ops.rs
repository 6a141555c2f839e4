//! Task operations for the Roadmap.

use jiff::Timestamp;
use log::warn;

use super::Roadmap;
use crate::{
    engine::{self, ToggleOutcome},
    error::{Result, RoadmapError},
    params::Id,
};

impl Roadmap {
    /// Toggles a task of the latest plan and commits the cascade.
    ///
    /// The task flip, week recomputation, unlock pass and plan metadata are
    /// written in one transaction. On any error nothing is persisted.
    pub async fn toggle_task(&self, params: &Id) -> Result<ToggleOutcome> {
        let task_id = params.id;
        let policy = self.policy;

        self.with_database(move |db| {
            let Some(mut graph) = db.load_latest()? else {
                warn!("Cannot toggle task {task_id}: no plan exists");
                return Err(RoadmapError::TaskNotFound { id: task_id });
            };

            let outcome = engine::toggle_task(&mut graph, task_id, Timestamp::now(), &policy)?;
            db.save_roadmap(&graph)?;
            Ok(outcome)
        })
        .await
    }
}
