//! Builder for creating and configuring Roadmap instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Roadmap;
use crate::{
    db::Database,
    engine::UnlockPolicy,
    error::{Result, RoadmapError},
};

/// Builder for creating and configuring Roadmap instances.
#[derive(Debug, Clone)]
pub struct RoadmapBuilder {
    database_path: Option<PathBuf>,
    policy: UnlockPolicy,
}

impl RoadmapBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            policy: UnlockPolicy::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/glowup/glowup.db` or `~/.local/share/glowup/glowup.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the rules used to unlock weeks.
    pub fn with_unlock_policy(mut self, policy: UnlockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the configured roadmap instance.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::FileSystem` if the database directory cannot be
    /// created, `RoadmapError::Database` if schema initialization fails
    pub async fn build(self) -> Result<Roadmap> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RoadmapError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), RoadmapError>(())
        })
        .await
        .map_err(|e| RoadmapError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Roadmap::new(db_path, self.policy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("glowup")
            .place_data_file("glowup.db")
            .map_err(|e| RoadmapError::XdgDirectory(e.to_string()))
    }
}

impl Default for RoadmapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
