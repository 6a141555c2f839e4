//! Command definitions and handlers for the GlowUp CLI
//!
//! Argument structs carry the clap derives and convert into the plain
//! parameter types of `glowup_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Roadmap → markdown → renderer
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use glowup_core::{
    dispatch,
    params::{Id, NewPlan, ShowRoadmap},
    ClearResult, ImportResult, Roadmap, RoadmapState,
};
use log::debug;

use crate::{notifier::LogNotifier, renderer::TerminalRenderer};

/// Import a generated plan
///
/// Reads the JSON document produced by the plan generator. The imported plan
/// becomes the current one; older plans stay in the history.
#[derive(Args)]
pub struct ImportPlanArgs {
    /// Path to the plan JSON file
    #[arg(help = "Path to the generated plan JSON file")]
    pub file: PathBuf,
}

/// Show the current roadmap
///
/// Evaluates week unlocks, then prints the header, overall progress, the week
/// list and the tasks of the selected week.
#[derive(Args, Default)]
pub struct ShowRoadmapArgs {
    /// Week number to show instead of the current week
    #[arg(short, long, help = "Week number to show instead of the current week")]
    pub week: Option<u32>,
}

impl From<ShowRoadmapArgs> for ShowRoadmap {
    fn from(val: ShowRoadmapArgs) -> Self {
        ShowRoadmap { week: val.week }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Import a generated plan from a JSON file
    #[command(alias = "i")]
    Import(ImportPlanArgs),
    /// Show the current roadmap
    #[command(alias = "s")]
    Show(ShowRoadmapArgs),
    /// List all stored plans, newest first
    #[command(aliases = ["h", "ls"])]
    History,
    /// Delete every stored plan
    Clear,
}

/// Toggle a task's completion
///
/// Completing the last open task of a week completes the week and unlocks the
/// next one. Toggling a completed task reopens it.
#[derive(Args)]
pub struct ToggleTaskArgs {
    #[arg(help = "Unique identifier of the task to toggle")]
    pub id: u64,
}

impl From<ToggleTaskArgs> for Id {
    fn from(val: ToggleTaskArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Toggle a task between open and completed
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
}

/// Runs commands against a roadmap and renders their output.
pub struct Cli {
    roadmap: Roadmap,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(roadmap: Roadmap, renderer: TerminalRenderer) -> Self {
        Self { roadmap, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Import(args) => self.import_plan(&args.file).await,
            PlanCommands::Show(args) => self.show_roadmap(&args.into()).await,
            PlanCommands::History => self.list_plans().await,
            PlanCommands::Clear => self.clear_history().await,
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Toggle(args) => self.toggle_task(&args.into()).await,
        }
    }

    async fn import_plan(&self, file: &Path) -> Result<()> {
        let json = fs::read_to_string(file)
            .with_context(|| format!("Failed to read plan file {}", file.display()))?;
        let new_plan = NewPlan::from_json(&json).context("Failed to parse plan file")?;

        let graph = self
            .roadmap
            .import_plan(&new_plan)
            .await
            .context("Failed to import plan")?;

        self.renderer.render(&ImportResult(graph).to_string())
    }

    pub async fn show_roadmap(&self, params: &ShowRoadmap) -> Result<()> {
        let state = self
            .roadmap
            .show_roadmap(params)
            .await
            .context("Failed to load roadmap")?;

        match state {
            RoadmapState::Empty => self
                .renderer
                .render("No roadmap yet. Import one with `glowup plan import <FILE>`.\n"),
            RoadmapState::Ready(view) => {
                debug!("Showing week {:?} of plan {}", view.selected_week, view.graph.plan.id);
                self.renderer.render(&view.to_string())
            }
        }
    }

    async fn list_plans(&self) -> Result<()> {
        let plans = self
            .roadmap
            .list_plans()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&plans.to_string())
    }

    async fn clear_history(&self) -> Result<()> {
        let removed = self
            .roadmap
            .clear_history()
            .await
            .context("Failed to clear history")?;
        self.renderer.render(&ClearResult(removed).to_string())
    }

    async fn toggle_task(&self, params: &Id) -> Result<()> {
        let outcome = match self.roadmap.toggle_task(params).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_not_found() => {
                bail!("Task {} is not part of the current plan", params.id)
            }
            Err(e) => return Err(e).context(format!("Failed to toggle task {}", params.id)),
        };

        dispatch(&outcome.events, &LogNotifier);
        self.renderer.render(&outcome.to_string())
    }
}
