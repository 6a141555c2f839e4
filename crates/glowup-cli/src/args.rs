use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Week-by-week glow-up roadmap in the terminal
///
/// GlowUp keeps a multi-week self-improvement plan. Each week holds a handful
/// of tasks; finishing a week, or leaving it open for seven days, unlocks the
/// next one. Plans come from an external generator as JSON and are imported
/// with `glowup plan import`.
#[derive(Parser)]
#[command(version, about, name = "glowup")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/glowup/glowup.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the GlowUp CLI
///
/// Without a command the current roadmap is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Import, show and manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Work with tasks of the current plan
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
