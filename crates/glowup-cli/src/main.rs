//! GlowUp CLI Application
//!
//! Command-line front end for the week-by-week glow-up roadmap.

mod args;
mod cli;
mod notifier;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use glowup_core::{params::ShowRoadmap, RoadmapBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let roadmap = RoadmapBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize roadmap")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(roadmap, renderer);

    info!("GlowUp started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        None => cli.show_roadmap(&ShowRoadmap::default()).await,
    }
}
