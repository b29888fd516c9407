//! Lumen CLI Application
//!
//! Command-line front end for the decision journal.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use lumen_core::{Journal, StoreBuilder};
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

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open decision journal")?;

    let mut cli = Cli::new(Journal::new(store), TerminalRenderer::new(!no_color));

    info!("Lumen started");

    match command {
        Some(New(args)) => cli.new_decision(args),
        Some(List) | None => cli.list(),
        Some(Show(args)) => cli.show(args),
        Some(Edit(args)) => cli.edit(args),
        Some(Review(args)) => cli.review(args),
        Some(Reopen(args)) => cli.reopen(args),
        Some(Delete(args)) => cli.delete(args),
        Some(Templates) => cli.templates(),
        Some(Assist(args)) => cli.assist(args).await,
    }
}
