use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AssistArgs, DecisionIdArg, DeleteDecisionArgs, EditDecisionArgs, NewDecisionArgs,
    ShowDecisionArgs,
};

/// Lumen: a personal decision journal
///
/// Log decisions while you make them (the situation, your choice, your
/// reasoning and what you expect to happen) and come back later to record
/// what actually happened. An optional reasoning assistant can critique your
/// reasoning, brainstorm options, ask follow-up questions and find resources.
#[derive(Parser)]
#[command(version, about, name = "lumen")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lumen/lumen.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, decisions are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Log a new decision
    #[command(alias = "n")]
    New(NewDecisionArgs),
    /// List decisions, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a decision
    #[command(alias = "s")]
    Show(ShowDecisionArgs),
    /// Edit a decision's text fields
    #[command(alias = "e")]
    Edit(EditDecisionArgs),
    /// Mark a decision as reviewed, unlocking outcome and reflections
    #[command(alias = "r")]
    Review(DecisionIdArg),
    /// Move a reviewed decision back to pending
    Reopen(DecisionIdArg),
    /// Delete a decision permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteDecisionArgs),
    /// List the built-in decision templates
    #[command(alias = "t")]
    Templates,
    /// Ask the reasoning assistant about a decision
    #[command(alias = "a")]
    Assist(AssistArgs),
}
