//! # csel CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use csel_cli::edit::{run_edit, EditArgs};
use csel_cli::search::{run_search, SearchArgs};
use csel_cli::select::{run_select, SelectArgs};
use csel_cli::show::{run_reset, run_show, ResetArgs};
use csel_cli::submit::run_submit;

/// Contact Selection Stack CLI.
///
/// Search, select, and refine contact details for a client and their
/// primary and secondary contacts. Changes are saved automatically; a
/// final submit logs the full configuration on the server.
#[derive(Parser, Debug)]
#[command(name = "csel", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the persisted selection state (default: cwd).
    #[arg(long, global = true)]
    state_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current selection state.
    Show,

    /// Search contacts and print the result page.
    Search(SearchArgs),

    /// Search and select a result into a slot.
    Select(SelectArgs),

    /// Create or edit a slot's contact from flag values.
    Edit(EditArgs),

    /// Reset one slot, or all of them.
    Reset(ResetArgs),

    /// Submit the full selection to the logging endpoint.
    Submit,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let root = cli
        .state_root
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Show => run_show(&root),
        Commands::Search(args) => run_search(&args, &root).await,
        Commands::Select(args) => run_select(&args, &root).await,
        Commands::Edit(args) => run_edit(&args, &root).await,
        Commands::Reset(args) => run_reset(&args, &root),
        Commands::Submit => run_submit(&root).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
