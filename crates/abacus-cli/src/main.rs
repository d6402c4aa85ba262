//! Abacus CLI - inspect and maintain the local vault
//!
//! Usage:
//!   abacus status                  Show what the vault holds
//!   abacus calc 2 + 3 * 4          Evaluate and record in history
//!   abacus history list            List past calculations
//!   abacus notes list              List private notes
//!   abacus media export <id> <path>
//!   abacus reset --passcode --yes  Forget the passcode

mod cli;
mod commands;
mod error;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, HistoryCommands, MediaCommands, NotesCommands};
use crate::commands::calc::run_calc;
use crate::commands::common::open_vault;
use crate::commands::completions::run_completions;
use crate::commands::history::{run_history_clear, run_history_list};
use crate::commands::media::{run_media_export, run_media_list};
use crate::commands::notes::run_notes_list;
use crate::commands::reset::{run_reset, ResetTarget};
use crate::commands::status::run_status;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("abacus=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let vault = open_vault(cli.data_dir).await?;

    match cli.command {
        Commands::Status { json } => run_status(&vault, json).await?,
        Commands::Calc { expression } => run_calc(&vault, &expression)?,
        Commands::History { command } => match command {
            HistoryCommands::List { limit, json } => run_history_list(&vault, limit, json)?,
            HistoryCommands::Clear { yes } => {
                run_history_clear(&vault, yes)?;
            }
        },
        Commands::Notes { command } => match command {
            NotesCommands::List { json } => run_notes_list(&vault, json)?,
        },
        Commands::Media { command } => match command {
            MediaCommands::List { json } => run_media_list(&vault, json).await?,
            MediaCommands::Export { id, path } => {
                run_media_export(&vault, &id, &path).await?;
            }
        },
        Commands::Reset { all, yes, .. } => {
            let target = if all {
                ResetTarget::Everything
            } else {
                ResetTarget::Passcode
            };
            run_reset(&vault, target, yes).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
