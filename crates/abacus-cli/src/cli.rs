use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Inspect and maintain the local Abacus vault")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to ABACUS_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what the vault holds
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate an arithmetic expression and record it in history
    Calc {
        /// Expression, e.g. `2 + 3 * 4`
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Calculation history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Private notes
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
    /// Private photos and videos
    Media {
        #[command(subcommand)]
        command: MediaCommands,
    },
    /// Remove the passcode or everything in the vault
    #[command(group(ArgGroup::new("target").required(true).args(["passcode", "all"])))]
    Reset {
        /// Forget the passcode only; the next qualifying entry sets a new one
        #[arg(long)]
        passcode: bool,
        /// Remove the passcode, history, notes and media
        #[arg(long)]
        all: bool,
        /// Confirm the irreversible operation
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past calculations, newest first
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove every past calculation
    Clear {
        /// Confirm the irreversible operation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NotesCommands {
    /// List notes, most recently created first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum MediaCommands {
    /// List media, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write one item's payload to a file
    Export {
        /// Media ID
        id: String,
        /// Destination file
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
