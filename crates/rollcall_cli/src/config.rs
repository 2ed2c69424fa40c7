//! Command-line configuration.
//!
//! # Responsibility
//! - Parse global flags and subcommands for the `rollcall` binary.
//!
//! # Invariants
//! - Configuration comes from flags only; there is no config file.

use clap::{Parser, Subcommand};
use rollcall_core::{EntryId, DEFAULT_SLOT_KEY};
use std::path::PathBuf;

/// Attendance roster editor backed by a local SQLite file.
#[derive(Parser, Debug)]
#[command(name = "rollcall", version = rollcall_core::core_version())]
pub struct Cli {
    /// Roster database file; created on first use.
    #[arg(long, default_value = "rollcall.sqlite3")]
    pub db: PathBuf,
    /// Name of the durable slot holding the roster.
    #[arg(long, default_value = DEFAULT_SLOT_KEY)]
    pub slot: String,
    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the All / Present / Absent columns.
    Show,
    /// Add a student.
    Add { name: String },
    /// Rename the student with the given id.
    Rename { id: EntryId, name: String },
    /// Delete the student with the given id.
    Delete { id: EntryId },
    /// Toggle presence of the student with the given id.
    Toggle { id: EntryId },
    /// Interactive session with a shared input form.
    Repl,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Add { .. } => "add",
            Self::Rename { .. } => "rename",
            Self::Delete { .. } => "delete",
            Self::Toggle { .. } => "toggle",
            Self::Repl => "repl",
        }
    }
}
