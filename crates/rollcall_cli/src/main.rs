//! `rollcall` command-line entry point.
//!
//! # Responsibility
//! - Wire flags into logging, the roster database and a session.
//! - Run one-shot commands or the interactive form, then print the view.

mod config;
mod render;
mod repl;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::{Cli, Command};
use log::{debug, info};
use render::render_view;
use rollcall_core::db::open_db;
use rollcall_core::{
    default_log_level, init_logging, Notifier, RosterSession, RosterStore, SqliteSlotRepository,
    SubmitOutcome,
};
use std::io::{self, Write};

/// Prints warnings to stderr, standing in for a blocking alert.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = log_dir
            .to_str()
            .context("--log-dir must be valid UTF-8")?;
        init_logging(&level, log_dir)
            .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open roster database `{}`", cli.db.display()))?;
    let store = RosterStore::load(SqliteSlotRepository::new(&conn), cli.slot.as_str());
    let mut session = RosterSession::new(store, StderrNotifier);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = cli.command.unwrap_or(Command::Show);
    info!(
        "event=cli_run module=cli status=start command={} entries={}",
        command.label(),
        session.roster().len()
    );

    match command {
        Command::Show => {}
        Command::Add { name } => {
            session.set_input(name);
            if let SubmitOutcome::Added(id) = session.submit()? {
                writeln!(out, "added #{id}")?;
            }
        }
        Command::Rename { id, name } => {
            if session.begin_edit(id) {
                session.set_input(name);
                session.submit()?;
            } else {
                debug!("event=cli_rename module=cli status=skip reason=missing_target id={id}");
            }
        }
        Command::Delete { id } => {
            session.delete(id)?;
        }
        Command::Toggle { id } => {
            session.toggle(id)?;
        }
        Command::Repl => {
            let stdin = io::stdin();
            return repl::run_repl(&mut session, stdin.lock(), &mut out);
        }
    }

    write!(out, "{}", render_view(&session.view()))?;
    Ok(())
}
