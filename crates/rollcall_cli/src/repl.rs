//! Interactive line-oriented front end over a `RosterSession`.
//!
//! # Responsibility
//! - Map typed commands onto form edits, submissions and row actions.
//! - Re-render the view after every command that may change it.

use crate::render::render_view;
use anyhow::Result;
use log::debug;
use rollcall_core::{EntryId, Notifier, RosterSession, RowAction, SlotRepository};
use std::io::{BufRead, Write};

const HELP: &str = "commands:
  type <text>   set the form input
  submit        add, or update the entry being edited
  edit <id>     start editing an entry
  delete <id>   delete an entry
  toggle <id>   toggle presence of an entry
  show          print the roster
  help          print this message
  quit          leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Type(String),
    Submit,
    Row(RowAction),
    Show,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let command = match word {
        "type" => ReplCommand::Type(rest.to_string()),
        "submit" => ReplCommand::Submit,
        "edit" => ReplCommand::Row(RowAction::Edit(parse_id(rest)?)),
        "delete" => ReplCommand::Row(RowAction::Delete(parse_id(rest)?)),
        "toggle" => ReplCommand::Row(RowAction::TogglePresence(parse_id(rest)?)),
        "show" => ReplCommand::Show,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

fn parse_id(value: &str) -> Result<EntryId, String> {
    value
        .trim()
        .parse::<EntryId>()
        .map_err(|_| format!("expected a numeric id, got `{}`", value.trim()))
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run_repl<R, N, I, O>(session: &mut RosterSession<R, N>, input: I, out: &mut O) -> Result<()>
where
    R: SlotRepository,
    N: Notifier,
    I: BufRead,
    O: Write,
{
    write!(out, "{}", render_view(&session.view()))?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };

        match command {
            ReplCommand::Type(text) => {
                session.set_input(text);
                continue;
            }
            ReplCommand::Submit => {
                session.submit()?;
            }
            ReplCommand::Row(action) => {
                if !session.dispatch(action)? {
                    debug!("event=repl_action module=cli status=skip reason=no_change action={action:?}");
                }
            }
            ReplCommand::Show => {}
            ReplCommand::Help => {
                write!(out, "{HELP}")?;
                continue;
            }
            ReplCommand::Quit => break,
        }
        write!(out, "\n{}", render_view(&session.view()))?;
    }
    out.flush()?;
    Ok(())
}
