//! Roster store: in-memory source of truth plus its durable mirror.
//!
//! # Responsibility
//! - Restore the roster from its named slot at startup.
//! - Persist every accepted roster value as a full snapshot.
//!
//! # Invariants
//! - `load` never fails; missing or corrupt data yields an empty roster.
//! - The held roster only advances after the snapshot write succeeded, so
//!   memory and the durable mirror stay equal after every mutation.
//! - Log events carry counts and ids only, never entry names.

use crate::command::CommandOutcome;
use crate::model::roster::Roster;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name used when callers do not pick one.
pub const DEFAULT_SLOT_KEY: &str = "students";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while writing the durable mirror.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode roster: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Serializes a roster into the durable wire format.
pub fn encode_roster(roster: &Roster) -> Result<String, serde_json::Error> {
    serde_json::to_string(roster)
}

/// Parses the durable wire format, including id-uniqueness checks.
pub fn decode_roster(raw: &str) -> Result<Roster, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Owns the current roster and the slot repository that mirrors it.
pub struct RosterStore<R: SlotRepository> {
    repo: R,
    slot_key: String,
    roster: Roster,
}

impl<R: SlotRepository> RosterStore<R> {
    /// Restores the roster held under `slot_key`.
    ///
    /// Read failures, absent slots and unparsable values all degrade to an
    /// empty roster; the cause is logged but not returned.
    pub fn load(repo: R, slot_key: impl Into<String>) -> Self {
        let slot_key = slot_key.into();
        let roster = match repo.read_slot(&slot_key) {
            Ok(Some(raw)) => match decode_roster(&raw) {
                Ok(roster) => {
                    info!(
                        "event=roster_load module=store status=ok entries={}",
                        roster.len()
                    );
                    roster
                }
                Err(err) => {
                    warn!(
                        "event=roster_load module=store status=error error_code=corrupt_slot bytes={} error={}",
                        raw.len(),
                        err
                    );
                    Roster::new()
                }
            },
            Ok(None) => {
                debug!("event=roster_load module=store status=skip reason=empty_slot");
                Roster::new()
            }
            Err(err) => {
                warn!(
                    "event=roster_load module=store status=error error_code=slot_read_failed error={}",
                    err
                );
                Roster::new()
            }
        };

        Self {
            repo,
            slot_key,
            roster,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Overwrites the durable mirror with `roster`.
    pub fn save(&self, roster: &Roster) -> StoreResult<()> {
        let raw = encode_roster(roster)?;
        if let Err(err) = self.repo.write_slot(&self.slot_key, &raw) {
            warn!(
                "event=roster_save module=store status=error entries={} error={}",
                roster.len(),
                err
            );
            return Err(err.into());
        }
        debug!(
            "event=roster_save module=store status=ok entries={} bytes={}",
            roster.len(),
            raw.len()
        );
        Ok(())
    }

    /// Commits a command outcome.
    ///
    /// Returns `Ok(true)` when a new roster was persisted and adopted,
    /// `Ok(false)` when the outcome was `Unchanged`.
    pub fn apply(&mut self, outcome: CommandOutcome) -> StoreResult<bool> {
        match outcome {
            CommandOutcome::Changed(next) => {
                self.save(&next)?;
                self.roster = next;
                Ok(true)
            }
            CommandOutcome::Unchanged => Ok(false),
        }
    }
}
