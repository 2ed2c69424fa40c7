//! Interactive roster session.
//!
//! # Responsibility
//! - Own the roster store, the shared input field and edit mode.
//! - Route submissions to add or update depending on edit mode.
//! - Warn the user through an injected `Notifier` on rejected input.
//!
//! # Invariants
//! - Submitting while `Idle` always adds; only `begin_edit` enters editing.
//! - Every accepted mutation is persisted before the session reports it.
//! - A rejected submission changes neither roster, input nor edit mode.

use crate::command::{self, CommandOutcome, ValidationError};
use crate::model::entry::EntryId;
use crate::model::roster::Roster;
use crate::repo::slot_repo::SlotRepository;
use crate::store::{RosterStore, StoreResult};
use crate::view::{RosterView, RowAction};
use log::info;
use std::time::{SystemTime, UNIX_EPOCH};

/// Message shown when a blank name is submitted.
pub const EMPTY_NAME_WARNING: &str = "Please enter a student name";

/// Sink for blocking user-facing warnings.
pub trait Notifier {
    fn warn(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Which command a submission resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(EntryId),
}

/// What a call to `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EntryId),
    Updated(EntryId),
    /// The edited entry disappeared before submission; form was reset.
    TargetMissing(EntryId),
    /// Input failed validation; the user was warned.
    Rejected(ValidationError),
}

/// Single-user editing session over a roster store.
pub struct RosterSession<R: SlotRepository, N: Notifier> {
    store: RosterStore<R>,
    notifier: N,
    mode: EditMode,
    input: String,
    clock: fn() -> i64,
}

impl<R: SlotRepository, N: Notifier> RosterSession<R, N> {
    pub fn new(store: RosterStore<R>, notifier: N) -> Self {
        Self {
            store,
            notifier,
            mode: EditMode::Idle,
            input: String::new(),
            clock: epoch_millis,
        }
    }

    /// Replaces the id clock; used to make generated ids deterministic.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn roster(&self) -> &Roster {
        self.store.roster()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Enters editing for `id` and seeds the input with its current name.
    ///
    /// Returns `false` and leaves state untouched when `id` is unknown.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.store.roster().get(id) else {
            return false;
        };
        self.input = entry.name.clone();
        self.mode = EditMode::Editing(id);
        true
    }

    /// Submits the shared input as an add or an update.
    pub fn submit(&mut self) -> StoreResult<SubmitOutcome> {
        if let Err(err) = command::normalize_name(&self.input) {
            info!(
                "event=roster_submit module=session status=error error_code=empty_name mode={}",
                mode_label(self.mode)
            );
            self.notifier.warn(EMPTY_NAME_WARNING);
            return Ok(SubmitOutcome::Rejected(err));
        }

        match self.mode {
            EditMode::Idle => self.submit_add(),
            EditMode::Editing(id) => self.submit_update(id),
        }
    }

    fn submit_add(&mut self) -> StoreResult<SubmitOutcome> {
        let (id, next) = match command::add(self.store.roster(), &self.input, (self.clock)()) {
            Ok(added) => added,
            Err(err) => return Ok(SubmitOutcome::Rejected(err)),
        };
        self.store.apply(CommandOutcome::Changed(next))?;
        self.input.clear();
        info!("event=roster_add module=session status=ok id={id}");
        Ok(SubmitOutcome::Added(id))
    }

    fn submit_update(&mut self, id: EntryId) -> StoreResult<SubmitOutcome> {
        let outcome = match command::update(self.store.roster(), id, &self.input) {
            Ok(outcome) => outcome,
            Err(err) => return Ok(SubmitOutcome::Rejected(err)),
        };
        let changed = self.store.apply(outcome)?;
        self.input.clear();
        self.mode = EditMode::Idle;

        if changed {
            info!("event=roster_update module=session status=ok id={id}");
            Ok(SubmitOutcome::Updated(id))
        } else {
            info!("event=roster_update module=session status=skip reason=missing_target id={id}");
            Ok(SubmitOutcome::TargetMissing(id))
        }
    }

    /// Deletes entry `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: EntryId) -> StoreResult<bool> {
        let changed = self
            .store
            .apply(command::delete(self.store.roster(), id))?;
        info!(
            "event=roster_delete module=session status={} id={id}",
            status_label(changed)
        );
        Ok(changed)
    }

    /// Toggles presence of entry `id`. Returns whether anything changed.
    pub fn toggle(&mut self, id: EntryId) -> StoreResult<bool> {
        let changed = self
            .store
            .apply(command::toggle_presence(self.store.roster(), id))?;
        info!(
            "event=roster_toggle module=session status={} id={id}",
            status_label(changed)
        );
        Ok(changed)
    }

    /// Runs a row action produced by `RosterView`.
    pub fn dispatch(&mut self, action: RowAction) -> StoreResult<bool> {
        match action {
            RowAction::Edit(id) => Ok(self.begin_edit(id)),
            RowAction::Delete(id) => self.delete(id),
            RowAction::TogglePresence(id) => self.toggle(id),
        }
    }

    /// Re-derives the current view.
    pub fn view(&self) -> RosterView {
        RosterView::project(self.store.roster(), self.mode, &self.input)
    }
}

fn mode_label(mode: EditMode) -> &'static str {
    match mode {
        EditMode::Idle => "idle",
        EditMode::Editing(_) => "editing",
    }
}

fn status_label(changed: bool) -> &'static str {
    if changed {
        "ok"
    } else {
        "skip"
    }
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
