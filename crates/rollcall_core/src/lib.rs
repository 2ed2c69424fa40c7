//! Core domain logic for the Rollcall attendance roster.
//! This crate is the single source of truth for roster invariants.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use command::{CommandOutcome, CommandResult, ValidationError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryId, Presence, RosterEntry};
pub use model::roster::{Roster, RosterDataError};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::session::{
    EditMode, Notifier, RosterSession, SubmitOutcome, EMPTY_NAME_WARNING,
};
pub use store::{RosterStore, StoreError, StoreResult, DEFAULT_SLOT_KEY};
pub use view::{ColumnKind, ColumnView, RosterView, RowAction, RowView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
