//! Pure roster command handlers.
//!
//! # Responsibility
//! - Translate one user intent into the next roster value.
//! - Validate submitted names before any roster change.
//!
//! # Invariants
//! - Handlers never touch storage; persistence happens in `RosterStore`.
//! - Commands aimed at a missing id return `CommandOutcome::Unchanged`.
//! - Fresh ids never collide with an id already in the roster.

use crate::model::entry::{EntryId, RosterEntry};
use crate::model::roster::Roster;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult = Result<CommandOutcome, ValidationError>;

/// Input rejected before reaching the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Result of applying one command to a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command produced a new roster value.
    Changed(Roster),
    /// The command had no effect (e.g. the target id is gone).
    Unchanged,
}

impl CommandOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Trims `input` and rejects empty results.
pub fn normalize_name(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed)
}

/// Picks an id for a new entry from the clock reading `now_ms`.
///
/// Falls back to `max_id + 1` when the clock did not move past the
/// newest id, so adds within one millisecond stay distinct. When the
/// newest id is `EntryId::MAX`, the smallest unused non-negative id is
/// taken instead.
pub fn next_entry_id(roster: &Roster, now_ms: i64) -> EntryId {
    match roster.max_id() {
        Some(max_id) if max_id >= now_ms => max_id
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(roster)),
        _ => now_ms,
    }
}

fn smallest_unused_id(roster: &Roster) -> EntryId {
    let used: HashSet<EntryId> = roster.entries().iter().map(|entry| entry.id).collect();
    let mut candidate: EntryId = 0;
    while used.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

/// Appends a new `Unset` entry named `name`, returning the id it got.
pub fn add(
    roster: &Roster,
    name: &str,
    now_ms: i64,
) -> Result<(EntryId, Roster), ValidationError> {
    let name = normalize_name(name)?;
    let id = next_entry_id(roster, now_ms);
    let mut next = roster.clone();
    next.push(RosterEntry::new(id, name));
    Ok((id, next))
}

/// Renames entry `id`, keeping its id and presence.
pub fn update(roster: &Roster, id: EntryId, name: &str) -> CommandResult {
    let name = normalize_name(name)?;
    if !roster.contains(id) {
        return Ok(CommandOutcome::Unchanged);
    }

    let mut next = roster.clone();
    if let Some(entry) = next.get_mut(id) {
        entry.name = name.to_string();
    }
    Ok(CommandOutcome::Changed(next))
}

/// Removes entry `id`; deleting a missing id is a no-op.
pub fn delete(roster: &Roster, id: EntryId) -> CommandOutcome {
    let mut next = roster.clone();
    if next.remove(id) {
        CommandOutcome::Changed(next)
    } else {
        CommandOutcome::Unchanged
    }
}

/// Advances the presence of entry `id` by one toggle step.
pub fn toggle_presence(roster: &Roster, id: EntryId) -> CommandOutcome {
    let mut next = roster.clone();
    match next.get_mut(id) {
        Some(entry) => {
            entry.presence = entry.presence.toggled();
            CommandOutcome::Changed(next)
        }
        None => CommandOutcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add, delete, next_entry_id, normalize_name, update, CommandOutcome, ValidationError,
    };
    use crate::model::entry::{EntryId, Presence, RosterEntry};
    use crate::model::roster::Roster;

    fn changed(outcome: CommandOutcome) -> Roster {
        match outcome {
            CommandOutcome::Changed(roster) => roster,
            CommandOutcome::Unchanged => panic!("expected a changed roster"),
        }
    }

    #[test]
    fn normalize_name_trims_and_rejects_blank() {
        assert_eq!(normalize_name("  Alice \n").unwrap(), "Alice");
        assert_eq!(normalize_name(" \t ").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn next_entry_id_moves_past_existing_ids() {
        let roster = Roster::from_entries(vec![RosterEntry::new(1_000, "a")]).unwrap();
        assert_eq!(next_entry_id(&roster, 999), 1_001);
        assert_eq!(next_entry_id(&roster, 1_000), 1_001);
        assert_eq!(next_entry_id(&roster, 5_000), 5_000);
        assert_eq!(next_entry_id(&Roster::new(), 42), 42);
    }

    #[test]
    fn add_in_same_millisecond_yields_distinct_ids() {
        let (first_id, first) = add(&Roster::new(), "Alice", 10).unwrap();
        let (second_id, second) = add(&first, "Bob", 10).unwrap();

        assert_eq!((first_id, second_id), (10, 11));
        let ids: Vec<_> = second.entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn next_entry_id_reuses_gap_when_max_id_is_exhausted() {
        let roster = Roster::from_entries(vec![
            RosterEntry::new(EntryId::MAX, "Zed"),
            RosterEntry::new(0, "Amy"),
            RosterEntry::new(2, "Cal"),
        ])
        .unwrap();

        assert_eq!(next_entry_id(&roster, 5), 1);

        let (id, next) = add(&roster, "Bea", 5).unwrap();
        assert_eq!(id, 1);
        assert_eq!(next.len(), 4);
        assert!(Roster::from_entries(next.entries().to_vec()).is_ok());
    }

    #[test]
    fn update_keeps_presence_and_stores_trimmed_name() {
        let roster = Roster::from_entries(vec![
            RosterEntry::new(1, "Bob").with_presence(Presence::Absent)
        ])
        .unwrap();

        let next = changed(update(&roster, 1, "  Bobby ").unwrap());
        let entry = next.get(1).unwrap();
        assert_eq!(entry.name, "Bobby");
        assert_eq!(entry.presence, Presence::Absent);
    }

    #[test]
    fn update_rejects_empty_name_before_checking_target() {
        assert_eq!(
            update(&Roster::new(), 99, "   ").unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn delete_missing_id_is_unchanged() {
        assert_eq!(delete(&Roster::new(), 3), CommandOutcome::Unchanged);
    }
}
