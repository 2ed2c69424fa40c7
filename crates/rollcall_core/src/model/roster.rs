//! Ordered roster collection.
//!
//! # Responsibility
//! - Hold entries in insertion order.
//! - Reject data that breaks id uniqueness when decoding.
//!
//! # Invariants
//! - Entry ids are pairwise distinct.
//! - Serialized as a plain JSON array of entries.

use crate::model::entry::{EntryId, Presence, RosterEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when a roster value would break collection invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterDataError {
    DuplicateId(EntryId),
}

impl Display for RosterDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate roster entry id: {id}"),
        }
    }
}

impl Error for RosterDataError {}

/// Ordered sequence of roster entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RosterEntry>", into = "Vec<RosterEntry>")]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from entries, rejecting duplicate ids.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Result<Self, RosterDataError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(RosterDataError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id currently in use.
    pub fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|entry| entry.id).max()
    }

    /// Entries whose presence equals `presence` exactly, in roster order.
    pub fn filter_presence(&self, presence: Presence) -> impl Iterator<Item = &RosterEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.presence == presence)
    }

    /// Appends an entry; callers guarantee the id is fresh.
    pub(crate) fn push(&mut self, entry: RosterEntry) {
        debug_assert!(!self.contains(entry.id));
        self.entries.push(entry);
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut RosterEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Removes the entry with `id`, returning whether anything was removed.
    pub(crate) fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}

impl TryFrom<Vec<RosterEntry>> for Roster {
    type Error = RosterDataError;

    fn try_from(value: Vec<RosterEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(value)
    }
}

impl From<Roster> for Vec<RosterEntry> {
    fn from(value: Roster) -> Self {
        value.entries
    }
}

#[cfg(test)]
mod tests {
    use super::{Roster, RosterDataError};
    use crate::model::entry::RosterEntry;

    #[test]
    fn from_entries_rejects_duplicate_ids() {
        let err = Roster::from_entries(vec![RosterEntry::new(7, "a"), RosterEntry::new(7, "b")])
            .unwrap_err();
        assert_eq!(err, RosterDataError::DuplicateId(7));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut roster = Roster::from_entries(vec![
            RosterEntry::new(1, "a"),
            RosterEntry::new(2, "b"),
            RosterEntry::new(3, "c"),
        ])
        .unwrap();

        assert!(roster.remove(2));
        assert!(!roster.remove(2));
        let ids: Vec<_> = roster.entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
