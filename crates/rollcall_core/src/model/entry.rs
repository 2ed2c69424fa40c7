//! Roster entry domain model.
//!
//! # Responsibility
//! - Define the record tracked for every person on the roster.
//! - Own the presence transition table used by toggle commands.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `presence` starts as `Presence::Unset`.
//! - Wire shape is `{ id, name, isPresent? }`; `Unset` omits `isPresent`.

use serde::{Deserialize, Serialize};

/// Stable identifier of a roster entry.
///
/// Numeric so the durable mirror keeps the `id: number` wire shape.
pub type EntryId = i64;

/// Attendance marker for one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Never marked.
    #[default]
    Unset,
    Present,
    Absent,
}

impl Presence {
    /// Returns the state produced by one toggle.
    ///
    /// `Unset` counts as not present, so its first toggle yields `Present`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unset | Self::Absent => Self::Present,
            Self::Present => Self::Absent,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    fn to_wire(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Present => Some(true),
            Self::Absent => Some(false),
        }
    }

    fn from_wire(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Present,
            Some(false) => Self::Absent,
        }
    }
}

/// One tracked person on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct RosterEntry {
    pub id: EntryId,
    pub name: String,
    pub presence: Presence,
}

impl RosterEntry {
    /// Creates an entry with `Presence::Unset`.
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            presence: Presence::Unset,
        }
    }

    /// Builder-style helper used by import paths and tests.
    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }
}

/// Serialized form stored in the durable slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    id: EntryId,
    name: String,
    #[serde(
        rename = "isPresent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    is_present: Option<bool>,
}

impl From<EntryRecord> for RosterEntry {
    fn from(value: EntryRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            presence: Presence::from_wire(value.is_present),
        }
    }
}

impl From<RosterEntry> for EntryRecord {
    fn from(value: RosterEntry) -> Self {
        Self {
            id: value.id,
            name: value.name,
            is_present: value.presence.to_wire(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Presence;

    #[test]
    fn toggle_table_is_total() {
        assert_eq!(Presence::Unset.toggled(), Presence::Present);
        assert_eq!(Presence::Present.toggled(), Presence::Absent);
        assert_eq!(Presence::Absent.toggled(), Presence::Present);
    }

    #[test]
    fn wire_mapping_keeps_unset_distinct_from_absent() {
        assert_eq!(Presence::from_wire(None), Presence::Unset);
        assert_eq!(Presence::from_wire(Some(false)), Presence::Absent);
        assert_eq!(Presence::Absent.to_wire(), Some(false));
        assert_eq!(Presence::Unset.to_wire(), None);
    }
}
