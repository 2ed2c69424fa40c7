//! Read-only projections of the roster for presentation layers.
//!
//! # Responsibility
//! - Derive the All / Present / Absent columns from one roster value.
//! - Attach the actions each row offers, labeled by the state they lead to.
//!
//! # Invariants
//! - Projection never mutates the roster; actions are only descriptions.
//! - Present and Absent columns match presence exactly, so `Unset` entries
//!   appear in neither.

use crate::model::entry::{EntryId, Presence, RosterEntry};
use crate::model::roster::Roster;
use crate::service::session::EditMode;

pub const INPUT_PLACEHOLDER: &str = "Enter student name";
pub const ADD_LABEL: &str = "Add Student";
pub const UPDATE_LABEL: &str = "Update Student";

/// Action a row can dispatch back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(EntryId),
    Delete(EntryId),
    TogglePresence(EntryId),
}

/// Action plus its button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub label: &'static str,
    pub action: RowAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: EntryId,
    pub name: String,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    All,
    Present,
    Absent,
}

impl ColumnKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All Students",
            Self::Present => "Present Students",
            Self::Absent => "Absent Students",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub kind: ColumnKind,
    pub rows: Vec<RowView>,
}

impl ColumnView {
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }
}

/// Shared input form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub input: String,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
}

/// Full screen projection: form plus three columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub form: FormView,
    pub all: ColumnView,
    pub present: ColumnView,
    pub absent: ColumnView,
}

impl RosterView {
    /// Projects `roster` and the form state into a renderable view.
    pub fn project(roster: &Roster, mode: EditMode, input: &str) -> Self {
        let submit_label = match mode {
            EditMode::Idle => ADD_LABEL,
            EditMode::Editing(_) => UPDATE_LABEL,
        };

        Self {
            form: FormView {
                input: input.to_string(),
                placeholder: INPUT_PLACEHOLDER,
                submit_label,
            },
            all: ColumnView {
                kind: ColumnKind::All,
                rows: roster.entries().iter().map(all_row).collect(),
            },
            present: ColumnView {
                kind: ColumnKind::Present,
                rows: roster
                    .filter_presence(Presence::Present)
                    .map(|entry| single_toggle_row(entry, "Move to Absent"))
                    .collect(),
            },
            absent: ColumnView {
                kind: ColumnKind::Absent,
                rows: roster
                    .filter_presence(Presence::Absent)
                    .map(|entry| single_toggle_row(entry, "Move to Present"))
                    .collect(),
            },
        }
    }

    pub fn columns(&self) -> [&ColumnView; 3] {
        [&self.all, &self.present, &self.absent]
    }
}

/// Label of the All-column toggle; `Unset` counts as not present.
pub fn toggle_label(presence: Presence) -> &'static str {
    if presence.is_present() {
        "Mark Absent"
    } else {
        "Mark Present"
    }
}

fn all_row(entry: &RosterEntry) -> RowView {
    RowView {
        id: entry.id,
        name: entry.name.clone(),
        actions: vec![
            ActionView {
                label: "Edit",
                action: RowAction::Edit(entry.id),
            },
            ActionView {
                label: "Delete",
                action: RowAction::Delete(entry.id),
            },
            ActionView {
                label: toggle_label(entry.presence),
                action: RowAction::TogglePresence(entry.id),
            },
        ],
    }
}

fn single_toggle_row(entry: &RosterEntry, label: &'static str) -> RowView {
    RowView {
        id: entry.id,
        name: entry.name.clone(),
        actions: vec![ActionView {
            label,
            action: RowAction::TogglePresence(entry.id),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_label;
    use crate::model::entry::Presence;

    #[test]
    fn unset_is_labeled_like_absent() {
        assert_eq!(toggle_label(Presence::Unset), "Mark Present");
        assert_eq!(toggle_label(Presence::Absent), "Mark Present");
        assert_eq!(toggle_label(Presence::Present), "Mark Absent");
    }
}
