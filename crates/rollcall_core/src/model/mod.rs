//! Roster domain model.
//!
//! # Responsibility
//! - Define the entry record and the ordered roster that holds it.
//! - Keep presence as an explicit three-state value.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Deletion removes the entry outright; there are no tombstones.

pub mod entry;
pub mod roster;
