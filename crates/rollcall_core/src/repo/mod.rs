//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the named-slot contract the roster store persists through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - A slot write replaces the whole stored value in one statement.

pub mod slot_repo;
