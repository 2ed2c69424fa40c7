//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate command handlers and the store into user-level flows.
//! - Keep presentation layers decoupled from storage details.

pub mod session;
