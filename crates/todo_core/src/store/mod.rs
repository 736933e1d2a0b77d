//! In-memory record store and its undo history.
//!
//! # Responsibility
//! - Own the authoritative todo collection for one session.
//! - Record a reversible snapshot for every successful mutation.
//!
//! # Invariants
//! - Only the store mutates its records and undo log.
//! - A mutation and its undo entry are applied together or not at all.

pub mod todo_store;
pub mod undo_log;
