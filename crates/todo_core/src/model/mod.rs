//! Domain model for in-memory todo records.
//!
//! # Responsibility
//! - Define the canonical todo record and its construction rules.
//! - Define the optional-per-field update shape shared by store and rules.
//!
//! # Invariants
//! - Every todo is identified by a `TodoId` unique within one store.
//! - String fields are stored trimmed; title is never blank.

pub mod todo;
