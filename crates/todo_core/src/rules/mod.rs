//! Stateless domain rules over todo field values.
//!
//! # Responsibility
//! - Check required fields and length limits before store mutations.
//! - Apply partial updates and report the resulting violations.
//!
//! # Invariants
//! - Rules never touch store state and never fail with an error; they
//!   return the full list of violations for the caller to act on.

pub mod validation;
