//! Core use-case services.
//!
//! # Responsibility
//! - Run domain rules before store mutations.
//! - Keep presentation layers decoupled from store and rule details.

pub mod todo_service;
