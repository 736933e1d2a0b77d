//! Core domain logic for the in-memory todo list.
//! This crate owns every record invariant and has no terminal dependency.

pub mod logging;
pub mod model;
pub mod rules;
pub mod service;
pub mod store;

pub use logging::{active_settings, default_level, init_logging, LogSettings, LoggingError};
pub use model::todo::{Todo, TodoDraft, TodoError, TodoId, TodoPatch, TodoStatus, DEFAULT_CATEGORY};
pub use rules::validation::{
    apply_update, messages, validate_category, validate_description, validate_fields,
    validate_title, validate_todo, TodoField, ValidationIssue, MAX_CATEGORY_CHARS,
    MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS,
};
pub use service::todo_service::{NewTodo, ServiceError, ServiceResult, TodoService, TodoSummary};
pub use store::todo_store::{StoreError, StoreResult, TodoStore, UndoOutcome};
pub use store::undo_log::{UndoAction, UndoEntry, UndoLog, UNDO_HISTORY_LIMIT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
