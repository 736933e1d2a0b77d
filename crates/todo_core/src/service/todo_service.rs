//! Todo use-case service.
//!
//! # Responsibility
//! - Provide validated create/edit/complete/delete entry points.
//! - Expose read/filter/search and undo for presentation callers.
//!
//! # Invariants
//! - Records that fail domain rules are never written to the store.
//! - Rejected requests leave both records and undo history untouched.
//! - Log lines carry ids and counts only, never user-entered text.

use crate::model::todo::{Todo, TodoError, TodoId, TodoPatch, TodoStatus, DEFAULT_CATEGORY};
use crate::rules::validation::{apply_update, messages, validate_fields, ValidationIssue};
use crate::store::todo_store::{StoreError, TodoStore, UndoOutcome};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for todo use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input violates one or more domain rules.
    Invalid(Vec<ValidationIssue>),
    /// Record construction rejected the input.
    Construction(TodoError),
    /// Store already holds a record with this id.
    DuplicateId(TodoId),
    /// No record matches the given id or prefix.
    NotFound(String),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(issues) => write!(f, "{}", messages(issues).join("; ")),
            Self::Construction(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "a todo with id `{id}` already exists"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InconsistentState(details) => write!(f, "inconsistent todo state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Construction(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TodoError> for ServiceError {
    fn from(value: TodoError) -> Self {
        Self::Construction(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateId(id) => Self::DuplicateId(id),
        }
    }
}

/// Request model for creating one todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TodoStatus,
    /// Custom id; `None` or blank means generate one.
    pub id: Option<String>,
}

impl NewTodo {
    /// Request with empty description and the default category.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            status: TodoStatus::Incomplete,
            id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Record counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoSummary {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
}

/// Use-case facade over one in-memory store.
#[derive(Debug, Clone, Default)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store.
    pub fn with_store(store: TodoStore) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Validates input, builds a record and adds it to the store.
    ///
    /// # Errors
    /// - `Invalid` with every rule violation, in title/description/category
    ///   order.
    /// - `DuplicateId` when the custom id is already taken.
    pub fn create_todo(&mut self, request: NewTodo) -> ServiceResult<Todo> {
        let issues = validate_fields(&request.title, &request.description, &request.category);
        if !issues.is_empty() {
            info!(
                "event=todo_create module=service status=rejected issues={}",
                issues.len()
            );
            return Err(ServiceError::Invalid(issues));
        }

        let mut draft = Todo::draft(request.title)
            .description(request.description)
            .category(request.category)
            .status(request.status);
        let custom_id = request.id.is_some();
        if let Some(id) = request.id {
            draft = draft.id(id);
        }
        let todo = draft.build()?;

        if let Err(err) = self.store.add(todo.clone()) {
            warn!(
                "event=todo_create module=service status=error reason=duplicate_id id={}",
                todo.id
            );
            return Err(err.into());
        }

        info!(
            "event=todo_create module=service status=ok id={} custom_id={}",
            todo.id, custom_id
        );
        Ok(todo)
    }

    /// Applies `patch` to the record matching `id_or_prefix` after checking
    /// the patched result against domain rules.
    ///
    /// # Errors
    /// - `NotFound` when nothing matches.
    /// - `Invalid` when the patched record would break a rule; the store is
    ///   left unchanged.
    pub fn edit_todo(&mut self, id_or_prefix: &str, patch: &TodoPatch) -> ServiceResult<Todo> {
        let current = self.resolve(id_or_prefix)?;

        let mut candidate = current.clone();
        let issues = apply_update(&mut candidate, patch);
        if !issues.is_empty() {
            info!(
                "event=todo_update module=service status=rejected id={} issues={}",
                current.id,
                issues.len()
            );
            return Err(ServiceError::Invalid(issues));
        }

        if !self.store.update(&current.id, patch) {
            return Err(ServiceError::InconsistentState("resolved todo vanished before update"));
        }

        let updated = self
            .store
            .find_by_id(&current.id)
            .cloned()
            .ok_or(ServiceError::InconsistentState(
                "updated todo not found in read-back",
            ))?;
        info!("event=todo_update module=service status=ok id={}", updated.id);
        Ok(updated)
    }

    /// Marks the matching record complete.
    pub fn complete_todo(&mut self, id_or_prefix: &str) -> ServiceResult<Todo> {
        self.edit_todo(id_or_prefix, &TodoPatch::status_only(TodoStatus::Complete))
    }

    /// Marks the matching record incomplete.
    pub fn reopen_todo(&mut self, id_or_prefix: &str) -> ServiceResult<Todo> {
        self.edit_todo(id_or_prefix, &TodoPatch::status_only(TodoStatus::Incomplete))
    }

    /// Deletes the matching record and returns it.
    pub fn delete_todo(&mut self, id_or_prefix: &str) -> ServiceResult<Todo> {
        let current = self.resolve(id_or_prefix)?;
        if !self.store.remove(&current.id) {
            return Err(ServiceError::InconsistentState("resolved todo vanished before delete"));
        }

        info!("event=todo_delete module=service status=ok id={}", current.id);
        Ok(current)
    }

    /// Reverses the newest store mutation.
    pub fn undo(&mut self) -> UndoOutcome {
        let outcome = self.store.undo_last();
        match &outcome {
            UndoOutcome::NothingToUndo => {
                info!("event=todo_undo module=service status=empty");
            }
            UndoOutcome::Reverted(entry) => {
                info!(
                    "event=todo_undo module=service status=ok action={} id={} remaining={}",
                    entry.action.as_str(),
                    entry.snapshot.id,
                    self.store.undo_depth()
                );
            }
            UndoOutcome::TargetMissing(entry) => {
                warn!(
                    "event=todo_undo module=service status=error action={} id={}",
                    entry.action.as_str(),
                    entry.snapshot.id
                );
            }
        }
        outcome
    }

    pub fn get(&self, id_or_prefix: &str) -> Option<Todo> {
        self.store.find_by_id(id_or_prefix).cloned()
    }

    pub fn list_all(&self) -> Vec<Todo> {
        self.store.get_all()
    }

    pub fn list_by_status(&self, status: TodoStatus) -> Vec<Todo> {
        self.store.get_by_status(status)
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Todo> {
        self.store.get_by_category(category)
    }

    pub fn search(&self, query: &str) -> Vec<Todo> {
        self.store.search(query)
    }

    pub fn summary(&self) -> TodoSummary {
        let total = self.store.len();
        let complete = self.store.get_by_status(TodoStatus::Complete).len();
        TodoSummary {
            total,
            complete,
            incomplete: total - complete,
        }
    }

    fn resolve(&self, id_or_prefix: &str) -> ServiceResult<Todo> {
        self.store
            .find_by_id(id_or_prefix)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id_or_prefix.trim().to_string()))
    }
}
