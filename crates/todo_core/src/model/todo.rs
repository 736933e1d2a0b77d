//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its two-state status.
//! - Validate the required title at construction time.
//! - Describe partial updates as an explicit optional-per-field patch.
//!
//! # Invariants
//! - `title` is never empty or whitespace-only after construction.
//! - `id`, `title`, `description` and `category` are stored trimmed.
//! - `created_at` is set once at construction and kept across updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier of a todo within one store.
///
/// Either caller-supplied (custom ids typed by a user) or a generated
/// UUID v4 string, so it stays a plain string rather than a `Uuid`.
pub type TodoId = String;

/// Category assigned when the caller does not pick one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Completion state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Not done yet.
    #[default]
    Incomplete,
    /// Done.
    Complete,
}

impl TodoStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction error for todo records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TodoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
        }
    }
}

impl Error for TodoError {}

/// Canonical in-memory todo record.
///
/// Fields are public so domain rules can patch a record in place; callers
/// that do so are expected to re-validate before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoRecord")]
pub struct Todo {
    /// Unique within one store; never changed by updates.
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TodoStatus,
    /// Construction time (UTC).
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates an incomplete todo in the default category with a
    /// generated id.
    ///
    /// # Errors
    /// - `TodoError::EmptyTitle` when `title` is blank after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TodoError> {
        Self::draft(title).build()
    }

    /// Starts a builder for a todo with optional fields.
    pub fn draft(title: impl Into<String>) -> TodoDraft {
        TodoDraft::new(title)
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// Builder for `Todo` with defaults for every optional field.
///
/// # Invariants
/// - `build()` is the only way a draft becomes a `Todo`, so the title
///   check cannot be skipped.
/// - A blank custom id is treated as absent and replaced by a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    id: Option<String>,
    title: String,
    description: String,
    category: String,
    status: TodoStatus,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            status: TodoStatus::Incomplete,
        }
    }

    /// Uses a caller-supplied id instead of a generated one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
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

    /// Validates the title and produces a trimmed record.
    ///
    /// # Errors
    /// - `TodoError::EmptyTitle` when the title is blank after trimming.
    pub fn build(self) -> Result<Todo, TodoError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let id = match self.id.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        Ok(Todo {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            status: self.status,
            created_at: Utc::now(),
        })
    }
}

/// Partial update for a todo: unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only replaces the status.
    pub fn status_only(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }

    /// Applies the supplied fields to `todo`, trimming strings.
    ///
    /// No validation happens here; an empty title is written as-is.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            todo.description = description.trim().to_string();
        }
        if let Some(category) = &self.category {
            todo.category = category.trim().to_string();
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
    }
}

#[derive(Deserialize)]
struct TodoRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    status: TodoStatus,
    created_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoError;

    fn try_from(record: TodoRecord) -> Result<Self, Self::Error> {
        let mut todo = TodoDraft::new(record.title)
            .id(record.id)
            .description(record.description)
            .category(record.category)
            .status(record.status)
            .build()?;
        todo.created_at = record.created_at;
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoPatch, TodoStatus};

    #[test]
    fn blank_custom_id_falls_back_to_generated() {
        let todo = Todo::draft("write tests").id("   ").build().unwrap();
        assert!(!todo.id.is_empty());
        assert_eq!(todo.id.len(), 36);
    }

    #[test]
    fn empty_patch_leaves_record_untouched() {
        let mut todo = Todo::new("unchanged").unwrap();
        let before = todo.clone();

        let patch = TodoPatch::new();
        assert!(patch.is_empty());
        patch.apply_to(&mut todo);

        assert_eq!(todo, before);
    }

    #[test]
    fn status_only_patch_sets_status() {
        let mut todo = Todo::new("finish").unwrap();
        TodoPatch::status_only(TodoStatus::Complete).apply_to(&mut todo);
        assert!(todo.is_complete());
        assert_eq!(todo.title, "finish");
    }
}
