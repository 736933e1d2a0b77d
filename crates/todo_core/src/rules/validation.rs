//! Field validation and patch application for todo records.
//!
//! # Responsibility
//! - Report required-field and max-length violations per field.
//! - Combine per-field checks in a stable title -> description -> category
//!   order so callers can show every problem at once.
//!
//! # Invariants
//! - Lengths are measured in characters after trimming.
//! - `apply_update` mutates in place and never rolls back.

use crate::model::todo::{Todo, TodoPatch};
use std::fmt::{Display, Formatter};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const MAX_CATEGORY_CHARS: usize = 50;

/// Validated todo field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoField {
    Title,
    Description,
    Category,
}

impl TodoField {
    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Category => "Category",
        }
    }
}

/// One rule violation for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Field is empty or whitespace-only.
    Required(TodoField),
    /// Field exceeds its maximum character count.
    TooLong { field: TodoField, max_chars: usize },
}

impl ValidationIssue {
    pub fn field(self) -> TodoField {
        match self {
            Self::Required(field) => field,
            Self::TooLong { field, .. } => field,
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field.label()),
            Self::TooLong { field, max_chars } => {
                write!(f, "{} must be {max_chars} characters or less", field.label())
            }
        }
    }
}

/// Renders issues as human-readable messages, preserving order.
pub fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

pub fn validate_title(title: &str) -> Vec<ValidationIssue> {
    check_field(title, TodoField::Title, true, MAX_TITLE_CHARS)
}

pub fn validate_description(description: &str) -> Vec<ValidationIssue> {
    check_field(description, TodoField::Description, false, MAX_DESCRIPTION_CHARS)
}

pub fn validate_category(category: &str) -> Vec<ValidationIssue> {
    check_field(category, TodoField::Category, true, MAX_CATEGORY_CHARS)
}

/// Validates raw field input before a record exists.
pub fn validate_fields(title: &str, description: &str, category: &str) -> Vec<ValidationIssue> {
    let mut issues = validate_title(title);
    issues.extend(validate_description(description));
    issues.extend(validate_category(category));
    issues
}

/// Validates every checked field of an existing record.
pub fn validate_todo(todo: &Todo) -> Vec<ValidationIssue> {
    validate_fields(&todo.title, &todo.description, &todo.category)
}

/// Applies `patch` to `todo` in place and validates the result.
///
/// The record keeps the patched values even when issues are returned;
/// callers decide whether to persist it.
pub fn apply_update(todo: &mut Todo, patch: &TodoPatch) -> Vec<ValidationIssue> {
    patch.apply_to(todo);
    validate_todo(todo)
}

fn check_field(
    value: &str,
    field: TodoField,
    required: bool,
    max_chars: usize,
) -> Vec<ValidationIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required {
            vec![ValidationIssue::Required(field)]
        } else {
            Vec::new()
        };
    }

    if trimmed.chars().count() > max_chars {
        return vec![ValidationIssue::TooLong { field, max_chars }];
    }

    Vec::new()
}
