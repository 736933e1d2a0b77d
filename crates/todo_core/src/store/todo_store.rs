//! In-memory todo store with id-or-prefix lookup and bounded undo.
//!
//! # Responsibility
//! - Provide add/remove/update/find/filter/search over live todos.
//! - Push one undo entry per successful mutation and reverse it on demand.
//!
//! # Invariants
//! - Ids are unique across live records (`add` rejects duplicates).
//! - Read APIs return owned snapshots; callers cannot mutate store state
//!   through them.
//! - Undo consumes exactly one entry per call and never records new ones.
//!
//! # Known limitation
//! - Prefix lookup with an ambiguous prefix resolves to the first match in
//!   insertion order. An exact id always wins over a prefix match.

use crate::model::todo::{Todo, TodoId, TodoPatch, TodoStatus};
use crate::store::undo_log::{UndoAction, UndoEntry, UndoLog};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level mutation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A live record already uses this id.
    DuplicateId(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "a todo with id `{id}` already exists"),
        }
    }
}

impl Error for StoreError {}

/// Result of reversing the newest undo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// History was empty.
    NothingToUndo,
    /// The entry was reversed.
    Reverted(UndoEntry),
    /// The entry was consumed but its target record no longer exists.
    TargetMissing(UndoEntry),
}

impl UndoOutcome {
    pub fn is_reverted(&self) -> bool {
        matches!(self, Self::Reverted(_))
    }
}

/// Authoritative in-memory todo collection.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    history: UndoLog,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with a custom undo history size.
    pub fn with_undo_capacity(capacity: usize) -> Self {
        Self {
            todos: Vec::new(),
            history: UndoLog::with_capacity(capacity),
        }
    }

    /// Appends `todo` and records an `Add` undo entry.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when a live record has the same id.
    pub fn add(&mut self, todo: Todo) -> StoreResult<()> {
        if self.position_exact(&todo.id).is_some() {
            return Err(StoreError::DuplicateId(todo.id));
        }

        self.history.push(UndoEntry::new(UndoAction::Add, todo.clone()));
        self.todos.push(todo);
        Ok(())
    }

    /// Deletes the record matching `id_or_prefix`.
    ///
    /// Returns `false` when nothing matches.
    #[must_use]
    pub fn remove(&mut self, id_or_prefix: &str) -> bool {
        let Some(index) = self.position(id_or_prefix) else {
            return false;
        };

        let removed = self.todos.remove(index);
        self.history.push(UndoEntry::new(UndoAction::Remove, removed));
        true
    }

    /// Applies `patch` to the record matching `id_or_prefix`.
    ///
    /// The pre-update record is recorded for undo before any field changes.
    /// Returns `false` when nothing matches.
    #[must_use]
    pub fn update(&mut self, id_or_prefix: &str, patch: &TodoPatch) -> bool {
        let Some(index) = self.position(id_or_prefix) else {
            return false;
        };

        let todo = &mut self.todos[index];
        self.history.push(UndoEntry::new(UndoAction::Update, todo.clone()));
        patch.apply_to(todo);
        true
    }

    /// Finds a record by exact id, falling back to the first id prefix match.
    pub fn find_by_id(&self, id_or_prefix: &str) -> Option<&Todo> {
        self.position(id_or_prefix).map(|index| &self.todos[index])
    }

    /// Returns every record in insertion order.
    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get_by_status(&self, status: TodoStatus) -> Vec<Todo> {
        self.filtered(|todo| todo.status == status)
    }

    /// Case-insensitive exact category match; the query is not trimmed.
    pub fn get_by_category(&self, category: &str) -> Vec<Todo> {
        let wanted = category.to_lowercase();
        self.filtered(|todo| todo.category.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match on title or description.
    pub fn search(&self, query: &str) -> Vec<Todo> {
        let needle = query.to_lowercase();
        self.filtered(|todo| {
            todo.title.to_lowercase().contains(&needle)
                || todo.description.to_lowercase().contains(&needle)
        })
    }

    /// Reverses the newest mutation.
    ///
    /// Returns `false` when history is empty or the reversal target is gone.
    #[must_use]
    pub fn undo_last_action(&mut self) -> bool {
        self.undo_last().is_reverted()
    }

    /// Reverses the newest mutation and reports what happened.
    pub fn undo_last(&mut self) -> UndoOutcome {
        let Some(entry) = self.history.pop() else {
            return UndoOutcome::NothingToUndo;
        };

        let reverted = match entry.action {
            UndoAction::Add => match self.position_exact(&entry.snapshot.id) {
                Some(index) => {
                    self.todos.remove(index);
                    true
                }
                None => false,
            },
            UndoAction::Remove => {
                self.todos.push(entry.snapshot.clone());
                true
            }
            UndoAction::Update => match self.position_exact(&entry.snapshot.id) {
                Some(index) => {
                    self.todos[index] = entry.snapshot.clone();
                    true
                }
                None => false,
            },
        };

        if reverted {
            UndoOutcome::Reverted(entry)
        } else {
            warn!(
                "event=undo_target_missing module=store status=error action={} id={}",
                entry.action.as_str(),
                entry.snapshot.id
            );
            UndoOutcome::TargetMissing(entry)
        }
    }

    /// Returns the newest undo entry without consuming it.
    pub fn peek_undo(&self) -> Option<&UndoEntry> {
        self.history.peek()
    }

    /// Number of undo entries currently held.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&Todo) -> bool) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| predicate(*todo))
            .cloned()
            .collect()
    }

    fn position_exact(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    fn position(&self, id_or_prefix: &str) -> Option<usize> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return None;
        }

        self.position_exact(needle)
            .or_else(|| self.todos.iter().position(|todo| todo.id.starts_with(needle)))
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoStore, UndoOutcome};
    use crate::model::todo::{Todo, TodoPatch};
    use crate::store::undo_log::UndoAction;

    fn store_with_ids(ids: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for id in ids {
            store
                .add(Todo::draft(format!("todo {id}")).id(*id).build().unwrap())
                .unwrap();
        }
        store
    }

    #[test]
    fn exact_id_wins_over_earlier_prefix_match() {
        let store = store_with_ids(&["abc-1", "abc"]);
        assert_eq!(store.position("abc"), Some(1));
    }

    #[test]
    fn blank_argument_matches_nothing() {
        let store = store_with_ids(&["abc"]);
        assert_eq!(store.position(""), None);
        assert_eq!(store.position("   "), None);
    }

    #[test]
    fn argument_is_trimmed_before_matching() {
        let store = store_with_ids(&["abc"]);
        assert_eq!(store.position("  ab "), Some(0));
    }

    #[test]
    fn undo_with_vanished_target_consumes_entry_and_fails() {
        let mut store = store_with_ids(&["keep", "gone"]);
        assert!(store.update("gone", &TodoPatch::new().with_title("edited")));
        store.todos.retain(|todo| todo.id != "gone");

        match store.undo_last() {
            UndoOutcome::TargetMissing(entry) => {
                assert_eq!(entry.action, UndoAction::Update);
                assert_eq!(entry.snapshot.id, "gone");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(store.undo_depth(), 2);

        assert!(!store.undo_last_action());
        assert_eq!(store.undo_depth(), 1);
        assert!(store.undo_last_action());
        assert!(store.is_empty());
    }
}
