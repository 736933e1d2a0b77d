//! Bounded undo history.
//!
//! # Responsibility
//! - Keep typed snapshots of the most recent store mutations.
//! - Drop the oldest entry when a push would exceed capacity.
//!
//! # Invariants
//! - Length never exceeds `capacity`.
//! - Entries are ordered oldest first; `pop` returns the newest.

use crate::model::todo::Todo;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Maximum number of undo entries kept by a store.
pub const UNDO_HISTORY_LIMIT: usize = 10;

/// Kind of mutation an undo entry reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndoAction {
    Add,
    Remove,
    Update,
}

impl UndoAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Update => "update",
        }
    }
}

/// Snapshot needed to reverse one mutation.
///
/// `snapshot` holds the added record for `Add`, the removed record for
/// `Remove`, and the pre-update record for `Update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    pub action: UndoAction,
    pub snapshot: Todo,
    pub recorded_at: DateTime<Utc>,
}

impl UndoEntry {
    pub fn new(action: UndoAction, snapshot: Todo) -> Self {
        Self {
            action,
            snapshot,
            recorded_at: Utc::now(),
        }
    }
}

/// Fixed-capacity ring of undo entries.
#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: VecDeque<UndoEntry>,
    capacity: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::with_capacity(UNDO_HISTORY_LIMIT)
    }
}

impl UndoLog {
    /// Creates a log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `entry`, dropping the oldest one first when full.
    pub fn push(&mut self, entry: UndoEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UndoEntry> {
        self.entries.iter()
    }
}
