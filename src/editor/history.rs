// SPDX-License-Identifier: MPL-2.0
//! Linear edit history (undo/redo).
//!
//! Every image mutation goes through [`EditHistory::commit`]; undo and redo
//! only move the cursor. Committing while the cursor is not at the tail drops
//! the redo branch. When the capacity is exceeded the oldest entries are
//! evicted and the cursor keeps pointing at the entry it pointed at, which
//! after a commit is always the last one.

use crate::domain::editing::HistoryCapacity;

#[derive(Debug, Clone)]
pub struct EditHistory<T> {
    entries: Vec<T>,
    cursor: usize,
    original: Option<T>,
    capacity: HistoryCapacity,
}

impl<T: Clone> EditHistory<T> {
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            original: None,
            capacity,
        }
    }

    /// Replaces the whole history with a single entry, which also becomes the
    /// original.
    pub fn load(&mut self, entry: T) {
        self.original = Some(entry.clone());
        self.entries.clear();
        self.entries.push(entry);
        self.cursor = 0;
        self.check_invariants();
    }

    /// Makes `entry` the current state, pruning any redo branch.
    ///
    /// Committing into an empty history behaves like [`load`](Self::load).
    pub fn commit(&mut self, entry: T) {
        if self.entries.is_empty() {
            self.load(entry);
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);

        let capacity = self.capacity.value();
        if self.entries.len() > capacity {
            let evicted = self.entries.len() - capacity;
            self.entries.drain(..evicted);
        }
        self.cursor = self.entries.len() - 1;
        self.check_invariants();
    }

    /// Steps back one entry. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.check_invariants();
        true
    }

    /// Steps forward one entry. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.check_invariants();
        true
    }

    /// Commits the original entry again, so the reset itself can be undone.
    /// Returns false when nothing was ever loaded.
    pub fn reset_to_original(&mut self) -> bool {
        let Some(original) = self.original.clone() else {
            return false;
        };
        self.commit(original);
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn original(&self) -> Option<&T> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[must_use]
    pub fn capacity(&self) -> HistoryCapacity {
        self.capacity
    }

    fn check_invariants(&self) {
        debug_assert!(!self.entries.is_empty(), "history mutated into empty state");
        debug_assert!(
            self.cursor < self.entries.len(),
            "cursor {} out of range for {} entries",
            self.cursor,
            self.entries.len()
        );
        debug_assert!(self.entries.len() <= self.capacity.value());
    }
}

impl<T: Clone> Default for EditHistory<T> {
    fn default() -> Self {
        Self::new(HistoryCapacity::default())
    }
}
