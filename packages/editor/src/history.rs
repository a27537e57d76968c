//! # Undo/Redo History
//!
//! A linear history over snapshots of any value type.
//!
//! ## Design
//!
//! - `entries` is never empty; `entries[cursor]` is the current value
//! - Pushing after an undo discards everything past the cursor (the redo
//!   branch is destroyed, not merged)
//! - Pushing a value equal to the current one is a no-op
//! - An optional bound drops the oldest entries, never the current one
//!
//! ## Example
//!
//! ```rust
//! use webplay_editor::HistoryStack;
//!
//! let mut history = HistoryStack::new(0);
//! history.push(1);
//! history.push(2);
//!
//! history.undo();
//! assert_eq!(*history.current(), 1);
//!
//! history.push(3);
//! assert!(!history.can_redo());
//! ```

/// Linear undo/redo stack of snapshots
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    /// Snapshots, oldest first
    entries: Vec<T>,

    /// Index of the current snapshot
    cursor: usize,

    /// Maximum number of entries kept (0 = unlimited)
    max_entries: usize,
}

impl<T: PartialEq> HistoryStack<T> {
    /// Create an unbounded history seeded with one entry
    pub fn new(seed: T) -> Self {
        Self::with_max_entries(seed, 0)
    }

    /// Create a history that keeps at most `max_entries` snapshots
    pub fn with_max_entries(seed: T, max_entries: usize) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
            max_entries,
        }
    }

    /// The current snapshot
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Record a new snapshot. Returns false if it equals the current one.
    pub fn push(&mut self, value: T) -> bool {
        if value == *self.current() {
            return false;
        }

        // New action invalidates the redo branch
        self.entries.truncate(self.cursor + 1);
        self.entries.push(value);
        self.cursor = self.entries.len() - 1;

        self.trim();
        true
    }

    /// Replace the current snapshot in place.
    ///
    /// If the new value equals the snapshot below the cursor, the current
    /// entry is dropped instead so no duplicate step is left behind. Any redo
    /// branch is discarded. Returns false if nothing changed.
    pub fn amend(&mut self, value: T) -> bool {
        if value == *self.current() {
            return false;
        }

        self.entries.truncate(self.cursor + 1);

        if self.cursor > 0 && self.entries[self.cursor - 1] == value {
            self.entries.pop();
            self.cursor -= 1;
        } else {
            self.entries[self.cursor] = value;
        }

        true
    }

    /// Step back. Returns false if already at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward. Returns false if already at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of undo steps available
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available
    pub fn redo_levels(&self) -> usize {
        self.entries.len() - 1 - self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its seed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drop all history except the current snapshot
    pub fn clear(&mut self) {
        let current = self.entries.swap_remove(self.cursor);
        self.entries.clear();
        self.entries.push(current);
        self.cursor = 0;
    }

    fn trim(&mut self) {
        if self.max_entries == 0 || self.entries.len() <= self.max_entries {
            return;
        }

        // The cursor must survive the trim
        let excess = (self.entries.len() - self.max_entries).min(self.cursor);
        self.entries.drain(..excess);
        self.cursor -= excess;
    }
}

impl<T: PartialEq + Default> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
