//! # Edit Session
//!
//! Applies editor operations to the current [`EditorSet`] snapshot and records
//! the result in a [`HistoryStack`].
//!
//! Every operation returns whether the current snapshot changed, so that
//! observers (compile scheduling, persistence) know when to react. Undo and
//! redo only move the history cursor; they never touch storage themselves.

use tracing::debug;

use crate::{CoalescePolicy, EditCoalescer, EditorError, EditorSet, HistoryStack, Language};

/// Editing state for one playground
#[derive(Debug, Clone)]
pub struct EditSession {
    history: HistoryStack<EditorSet>,
    coalescer: EditCoalescer,

    /// Last id discriminator handed out (strictly increasing)
    last_discriminator: u64,
}

impl EditSession {
    /// Create a session seeded with `initial`, coalescing with the default policy
    pub fn new(initial: EditorSet) -> Self {
        Self::with_policy(initial, CoalescePolicy::default())
    }

    pub fn with_policy(initial: EditorSet, policy: CoalescePolicy) -> Self {
        Self {
            history: HistoryStack::new(initial),
            coalescer: EditCoalescer::new(policy),
            last_discriminator: 0,
        }
    }

    /// Bound the history to `max_entries` snapshots
    pub fn with_history_limit(mut self, max_entries: usize) -> Self {
        let current = self.history.current().clone();
        self.history = HistoryStack::with_max_entries(current, max_entries);
        self
    }

    pub fn current(&self) -> &EditorSet {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStack<EditorSet> {
        &self.history
    }

    /// Add an editor for `language`; returns its id
    pub fn add_editor(&mut self, language: Language, now: u64) -> Result<String, EditorError> {
        let mut next = self.current().clone();
        let id = next.add(language, self.next_discriminator(now))?;

        self.coalescer.break_batch();
        self.history.push(next);
        debug!(id = %id, "added editor");
        Ok(id)
    }

    /// Remove an editor; `Ok(false)` if no editor has that id
    pub fn remove_editor(&mut self, id: &str) -> Result<bool, EditorError> {
        let mut next = self.current().clone();
        if !next.remove(id)? {
            return Ok(false);
        }

        self.coalescer.break_batch();
        self.history.push(next);
        debug!(id, "removed editor");
        Ok(true)
    }

    /// Replace the code of an editor.
    ///
    /// Edits to the same fragment inside the quiet window amend the top
    /// history entry instead of pushing a new one.
    pub fn update_code(&mut self, id: &str, code: impl Into<String>, now: u64) -> bool {
        let mut next = self.current().clone();
        if !next.update_code(id, code) || next == *self.current() {
            return false;
        }

        if !self.coalescer.extends_batch(id, now) {
            let changed = self.history.push(next);
            self.coalescer.record(id, now);
            return changed;
        }

        let before = self.history.len();
        let changed = self.history.amend(next);
        if self.history.len() < before {
            // The batch's own entry is gone; the entry below belongs to
            // someone else and must not be amended.
            self.coalescer.break_batch();
            debug!(id, "typing batch collapsed");
        } else {
            self.coalescer.record(id, now);
        }
        changed
    }

    /// Replace the whole set with the defaults as one undoable step
    pub fn reset_to_defaults(&mut self) -> bool {
        self.coalescer.break_batch();
        let changed = self.history.push(EditorSet::defaults());
        debug!(changed, "reset editors to defaults");
        changed
    }

    pub fn undo(&mut self) -> bool {
        self.coalescer.break_batch();
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.coalescer.break_batch();
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Explicitly end the current typing batch
    pub fn commit_batch(&mut self) {
        self.coalescer.break_batch();
    }

    fn next_discriminator(&mut self, now: u64) -> u64 {
        let next = now.max(self.last_discriminator + 1);
        self.last_discriminator = next;
        next
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorSet::defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = EditSession::default();
        assert_eq!(session.current().len(), 3);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_add_conflict_leaves_history_untouched() {
        let mut session = EditSession::default();
        let err = session.add_editor(Language::Css, 1).unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_add_then_undo() {
        let mut session = EditSession::default();
        session.remove_editor("js").unwrap();
        let id = session.add_editor(Language::Js, 1_700_000_000_000).unwrap();

        assert_eq!(id, "js-1700000000000");
        assert_eq!(session.history().len(), 3);

        session.undo();
        assert!(session.current().get(&id).is_none());
    }

    #[test]
    fn test_discriminators_strictly_increase() {
        let mut session = EditSession::default();
        session.remove_editor("js").unwrap();
        session.remove_editor("css").unwrap();

        let js = session.add_editor(Language::Js, 5).unwrap();
        let css = session.add_editor(Language::Css, 5).unwrap();

        assert_eq!(js, "js-5");
        assert_eq!(css, "css-6");
    }

    #[test]
    fn test_remove_last_editor_fails() {
        let mut session = EditSession::default();
        session.remove_editor("html").unwrap();
        session.remove_editor("css").unwrap();

        let err = session.remove_editor("js").unwrap_err();
        assert!(matches!(err, EditorError::LastEditor));
        assert_eq!(session.current().len(), 1);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_update_missing_editor_is_noop() {
        let mut session = EditSession::default();
        assert!(!session.update_code("ghost", "x", 0));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reset_is_undoable() {
        let mut session = EditSession::default();
        session.update_code("html", "<p>mine</p>", 0);
        assert!(session.reset_to_defaults());

        assert_eq!(*session.current(), EditorSet::defaults());
        session.undo();
        assert_eq!(session.current().code_for(Language::Html), "<p>mine</p>");
    }
}
