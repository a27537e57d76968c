//! # Edit Coalescing
//!
//! Decides whether a code edit starts a new history entry or extends the
//! previous one, so that undo reverts a burst of typing rather than a single
//! character.
//!
//! Consecutive edits to the same fragment extend one batch as long as each
//! gap between them is shorter than the quiet window. Anything else closes the
//! batch: an edit to another fragment, a pause, or any non-edit operation
//! (the session calls [`EditCoalescer::break_batch`]).

/// Default quiet window between keystrokes of one batch
pub const DEFAULT_QUIET_WINDOW_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoalescePolicy {
    /// Maximum gap between edits of one batch (0 = every edit is its own entry)
    pub quiet_window_ms: u64,
}

impl CoalescePolicy {
    /// One history entry per edit
    pub fn per_keystroke() -> Self {
        Self { quiet_window_ms: 0 }
    }
}

impl Default for CoalescePolicy {
    fn default() -> Self {
        Self {
            quiet_window_ms: DEFAULT_QUIET_WINDOW_MS,
        }
    }
}

#[derive(Debug, Clone)]
struct OpenBatch {
    fragment_id: String,
    last_edit_at: u64,
}

/// Tracks the currently open edit batch
#[derive(Debug, Clone, Default)]
pub struct EditCoalescer {
    policy: CoalescePolicy,
    open: Option<OpenBatch>,
}

impl EditCoalescer {
    pub fn new(policy: CoalescePolicy) -> Self {
        Self { policy, open: None }
    }

    pub fn policy(&self) -> CoalescePolicy {
        self.policy
    }

    /// Whether an edit to `fragment_id` at `now` extends the open batch
    pub fn extends_batch(&self, fragment_id: &str, now: u64) -> bool {
        if self.policy.quiet_window_ms == 0 {
            return false;
        }

        match &self.open {
            Some(batch) => {
                batch.fragment_id == fragment_id
                    && now >= batch.last_edit_at
                    && now - batch.last_edit_at < self.policy.quiet_window_ms
            }
            None => false,
        }
    }

    /// Record an applied edit, opening or extending a batch
    pub fn record(&mut self, fragment_id: &str, now: u64) {
        match &mut self.open {
            Some(batch) if batch.fragment_id == fragment_id => batch.last_edit_at = now,
            _ => {
                self.open = Some(OpenBatch {
                    fragment_id: fragment_id.to_string(),
                    last_edit_at: now,
                })
            }
        }
    }

    pub fn break_batch(&mut self) {
        self.open = None;
    }

    pub fn has_open_batch(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_fragment_within_window_extends() {
        let mut coalescer = EditCoalescer::new(CoalescePolicy { quiet_window_ms: 500 });
        assert!(!coalescer.extends_batch("css", 0));

        coalescer.record("css", 0);
        assert!(coalescer.extends_batch("css", 499));
        assert!(!coalescer.extends_batch("css", 500));
    }

    #[test]
    fn test_window_slides_with_each_edit() {
        let mut coalescer = EditCoalescer::new(CoalescePolicy { quiet_window_ms: 500 });
        coalescer.record("css", 0);
        coalescer.record("css", 400);

        assert!(coalescer.extends_batch("css", 800));
    }

    #[test]
    fn test_other_fragment_does_not_extend() {
        let mut coalescer = EditCoalescer::default();
        coalescer.record("css", 0);
        assert!(!coalescer.extends_batch("html", 10));
    }

    #[test]
    fn test_break_batch_closes() {
        let mut coalescer = EditCoalescer::default();
        coalescer.record("js", 0);
        coalescer.break_batch();

        assert!(!coalescer.has_open_batch());
        assert!(!coalescer.extends_batch("js", 1));
    }

    #[test]
    fn test_per_keystroke_never_extends() {
        let mut coalescer = EditCoalescer::new(CoalescePolicy::per_keystroke());
        coalescer.record("js", 0);
        assert!(!coalescer.extends_batch("js", 0));
    }
}
