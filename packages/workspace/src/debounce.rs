//! # Debounced Compile Timer
//!
//! A single-slot cancellable timer driven by caller-supplied time.
//!
//! `schedule` overwrites the one pending deadline, so an earlier deadline can
//! never fire once a later change has arrived. The host decides how to wait:
//! it asks for [`Debouncer::next_deadline`], sleeps until then with whatever
//! primitive it has (a tokio timer, `setTimeout`), and calls
//! [`Debouncer::poll`]. A stale wake-up simply finds the deadline moved.

/// Millisecond timestamps
pub type Millis = u64;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn wall_clock_millis() -> Millis {
    chrono::Utc::now().timestamp_millis().max(0) as Millis
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Millis,
    pending: Option<Millis>,
}

impl Debouncer {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Millis {
        self.delay
    }

    /// Change the delay; applies to the next `schedule`
    pub fn set_delay(&mut self, delay: Millis) {
        self.delay = delay;
    }

    /// Arm the timer at `now + delay`, cancelling any pending deadline.
    /// Returns the new deadline.
    pub fn schedule(&mut self, now: Millis) -> Millis {
        let deadline = now.saturating_add(self.delay);
        if let Some(previous) = self.pending.replace(deadline) {
            tracing::trace!(previous, deadline, "debounce timer superseded");
        }
        deadline
    }

    /// Disarm the timer. Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending
    }

    /// Fire if the deadline has passed. Each deadline fires at most once.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
