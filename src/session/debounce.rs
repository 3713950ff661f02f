//! Edit-burst debouncing
//!
//! Board edits arrive in rapid bursts (typing a word is five edits), and
//! refiltering on every one is wasted work. The debouncer coalesces a burst
//! into a single recomputation: it fires only once edits have been quiet for
//! the full delay.
//!
//! The policy is a plain value driven by injected instants, so it is
//! testable without sleeping and keeps the filter itself free of timing
//! concerns.

use std::time::{Duration, Instant};

/// Default quiet window before a recomputation fires
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Coalesces edit bursts into single recomputations
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_edit: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_edit: None,
        }
    }

    /// Record an edit at `now`, restarting the quiet window
    pub fn note_edit(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// Whether a recomputation is pending
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// Check whether the pending recomputation should fire at `now`
    ///
    /// Returns `true` at most once per burst: firing clears the pending
    /// edit, so the next `true` requires a new edit.
    pub fn should_fire(&mut self, now: Instant) -> bool {
        match self.last_edit {
            Some(edit) if now.duration_since(edit) >= self.delay => {
                self.last_edit = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edit_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.should_fire(Instant::now()));
    }

    #[test]
    fn fires_after_quiet_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        debouncer.note_edit(start);
        assert!(debouncer.is_pending());
        assert!(!debouncer.should_fire(start + Duration::from_millis(100)));
        assert!(debouncer.should_fire(start + Duration::from_millis(250)));
    }

    #[test]
    fn burst_coalesces_into_one_firing() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        // Five edits 50ms apart: the window restarts each time
        for i in 0..5 {
            let at = start + Duration::from_millis(50 * i);
            debouncer.note_edit(at);
            assert!(!debouncer.should_fire(at));
        }

        let last_edit = start + Duration::from_millis(200);
        assert!(!debouncer.should_fire(last_edit + Duration::from_millis(249)));
        assert!(debouncer.should_fire(last_edit + Duration::from_millis(250)));
    }

    #[test]
    fn firing_clears_the_pending_edit() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        debouncer.note_edit(start);
        assert!(debouncer.should_fire(start + Duration::from_millis(300)));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.should_fire(start + Duration::from_millis(600)));
    }
}
