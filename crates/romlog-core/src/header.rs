//! Header title state with settle-delayed swaps
//!
//! The displayed title never changes mid-transition: a new label marks the
//! header as changing, waits a settle delay (matching the frontend's fade
//! duration), then swaps the text. A newer label arriving inside the window
//! replaces the pending swap, so only the value current at expiry is shown.

use std::time::{Duration, Instant};

/// A scheduled text swap
#[derive(Debug, Clone)]
struct PendingSwap {
    label: String,
    at: Instant,
}

/// Displayed header title with transition state
#[derive(Debug, Clone)]
pub struct HeaderTitle {
    /// Text currently on screen
    current: String,
    /// Most recently requested label, compared by value before scheduling
    requested: String,
    pending: Option<PendingSwap>,
    settle: Duration,
}

impl HeaderTitle {
    /// Create with the initial (default) title already displayed
    pub fn new(initial: impl Into<String>, settle: Duration) -> Self {
        let initial = initial.into();
        Self {
            current: initial.clone(),
            requested: initial,
            pending: None,
            settle,
        }
    }

    /// Request a new title; a repeat of the last request is a no-op
    pub fn request(&mut self, label: &str, now: Instant) {
        if self.requested == label {
            return;
        }
        self.requested = label.to_string();
        // Cancel-and-replace: a pending swap for an older label is dropped
        self.pending = Some(PendingSwap {
            label: label.to_string(),
            at: now + self.settle,
        });
    }

    /// Advance the transition; returns true when the text just swapped
    pub fn poll(&mut self, now: Instant) -> bool {
        let ready = self.pending.as_ref().is_some_and(|swap| now >= swap.at);
        if !ready {
            return false;
        }
        if let Some(swap) = self.pending.take() {
            self.current = swap.label;
        }
        true
    }

    /// Text to display
    pub fn text(&self) -> &str {
        &self.current
    }

    /// True while a swap is scheduled; the renderer dims the title
    pub fn is_changing(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(150);

    #[test]
    fn test_swap_after_settle_delay() {
        let t0 = Instant::now();
        let mut header = HeaderTitle::new("Home", SETTLE);
        header.request("Pixel 7", t0);

        assert!(header.is_changing());
        assert_eq!(header.text(), "Home");

        // Before the deadline nothing moves
        assert!(!header.poll(t0 + Duration::from_millis(100)));
        assert_eq!(header.text(), "Home");

        assert!(header.poll(t0 + SETTLE));
        assert_eq!(header.text(), "Pixel 7");
        assert!(!header.is_changing());
    }

    #[test]
    fn test_same_label_does_not_retrigger() {
        let t0 = Instant::now();
        let mut header = HeaderTitle::new("Home", SETTLE);
        header.request("Home", t0);
        assert!(!header.is_changing());

        header.request("Pixel 7", t0);
        assert!(header.poll(t0 + SETTLE));
        // Repeating the now-displayed label schedules nothing
        header.request("Pixel 7", t0 + SETTLE);
        assert!(!header.is_changing());
    }

    #[test]
    fn test_rapid_changes_last_write_wins() {
        let t0 = Instant::now();
        let mut header = HeaderTitle::new("Home", SETTLE);
        header.request("Pixel 7", t0);
        header.request("OnePlus 12", t0 + Duration::from_millis(60));
        header.request("Nothing Phone", t0 + Duration::from_millis(120));

        // The first two deadlines pass without any intermediate text showing
        assert!(!header.poll(t0 + Duration::from_millis(200)));
        assert_eq!(header.text(), "Home");

        assert!(header.poll(t0 + Duration::from_millis(270)));
        assert_eq!(header.text(), "Nothing Phone");
    }

    #[test]
    fn test_poll_without_pending_is_noop() {
        let mut header = HeaderTitle::new("Home", SETTLE);
        assert!(!header.poll(Instant::now()));
        assert_eq!(header.text(), "Home");
    }
}
