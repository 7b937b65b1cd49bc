//! Trailing debounce
//!
//! Holds at most one pending deadline. Re-triggering cancels and
//! reschedules, so a burst of events yields a single firing once the burst
//! goes quiet. Time is passed in rather than sampled, which keeps the
//! event loop the single clock owner and the tests deterministic.

use std::time::{Duration, Instant};

/// Single-slot trailing debounce timer
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debouncer with a fixed trailing delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule the firing, replacing any not-yet-fired deadline
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Consume the deadline if it has passed; fires at most once per trigger
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.deadline.is_some_and(|at| now >= at) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// True while a firing is scheduled
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any scheduled firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(50);

    #[test]
    fn test_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.trigger(t0);

        assert!(debounce.is_pending());
        assert!(!debounce.fire(t0 + Duration::from_millis(49)));
        assert!(debounce.fire(t0 + DELAY));
        // Consumed; does not fire again
        assert!(!debounce.fire(t0 + Duration::from_millis(100)));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_retrigger_pushes_deadline_back() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.trigger(t0);
        debounce.trigger(t0 + Duration::from_millis(40));

        // Original deadline has passed, rescheduled one has not
        assert!(!debounce.fire(t0 + Duration::from_millis(60)));
        assert!(debounce.fire(t0 + Duration::from_millis(90)));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.trigger(t0);
        debounce.cancel();

        assert!(!debounce.is_pending());
        assert!(!debounce.fire(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_untriggered_never_fires() {
        let mut debounce = Debounce::new(DELAY);
        assert!(!debounce.fire(Instant::now() + Duration::from_secs(10)));
    }
}
