//! Rate-limited pointer tracking.
//!
//! Pointer-move events can arrive far faster than the frame rate. The
//! throttle coalesces them: an event landing within the window of the last
//! accepted update is held as the single pending value (later events in the
//! same window overwrite it), and the driver promotes it at the start of
//! the next frame once the window has elapsed. This is a throttle, not a
//! queue — intermediate positions are dropped, never buffered.
//!
//! Timestamps are plain milliseconds supplied by the caller, so the type is
//! clock-free and deterministic under test.

use glam::DVec2;

/// Default throttle window, roughly one 60 Hz frame.
pub const DEFAULT_WINDOW_MS: u64 = 16;

/// Coalescing rate limiter over pointer-move events.
#[derive(Debug, Clone)]
pub struct PointerThrottle {
    window_ms: u64,
    last_accept_ms: Option<u64>,
    accepted: Option<DVec2>,
    pending: Option<DVec2>,
}

impl PointerThrottle {
    /// Creates a throttle with the given window in milliseconds.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accept_ms: None,
            accepted: None,
            pending: None,
        }
    }

    /// Submits a pointer position observed at `now_ms`.
    ///
    /// Accepted immediately (returns `true`) when at least the window has
    /// elapsed since the last accepted update, or when no update has been
    /// accepted yet. Otherwise the position replaces any pending value and
    /// `false` is returned.
    pub fn submit(&mut self, pos: DVec2, now_ms: u64) -> bool {
        if self.window_elapsed(now_ms) {
            self.accept(pos, now_ms);
            true
        } else {
            self.pending = Some(pos);
            false
        }
    }

    /// Promotes the pending position if the window has elapsed by `now_ms`.
    ///
    /// The driver calls this once at the start of each frame. Returns `true`
    /// if a pending value was applied.
    pub fn flush(&mut self, now_ms: u64) -> bool {
        if self.pending.is_some() && self.window_elapsed(now_ms) {
            let pos = self.pending.take().unwrap_or_default();
            self.accept(pos, now_ms);
            true
        } else {
            false
        }
    }

    /// The most recently accepted pointer position, if any.
    pub fn position(&self) -> Option<DVec2> {
        self.accepted
    }

    fn window_elapsed(&self, now_ms: u64) -> bool {
        match self.last_accept_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.window_ms,
        }
    }

    fn accept(&mut self, pos: DVec2, now_ms: u64) {
        self.accepted = Some(pos);
        self.last_accept_ms = Some(now_ms);
        self.pending = None;
    }
}

impl Default for PointerThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submit_is_accepted_immediately() {
        let mut t = PointerThrottle::new(16);
        assert!(t.submit(DVec2::new(10.0, 20.0), 0));
        assert_eq!(t.position(), Some(DVec2::new(10.0, 20.0)));
    }

    #[test]
    fn submit_within_window_is_held_pending() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(1.0, 1.0), 0);
        assert!(!t.submit(DVec2::new(2.0, 2.0), 5));
        // Accepted position unchanged until a flush after the window.
        assert_eq!(t.position(), Some(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn later_submits_in_window_overwrite_pending() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(0.0, 0.0), 0);
        t.submit(DVec2::new(1.0, 1.0), 3);
        t.submit(DVec2::new(2.0, 2.0), 7);
        t.submit(DVec2::new(3.0, 3.0), 12);
        assert!(t.flush(16));
        // Only the latest value within the window lands.
        assert_eq!(t.position(), Some(DVec2::new(3.0, 3.0)));
    }

    #[test]
    fn flush_before_window_does_nothing() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(0.0, 0.0), 0);
        t.submit(DVec2::new(5.0, 5.0), 4);
        assert!(!t.flush(10));
        assert_eq!(t.position(), Some(DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn flush_with_no_pending_is_noop() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(0.0, 0.0), 0);
        assert!(!t.flush(100));
        assert_eq!(t.position(), Some(DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn submit_after_window_is_accepted_again() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(0.0, 0.0), 0);
        assert!(t.submit(DVec2::new(9.0, 9.0), 16));
        assert_eq!(t.position(), Some(DVec2::new(9.0, 9.0)));
    }

    #[test]
    fn position_is_none_before_any_event() {
        let t = PointerThrottle::new(16);
        assert_eq!(t.position(), None);
    }

    #[test]
    fn clock_going_backwards_counts_as_within_window() {
        let mut t = PointerThrottle::new(16);
        t.submit(DVec2::new(0.0, 0.0), 100);
        assert!(!t.submit(DVec2::new(1.0, 1.0), 90));
        assert_eq!(t.position(), Some(DVec2::new(0.0, 0.0)));
    }
}
