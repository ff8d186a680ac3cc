//! Elapsed-time interval timer
//!
//! Every timing rule in the game (spawn cadence, freeze window, slice and
//! slash lifetimes) is "how long since X happened" against a monotonic
//! millisecond tick, so they all share this one type.

use serde::{Deserialize, Serialize};

/// Tracks the last time something fired and how long until it may fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    /// Tick (ms) of the last firing or start
    started_at: u64,
    /// Interval length (ms)
    interval_ms: u64,
}

impl IntervalTimer {
    pub fn new(interval_ms: u64, started_at: u64) -> Self {
        Self {
            started_at,
            interval_ms,
        }
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Milliseconds since the timer last fired. Saturates at zero if the
    /// caller hands in an earlier tick.
    #[inline]
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }

    /// `now - started >= interval`
    #[inline]
    pub fn is_due(&self, now: u64) -> bool {
        self.elapsed(now) >= self.interval_ms
    }

    /// `now - started > interval` (strictly past, used for lifetimes)
    #[inline]
    pub fn is_past(&self, now: u64) -> bool {
        self.elapsed(now) > self.interval_ms
    }

    /// Restart counting from `now`
    pub fn restart(&mut self, now: u64) {
        self.started_at = now;
    }

    /// Fire if due, restarting from `now`. Returns whether it fired.
    ///
    /// At most one firing per call: a timer that is several intervals
    /// behind does not catch up.
    pub fn try_fire(&mut self, now: u64) -> bool {
        if self.is_due(now) {
            self.restart(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_at_start() {
        let mut t = IntervalTimer::new(1200, 0);
        assert!(!t.try_fire(0));
        assert!(!t.try_fire(1199));
        assert!(t.try_fire(1200));
        assert_eq!(t.started_at(), 1200);
        assert!(!t.try_fire(2399));
        assert!(t.try_fire(2400));
    }

    #[test]
    fn test_no_backlog() {
        let mut t = IntervalTimer::new(100, 0);
        assert!(t.try_fire(1000));
        // Ten intervals passed but only one firing happened
        assert!(!t.try_fire(1000));
        assert!(!t.try_fire(1099));
    }

    #[test]
    fn test_due_vs_past_boundary() {
        let t = IntervalTimer::new(300, 1000);
        assert!(t.is_due(1300));
        assert!(!t.is_past(1300));
        assert!(t.is_past(1301));
    }

    #[test]
    fn test_elapsed_saturates() {
        let t = IntervalTimer::new(300, 1000);
        assert_eq!(t.elapsed(500), 0);
        assert!(!t.is_due(500));
    }
}
