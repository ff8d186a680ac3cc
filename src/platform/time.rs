//! Clocks and frame pacing

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic millisecond tick source
pub trait Clock {
    /// Milliseconds since the clock was created
    fn now_ms(&self) -> u64;

    /// Block (or jump) until `deadline_ms`. Returns immediately if it has
    /// already passed.
    fn wait_until(&mut self, deadline_ms: u64);
}

/// Wall-clock backed by `Instant`, immune to system clock changes
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Hand-driven clock. Waiting jumps straight to the deadline, so headless
/// runs and tests never sleep. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        if deadline_ms > self.now.get() {
            self.now.set(deadline_ms);
        }
    }
}

/// Fixed-rate frame deadlines.
///
/// Deadlines are computed from the frame count rather than accumulated, so
/// 60 Hz does not drift from rounding 16.67ms.
#[derive(Debug, Clone)]
pub struct FramePacer {
    rate: u32,
    frames: u64,
}

impl FramePacer {
    pub fn new(rate: u32) -> Self {
        Self {
            rate: rate.max(1),
            frames: 0,
        }
    }

    /// Count a frame and return when the next one is due (ms from start)
    pub fn next_deadline(&mut self) -> u64 {
        self.frames += 1;
        self.frames * 1000 / u64::from(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(100);
        let mut handle = clock.clone();
        clock.advance(50);
        assert_eq!(handle.now_ms(), 150);
        handle.wait_until(400);
        assert_eq!(clock.now_ms(), 400);
        handle.wait_until(10);
        assert_eq!(clock.now_ms(), 400);
    }

    #[test]
    fn test_pacer_60hz() {
        let mut pacer = FramePacer::new(60);
        let deadlines: Vec<u64> = (0..3).map(|_| pacer.next_deadline()).collect();
        assert_eq!(deadlines, vec![16, 33, 50]);
        for _ in 3..60 {
            pacer.next_deadline();
        }
        // Exactly one second after 60 frames
        assert_eq!(pacer.frames * 1000 / 60, 1000);
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let mut clock = MonotonicClock::new();
        let start = clock.now_ms();
        clock.wait_until(start + 5);
        assert!(clock.now_ms() >= start + 5);
    }
}
