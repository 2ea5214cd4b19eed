//! Time sources for the animation loop.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source for animation.
///
/// `now` is an offset from an arbitrary origin fixed at construction.
pub trait Clock {
    /// Current offset from the clock origin.
    fn now(&self) -> Duration;

    /// Block until `now() >= deadline`.
    fn sleep_until(&self, deadline: Duration);
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Hand-driven clock for deterministic tests and offline rendering.
///
/// Clones share the same time, so a test can keep one handle while a [`crate::Character`] owns
/// another. Sleeping jumps straight to the deadline.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Clock starting at `start`.
    pub fn starting_at(start: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Jump to `now`. Going backwards is allowed.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
