//! Frame loop: calls a per-frame callback at a target rate until its [`Liveness`] is cleared.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::animation::clock::Clock;
use crate::foundation::core::Fps;
use crate::foundation::error::ElfResult;

/// Shared flag telling a [`FrameTicker`] whether its owner still exists.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// A live flag.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Whether the loop should keep going.
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Stop the loop. It finishes at the next tick boundary without calling back again.
    pub fn detach(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters from one [`FrameTicker::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickerStats {
    /// Callbacks invoked.
    pub frames: u64,
    /// Frame slots skipped because a callback overran.
    pub coalesced: u64,
}

/// Fixed-rate frame scheduler.
///
/// Late frames are coalesced: after an overrun the next frame runs immediately and the schedule
/// restarts from there, without bursts of catch-up frames.
#[derive(Clone, Copy, Debug)]
pub struct FrameTicker {
    interval: Duration,
}

impl FrameTicker {
    /// Ticker targeting `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            interval: fps.frame_duration().max(Duration::from_nanos(1)),
        }
    }

    /// Target time between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `live` is detached or `on_frame` fails. `on_frame` receives the single `now`
    /// sampled for that frame.
    pub fn run<C, F>(&self, clock: &C, live: &Liveness, mut on_frame: F) -> ElfResult<TickerStats>
    where
        C: Clock + ?Sized,
        F: FnMut(Duration) -> ElfResult<()>,
    {
        let mut stats = TickerStats::default();
        let mut next = clock.now();

        while live.is_alive() {
            let now = clock.now();
            on_frame(now)?;
            stats.frames += 1;

            next += self.interval;
            let after = clock.now();
            if after > next {
                let behind = after - next;
                let skipped = behind.as_nanos() / self.interval.as_nanos();
                stats.coalesced += u64::try_from(skipped).unwrap_or(u64::MAX);
                next = after;
            }
            clock.sleep_until(next);
        }

        tracing::debug!(frames = stats.frames, coalesced = stats.coalesced, "frame loop stopped");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
