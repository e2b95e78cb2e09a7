use std::{cell::Cell, time::Instant};

use crate::foundation::core::TimeMs;

/// Source of the current time for the sequencer.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> TimeMs;
}

/// Monotonic wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Clock reading zero now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeMs {
        let ms = self.start.elapsed().as_millis();
        TimeMs(u64::try_from(ms).unwrap_or(u64::MAX))
    }
}

/// Virtual clock advanced by hand; used for tests and scripted playback.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Clock stopped at `start`.
    pub fn new(start: TimeMs) -> Self {
        Self {
            now: Cell::new(start.0),
        }
    }

    /// Move forward by `ms` and return the new instant.
    pub fn advance(&self, ms: u64) -> TimeMs {
        self.now.set(self.now.get().saturating_add(ms));
        self.now()
    }

    /// Jump to `to`; time never moves backwards.
    pub fn set(&self, to: TimeMs) {
        self.now.set(self.now.get().max(to.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimeMs {
        TimeMs(self.now.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/clock.rs"]
mod tests;
