//=========================================================================
// Tick Clock
//=========================================================================
//
// Fixed-timestep schedule for redraws. Each due redraw runs one tick;
// when the host falls behind, the backlog is dropped rather than
// replayed.
//
//=========================================================================

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TickClock {
    interval: Duration,
    next: Instant,
}

impl TickClock {
    pub(crate) fn new(tps: f64, start: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / tps),
            next: start,
        }
    }

    /// Deadline for the next tick.
    pub(crate) fn next(&self) -> Instant {
        self.next
    }

    /// Consumes the current slot if it is due at `now`.
    pub(crate) fn try_tick(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
