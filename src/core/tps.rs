//=========================================================================
// Tick Rate Meter
//=========================================================================
//
// Measures achieved ticks per second over a rolling one-second window.
//
//=========================================================================

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts ticks and publishes the rate once per window.
#[derive(Debug, Clone)]
pub struct TpsCounter {
    window_start: Option<Instant>,
    ticks: u32,
    current: f64,
}

impl TpsCounter {
    pub fn new() -> Self {
        Self {
            window_start: None,
            ticks: 0,
            current: 0.0,
        }
    }

    /// Records one tick at `now`.
    pub fn record(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.ticks += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= WINDOW {
            self.current = f64::from(self.ticks) / elapsed.as_secs_f64();
            self.ticks = 0;
            self.window_start = Some(now);
        }
    }

    /// Rate measured over the last completed window (0 until one completes).
    pub fn current(&self) -> f64 {
        self.current
    }
}

impl Default for TpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
