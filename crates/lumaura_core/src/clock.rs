//! Wall clocks.
//!
//! Pulse effects are driven by wall-clock seconds rather than frame counts,
//! so a slow host still pulses at the same real-time rate.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Source of wall-clock time in seconds.
pub trait Clock: Send + Sync {
    /// Current time in seconds.
    fn now_secs(&self) -> f64;
}

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64())
    }
}

/// Clock advanced explicitly by the host. Used for headless previews and
/// tests, where every frame must be reproducible.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<f64>,
}

impl ManualClock {
    /// Creates a clock reading `start` seconds.
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, secs: f64) {
        *self.now.lock() += secs;
    }

    /// Sets the clock.
    pub fn set(&self, secs: f64) {
        *self.now.lock() = secs;
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        *self.now.lock()
    }
}
