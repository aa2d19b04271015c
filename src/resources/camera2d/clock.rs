//! Wall-clock sources for camera timing.
//!
//! Shakes and transitions measure elapsed time against a [`Clock`] instead of
//! accumulating frame deltas, so a long frame just produces a larger elapsed
//! value on the next update.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of the current time in milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measuring milliseconds since its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually driven clock for deterministic runs.
///
/// Clones share the same time value, so a runtime can keep one handle to
/// advance while the camera reads another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ms(&self, now_ms: f64) {
        self.bits.store(now_ms.to_bits(), Ordering::Relaxed);
    }

    /// Move the clock forward. Negative and non-finite steps are ignored.
    pub fn advance_ms(&self, delta_ms: f64) {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.set_ms(self.now_ms() + delta_ms);
        }
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance_secs(&self, secs: f32) {
        self.advance_ms(f64::from(secs) * 1000.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
