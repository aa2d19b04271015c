//! Timed camera shake.

/// Shake state. Only one shake runs at a time; starting a new one replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shake {
    pub active: bool,
    /// Peak jitter in world units, reached at the start of the shake.
    pub intensity: f32,
    pub duration_ms: f64,
    pub start_ms: f64,
}

impl Shake {
    /// Build a shake starting at `now_ms`.
    ///
    /// Non-finite intensity becomes `0.0`; negative or non-finite durations
    /// become `0.0`, so the shake ends on the next update.
    pub fn start(intensity: f32, duration_secs: f32, now_ms: f64) -> Self {
        let intensity = if intensity.is_finite() { intensity } else { 0.0 };
        let duration_ms = f64::from(duration_secs) * 1000.0;
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            0.0
        };
        Self {
            active: true,
            intensity,
            duration_ms,
            start_ms: now_ms,
        }
    }

    /// Remaining strength in `(0.0, 1.0]`, or `None` once the shake has expired.
    pub fn remaining(&self, now_ms: f64) -> Option<f32> {
        let elapsed = now_ms - self.start_ms;
        if elapsed < self.duration_ms {
            Some((1.0 - elapsed.max(0.0) / self.duration_ms) as f32)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake_decays_linearly() {
        let s = Shake::start(10.0, 0.5, 1000.0);
        assert!(s.active);
        assert_eq!(s.duration_ms, 500.0);
        assert_eq!(s.remaining(1000.0), Some(1.0));
        assert_eq!(s.remaining(1250.0), Some(0.5));
        assert_eq!(s.remaining(1500.0), None);
    }

    #[test]
    fn test_shake_sanitizes_bad_input() {
        let s = Shake::start(f32::NAN, -2.0, 0.0);
        assert_eq!(s.intensity, 0.0);
        assert_eq!(s.duration_ms, 0.0);
        assert_eq!(s.remaining(0.0), None);
    }
}
