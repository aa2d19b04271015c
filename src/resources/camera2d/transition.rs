//! Eased camera transitions.

use glam::Vec2;

use super::easing::{Easing, ease};

/// A timed, eased move of the camera position from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Vec2,
    pub to: Vec2,
    pub duration_ms: f64,
    pub start_ms: f64,
    pub easing: Easing,
}

/// Where a transition puts the camera at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Still running; camera goes to the interpolated point.
    InFlight(Vec2),
    /// Finished; camera snaps to `to` and the transition is dropped.
    Done(Vec2),
}

impl Transition {
    /// Zero, negative and non-finite durations are stored as `0.0`.
    pub fn new(from: Vec2, to: Vec2, duration_secs: f32, easing: Easing, now_ms: f64) -> Self {
        let duration_ms = f64::from(duration_secs) * 1000.0;
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            0.0
        };
        Self {
            from,
            to,
            duration_ms,
            start_ms: now_ms,
            easing,
        }
    }

    pub fn step(&self, now_ms: f64) -> Step {
        let elapsed = now_ms - self.start_ms;
        // covers duration_ms == 0.0, so the division below is safe
        if elapsed >= self.duration_ms {
            return Step::Done(self.to);
        }
        let progress = (elapsed.max(0.0) / self.duration_ms) as f32;
        let t = ease(self.easing, progress);
        Step::InFlight(self.from + (self.to - self.from) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_interpolates_then_snaps() {
        let tr = Transition::new(
            Vec2::ZERO,
            Vec2::new(100.0, -50.0),
            1.0,
            Easing::Linear,
            0.0,
        );
        assert_eq!(tr.step(0.0), Step::InFlight(Vec2::ZERO));
        assert_eq!(tr.step(500.0), Step::InFlight(Vec2::new(50.0, -25.0)));
        assert_eq!(tr.step(1000.0), Step::Done(Vec2::new(100.0, -50.0)));
        assert_eq!(tr.step(5000.0), Step::Done(Vec2::new(100.0, -50.0)));
    }

    #[test]
    fn test_transition_zero_duration_snaps_immediately() {
        let to = Vec2::new(7.0, 8.0);
        for d in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let tr = Transition::new(Vec2::ZERO, to, d, Easing::Bounce, 10.0);
            assert_eq!(tr.duration_ms, 0.0);
            assert_eq!(tr.step(10.0), Step::Done(to));
        }
    }

    #[test]
    fn test_transition_uses_easing() {
        let tr = Transition::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, Easing::EaseIn, 0.0);
        assert_eq!(tr.step(500.0), Step::InFlight(Vec2::new(25.0, 0.0)));
    }
}
