//! Easing curves for camera transitions.
//!
//! Each curve maps a normalized progress `t` in `[0.0, 1.0]` to an eased
//! progress. [`Easing::Elastic`] and [`Easing::Bounce`] leave the unit range
//! transiently, but every curve starts at exactly `0.0` and ends at exactly
//! `1.0`.

use serde::Deserialize;
use std::f32::consts::PI;

/// Easing functions for camera transitions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Easing {
    /// Constant speed (no easing).
    #[default]
    Linear,
    /// Starts slow, accelerates (quadratic).
    EaseIn,
    /// Starts fast, decelerates (quadratic).
    EaseOut,
    /// Slow start and end (quadratic).
    EaseInOut,
    /// Overshoots and oscillates into place.
    Elastic,
    /// Bounces against the end value, losing height each time.
    Bounce,
}

impl Easing {
    /// Look up an easing by its script name (`"easeIn"`, `"bounce"`, ...).
    ///
    /// Unknown names fall back to [`Easing::Linear`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "easeIn" => Easing::EaseIn,
            "easeOut" => Easing::EaseOut,
            "easeInOut" => Easing::EaseInOut,
            "elastic" => Easing::Elastic,
            "bounce" => Easing::Bounce,
            _ => Easing::Linear,
        }
    }

    /// Script name of this easing.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easeIn",
            Easing::EaseOut => "easeOut",
            Easing::EaseInOut => "easeInOut",
            Easing::Elastic => "elastic",
            Easing::Bounce => "bounce",
        }
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Easing::from_name(&name)
    }
}

const BOUNCE_N: f32 = 7.5625;
const BOUNCE_D: f32 = 2.75;

fn bounce(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984375
    }
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0]; NaN is treated as 0.0.
pub fn ease(e: Easing, t: f32) -> f32 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    match e {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                let p = -2.0 * t + 2.0;
                1.0 - p * p / 2.0
            }
        }
        Easing::Elastic => {
            let c4 = (2.0 * PI) / 3.0;
            2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
        }
        Easing::Bounce => bounce(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Elastic,
        Easing::Bounce,
    ];

    #[test]
    fn test_ease_all_types_hit_endpoints_exactly() {
        for e in ALL {
            assert_eq!(ease(e, 0.0), 0.0, "{:?} at 0", e);
            assert_eq!(ease(e, 1.0), 1.0, "{:?} at 1", e);
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for e in ALL {
            assert_eq!(ease(e, -3.0), 0.0);
            assert_eq!(ease(e, 7.5), 1.0);
            assert_eq!(ease(e, f32::NAN), 0.0);
        }
    }

    #[test]
    fn test_ease_quadratic_midpoints() {
        assert!(approx_eq(ease(Easing::Linear, 0.25), 0.25));
        assert!(approx_eq(ease(Easing::EaseIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::EaseOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::EaseInOut, 0.25), 0.125));
        assert!(approx_eq(ease(Easing::EaseInOut, 0.5), 0.5));
        assert!(approx_eq(ease(Easing::EaseInOut, 0.75), 0.875));
    }

    #[test]
    fn test_ease_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| ease(Easing::Elastic, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_ease_bounce_branches() {
        // first arc
        assert!(approx_eq(ease(Easing::Bounce, 0.2), BOUNCE_N * 0.04));
        // apex of second, third and fourth arcs
        assert!(approx_eq(ease(Easing::Bounce, 1.5 / BOUNCE_D), 0.75));
        assert!(approx_eq(ease(Easing::Bounce, 2.25 / BOUNCE_D), 0.9375));
        assert!(approx_eq(ease(Easing::Bounce, 2.625 / BOUNCE_D), 0.984375));
        // arcs meet at 1.0 on the sub-interval edges
        assert!(approx_eq(bounce(1.0 / BOUNCE_D), 1.0));
        assert!(approx_eq(bounce(2.0 / BOUNCE_D), 1.0));
        assert!(approx_eq(bounce(2.5 / BOUNCE_D), 1.0));
    }

    #[test]
    fn test_easing_from_name() {
        assert_eq!(Easing::from_name("easeInOut"), Easing::EaseInOut);
        assert_eq!(Easing::from_name("bounce"), Easing::Bounce);
        assert_eq!(Easing::from_name("wobble"), Easing::Linear);
        for e in ALL {
            assert_eq!(Easing::from_name(e.name()), e);
        }
    }

    #[test]
    fn test_easing_deserializes_from_script_name() {
        let e: Easing = serde_json::from_str("\"elastic\"").unwrap();
        assert_eq!(e, Easing::Elastic);
        let e: Easing = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(e, Easing::Linear);
    }
}
