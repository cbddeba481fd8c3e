//! Scalar-or-range spans and uniform sampling
//!
//! Particle configuration fields like size and travel distance accept either
//! a single scalar or a `{min, max}` range. [`Span`] models that union and
//! [`Span::normalize`] collapses it to a [`Range`] before any sampling
//! happens, so the synthesis path only ever deals in ranges.
//!
//! Randomness is injected by the caller as a `FnMut() -> f32` closure
//! producing uniform values in `[0, 1)`; this crate never owns an RNG.

use serde::{Deserialize, Serialize};

/// An inclusive numeric range with `min <= max`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check whether a value lies within the range (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Sample a uniform value from the range
    ///
    /// A degenerate range (`min == max`) returns `min` directly rather than
    /// relying on a zero-width draw staying exact under float arithmetic.
    pub fn sample(&self, rng: &mut impl FnMut() -> f32) -> f32 {
        if self.min == self.max {
            return self.min;
        }
        self.min + rng() * (self.max - self.min)
    }

    /// Swap min/max if they arrived inverted
    pub fn ordered(self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }
}

impl From<std::ops::Range<f32>> for Range {
    fn from(r: std::ops::Range<f32>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// A scalar-or-range union accepted by configuration fields
///
/// Serializes untagged, so `1.5` and `{"min": 1.0, "max": 2.0}` are both
/// valid spans in config files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Scalar(f32),
    Range(Range),
}

impl Span {
    /// Collapse the span into a concrete range
    ///
    /// Scalars become a zero-width range; ranges pass through unchanged.
    pub fn normalize(&self) -> Range {
        match *self {
            Span::Scalar(value) => Range::new(value, value),
            Span::Range(range) => range,
        }
    }
}

impl From<f32> for Span {
    fn from(value: f32) -> Self {
        Span::Scalar(value)
    }
}

impl From<std::ops::Range<f32>> for Span {
    fn from(r: std::ops::Range<f32>) -> Self {
        Span::Range(r.into())
    }
}

impl From<Range> for Span {
    fn from(range: Range) -> Self {
        Span::Range(range)
    }
}

/// Map any degree value into `[0, 360)`
///
/// Negative inputs wrap upward; an input that lands exactly on a period
/// boundary reports positive zero, never `-0.0` or `360.0`.
pub fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sample a direction within an angular cone
///
/// Draws uniformly across `spread` degrees starting at `offset`, then
/// normalizes into `[0, 360)`. A zero spread still consumes one draw but
/// always yields `normalize_angle(offset)`.
pub fn random_angle(spread: f32, offset: f32, rng: &mut impl FnMut() -> f32) -> f32 {
    normalize_angle(offset + rng() * spread)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic LCG so sampling tests don't depend on an external RNG
    fn test_rng() -> impl FnMut() -> f32 {
        let mut state = 0x2545F491u32;
        move || {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 8) as f32 / (1u32 << 24) as f32
        }
    }

    #[test]
    fn test_scalar_normalizes_to_zero_width_range() {
        for v in [-3.5, 0.0, 1.0, 87.25] {
            assert_eq!(Span::from(v).normalize(), Range::new(v, v));
        }
    }

    #[test]
    fn test_range_span_passes_through() {
        let span = Span::from(60.0..100.0);
        assert_eq!(span.normalize(), Range::new(60.0, 100.0));
    }

    #[test]
    fn test_sample_stays_in_bounds() {
        let mut rng = test_rng();
        let range = Range::new(60.0, 100.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v), "sample {v} escaped {range:?}");
        }
    }

    #[test]
    fn test_degenerate_range_samples_exactly() {
        let mut rng = test_rng();
        let range = Range::new(0.1, 0.1);
        for _ in 0..1000 {
            assert_eq!(range.sample(&mut rng), 0.1);
        }
    }

    #[test]
    fn test_normalize_angle_bounds_and_period() {
        for a in [-1000.0, -360.0, -90.0, 0.0, 45.0, 359.9, 360.0, 725.0] {
            let n = normalize_angle(a);
            assert!((0.0..360.0).contains(&n), "normalize_angle({a}) = {n}");
            for k in [-2.0f32, -1.0, 1.0, 3.0] {
                assert!((normalize_angle(a + 360.0 * k) - n).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_normalize_angle_negative_shift() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        // boundary values collapse to positive zero
        assert_eq!(normalize_angle(-360.0), 0.0);
        assert!(normalize_angle(-720.0).is_sign_positive());
    }

    #[test]
    fn test_zero_spread_is_exact() {
        let mut rng = test_rng();
        for offset in [-90.0, 0.0, 45.0, 400.0] {
            assert_eq!(random_angle(0.0, offset, &mut rng), normalize_angle(offset));
        }
    }

    #[test]
    fn test_random_angle_respects_cone() {
        let mut rng = test_rng();
        // 120 degree cone pointing up (-90 offset): valid arc is [270, 360) u [0, 30]
        for _ in 0..1000 {
            let a = random_angle(120.0, -90.0, &mut rng);
            assert!(a >= 270.0 || a <= 30.0, "angle {a} outside cone");
        }
    }

    #[test]
    fn test_span_deserializes_scalar_or_range() {
        let scalar: Span = serde_json::from_str("1.5").unwrap();
        assert_eq!(scalar, Span::Scalar(1.5));
        let range: Span = serde_json::from_str(r#"{"min": 60.0, "max": 100.0}"#).unwrap();
        assert_eq!(range.normalize(), Range::new(60.0, 100.0));
    }
}
