//! Timeline Curves
//!
//! A curve maps a normalized time in `[0, 1]` to a scalar. Anything callable
//! as `Fn(f32) -> f32` is a curve; designer-authored curves are described by
//! [`CurveAsset`] so they can live in a JSON config next to the rest of the
//! movement tuning.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::timeline::{Curve, CurveAsset, CurveKey};
//!
//! let tilt = CurveAsset::Keyed(vec![
//!     CurveKey::new(0.0, 0.0),
//!     CurveKey::new(1.0, -8.0),
//! ]);
//! assert_eq!(tilt.evaluate(0.5), -4.0);
//! ```

use serde::{Deserialize, Serialize};

/// Maps a normalized time to a scalar value.
pub trait Curve {
    /// Sample the curve at normalized time `t`.
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> Curve for F
where
    F: Fn(f32) -> f32,
{
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// A single key on a [`CurveAsset::Keyed`] curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Normalized time of the key
    pub time: f32,
    /// Value at that time
    pub value: f32,
}

impl CurveKey {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Designer-authored curve shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveAsset {
    /// Identity: `f(t) = t`
    Linear,
    /// Same value everywhere
    Constant(f32),
    /// Quadratic ease in
    EaseIn,
    /// Quadratic ease out
    EaseOut,
    /// Quadratic ease in and out
    EaseInOut,
    /// Smoothstep `3t^2 - 2t^3`
    SmoothStep,
    /// Piecewise-linear keys. Keys need not be sorted; values are held flat
    /// before the first key and after the last one.
    Keyed(Vec<CurveKey>),
}

impl Default for CurveAsset {
    fn default() -> Self {
        CurveAsset::Linear
    }
}

impl CurveAsset {
    /// Build a keyed curve from `(time, value)` pairs.
    pub fn keyed(keys: &[(f32, f32)]) -> Self {
        CurveAsset::Keyed(keys.iter().map(|&(t, v)| CurveKey::new(t, v)).collect())
    }

    /// Sort keys by time. Loaders call this once so evaluation can assume order.
    pub fn normalize(&mut self) {
        if let CurveAsset::Keyed(keys) = self {
            keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        }
    }
}

impl Curve for CurveAsset {
    fn evaluate(&self, t: f32) -> f32 {
        match self {
            CurveAsset::Linear => t,
            CurveAsset::Constant(value) => *value,
            CurveAsset::EaseIn => {
                let t = t.clamp(0.0, 1.0);
                t * t
            }
            CurveAsset::EaseOut => {
                let t = t.clamp(0.0, 1.0);
                1.0 - (1.0 - t) * (1.0 - t)
            }
            CurveAsset::EaseInOut => {
                let t = t.clamp(0.0, 1.0);
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            CurveAsset::SmoothStep => {
                let t = t.clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
            CurveAsset::Keyed(keys) => evaluate_keys(keys, t),
        }
    }
}

fn evaluate_keys(keys: &[CurveKey], t: f32) -> f32 {
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };

    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            let alpha = (t - a.time) / span;
            return a.value + (b.value - a.value) * alpha;
        }
    }

    last.value
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear_is_identity() {
        let curve = CurveAsset::Linear;
        assert!(approx_eq(curve.evaluate(0.0), 0.0));
        assert!(approx_eq(curve.evaluate(0.25), 0.25));
        assert!(approx_eq(curve.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_closure_curve() {
        let double = |t: f32| t * 2.0;
        assert!(approx_eq(double.evaluate(0.3), 0.6));
    }

    #[test]
    fn test_eased_curves_hit_endpoints() {
        for curve in [
            CurveAsset::EaseIn,
            CurveAsset::EaseOut,
            CurveAsset::EaseInOut,
            CurveAsset::SmoothStep,
        ] {
            assert!(approx_eq(curve.evaluate(0.0), 0.0), "{curve:?} at 0");
            assert!(approx_eq(curve.evaluate(1.0), 1.0), "{curve:?} at 1");
        }
    }

    #[test]
    fn test_keyed_interpolates_between_keys() {
        let curve = CurveAsset::keyed(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        assert!(approx_eq(curve.evaluate(0.25), 0.5));
        assert!(approx_eq(curve.evaluate(0.5), 1.0));
        assert!(approx_eq(curve.evaluate(0.75), 0.5));
    }

    #[test]
    fn test_keyed_holds_outside_range() {
        let curve = CurveAsset::keyed(&[(0.2, 3.0), (0.8, 5.0)]);
        assert!(approx_eq(curve.evaluate(0.0), 3.0));
        assert!(approx_eq(curve.evaluate(1.0), 5.0));
    }

    #[test]
    fn test_keyed_empty_is_zero() {
        let curve = CurveAsset::Keyed(Vec::new());
        assert_eq!(curve.evaluate(0.5), 0.0);
    }

    #[test]
    fn test_normalize_sorts_keys() {
        let mut curve = CurveAsset::keyed(&[(1.0, 10.0), (0.0, 0.0)]);
        curve.normalize();
        assert!(approx_eq(curve.evaluate(0.5), 5.0));
    }

    #[test]
    fn test_deserialize_keyed_from_json() {
        let json = r#"{"keyed":[{"time":0.0,"value":0.0},{"time":1.0,"value":-8.0}]}"#;
        let curve: CurveAsset = serde_json::from_str(json).unwrap();
        assert!(approx_eq(curve.evaluate(0.5), -4.0));
    }
}
