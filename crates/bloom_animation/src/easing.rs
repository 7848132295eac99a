//! Easing curves
//!
//! Maps linear progress `t` in `[0, 1]` to eased progress. Every curve
//! returns exactly `0.0` at `t <= 0` and `1.0` at `t >= 1`.

use crate::spring::SpringCurve;

/// Named easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Platform ease-in, cubic-bezier(0.42, 0, 1, 1)
    EaseIn,
    /// Platform ease-out, cubic-bezier(0, 0, 0.58, 1)
    EaseOut,
    /// Platform ease-in-out, cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    /// CSS-style cubic-bezier timing function with control points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Damped spring response, may overshoot 1.0 before settling
    Spring(SpringCurve),
}

impl Easing {
    /// Apply the curve to linear progress
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
            Easing::Spring(curve) => curve.value_at(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

/// Evaluate a unit cubic-bezier timing function at `x`
///
/// Solves `x(s) = x` for the curve parameter with Newton's method, falling
/// back to bisection when the derivative vanishes, then returns `y(s)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    // Polynomial coefficients for B(s) = ((a*s + b)*s + c)*s
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |s: f32| ((ax * s + bx) * s + cx) * s;
    let sample_y = |s: f32| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f32| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = x;
    for _ in 0..8 {
        let err = sample_x(s) - x;
        if err.abs() < EPSILON {
            return sample_y(s);
        }
        let d = slope_x(s);
        if d.abs() < EPSILON {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let sx = sample_x(s);
        if (sx - x).abs() < EPSILON {
            break;
        }
        if sx < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    sample_y(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [Easing; 6] {
        [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        Easing::Spring(SpringCurve::bloom(500.0)),
        ]
    }

    #[test]
    fn test_endpoints_are_exact() {
        for easing in all() {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(-0.5), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.5), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let a = Easing::EaseInOut.apply(t);
            let b = 1.0 - Easing::EaseInOut.apply(1.0 - t);
            assert!((a - b).abs() < 1e-3, "t={} a={} b={}", t, a, b);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_ease_in_lags_and_ease_out_leads() {
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!(Easing::EaseIn.apply(t) < t);
            assert!(Easing::EaseOut.apply(t) > t);
        }
    }

    #[test]
    fn test_bezier_curves_are_monotonic() {
        for easing in &all()[..5] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{:?} decreased at {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let linear_bezier = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert!((linear_bezier.apply(t) - t).abs() < 1e-4);
        }
    }
}
