//! Monotonic transition curve evaluation and inverse evaluation.
//!
//! The transition between "selection at the viewport midpoint" and
//! "selection at the viewport edge" follows a fixed family of cubic Bezier
//! curves through `(0, 0)` and `(width, height)` with control points
//! `(curvature * width, 0)` and `(width - curvature * width, height)`.
//!
//! For this control configuration the x component is monotonically
//! non-decreasing in the curve parameter, so `y` is a function of `x`, the
//! curve is continuous and monotonically non-decreasing in both coordinates,
//! and the inverse evaluation has at most one solution in `[0, 1]`.
//! `curvature = 0` degenerates to the straight diagonal; `curvature = 1`
//! stays flat near both endpoints with a steep middle.

use std::f64::consts::PI;

/// Coefficients below this magnitude are treated as zero during the cubic
/// reduction, collapsing to a lower-degree solve instead of dividing by a
/// vanishing leading coefficient.
const EPSILON: f64 = 1e-6;

const TAU: f64 = 2.0 * PI;

/// A point on the transition curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Horizontal component, same unit as `width` (content px).
    pub x: f64,
    /// Vertical component, same unit as `height` (selection ratio).
    pub y: f64,
}

/// Evaluate the curve at parameter `t` in `[0, 1]`. Closed form; cannot fail.
pub fn curve_at_parameter(width: f64, height: f64, curvature: f64, t: f64) -> CurvePoint {
    // B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3
    // P0 = (0, 0) and P1.y = 0, so those terms drop out of the sums.
    let x1 = curvature * width;
    let x2 = width - curvature * width;
    let u = 1.0 - t;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    CurvePoint {
        x: b1 * x1 + b2 * x2 + b3 * width,
        y: b2 * height + b3 * height,
    }
}

/// Evaluate the curve at horizontal position `x`.
///
/// Solves `x(t) = x` for the Bezier parameter, then maps the parameter
/// through [`curve_at_parameter`]. Returns `None` when no parameter in
/// `[0, 1]` produces the requested `x`; callers treat that as "curve
/// saturated at the nearer endpoint" rather than as an error.
pub fn curve_at_x(width: f64, height: f64, curvature: f64, x: f64) -> Option<CurvePoint> {
    find_parameter(width, curvature, x).map(|t| curve_at_parameter(width, height, curvature, t))
}

/// Solve `x(t) = x` for `t`, accepting the first real root in `[0, 1]`.
///
/// Roots within [`EPSILON`] of the interval ends are clamped onto them so
/// the curve endpoints stay reachable under floating-point noise.
fn find_parameter(width: f64, curvature: f64, x: f64) -> Option<f64> {
    let x1 = curvature * width;
    let x2 = width - curvature * width;
    for root in bernstein_roots(x, 0.0, x1, x2, width) {
        if root >= -EPSILON && root < 1.0 + EPSILON {
            return Some(root.clamp(0.0, 1.0));
        }
    }
    None
}

/// Real roots of `B(t) - x = 0` for the cubic with Bernstein coefficients
/// `(pa, pb, pc, pd)`.
///
/// Converts to power-basis coefficients and runs Cardano's formula, using
/// the trigonometric substitution when the discriminant demands three real
/// roots.
fn bernstein_roots(x: f64, pa: f64, pb: f64, pc: f64, pd: f64) -> Vec<f64> {
    let pa3 = 3.0 * pa;
    let pb3 = 3.0 * pb;
    let pc3 = 3.0 * pc;
    let a = -pa + pb3 - pc3 + pd;
    let mut b = pa3 - 2.0 * pb3 + pc3;
    let mut c = -pa3 + pb3;
    let mut d = pa - x;

    // A cubic Bezier can collapse onto a lower-order curve; lower orders are
    // solved directly instead of dividing by the vanishing coefficient.
    if approximately(a, 0.0) {
        if approximately(b, 0.0) {
            if approximately(c, 0.0) {
                // Constant: no solutions at all.
                return Vec::new();
            }
            // Linear.
            return vec![-d / c];
        }
        // Quadratic. A negative radicand yields NaN roots, which fail every
        // interval check downstream.
        let q = (c * c - 4.0 * b * d).sqrt();
        let b2 = 2.0 * b;
        return vec![(q - c) / b2, (-c - q) / b2];
    }

    b /= a;
    c /= a;
    d /= a;

    let b3 = b / 3.0;
    let p = (3.0 * c - b * b) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * b * b * b - 9.0 * b * c + 27.0 * d) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;

    if discriminant < 0.0 {
        // Three real roots, reached through trigonometry to stay out of
        // complex arithmetic.
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let t = -q / (2.0 * r);
        let phi = t.clamp(-1.0, 1.0).acos();
        let t1 = 2.0 * r.cbrt();
        vec![
            t1 * (phi / 3.0).cos() - b3,
            t1 * ((phi + TAU) / 3.0).cos() - b3,
            t1 * ((phi + 2.0 * TAU) / 3.0).cos() - b3,
        ]
    } else if discriminant == 0.0 {
        let u1 = if q2 < 0.0 { (-q2).cbrt() } else { -(q2.cbrt()) };
        vec![2.0 * u1 - b3, -u1 - b3]
    } else {
        let sd = discriminant.sqrt();
        let u1 = (-q2 + sd).cbrt();
        let v1 = (q2 + sd).cbrt();
        vec![u1 - v1 - b3]
    }
}

/// Absolute-epsilon comparison used for the degree collapse.
fn approximately(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn parameter_endpoints_are_exact() {
        for curvature in [0.0, 0.25, 0.5, 1.0] {
            let start = curve_at_parameter(1000.0, 0.5, curvature, 0.0);
            assert_eq!((start.x, start.y), (0.0, 0.0));
            let end = curve_at_parameter(1000.0, 0.5, curvature, 1.0);
            assert_eq!((end.x, end.y), (1000.0, 0.5));
        }
    }

    #[test]
    fn inverse_hits_both_endpoints() {
        for curvature in [0.0, 0.3, 0.5, 0.9, 1.0] {
            let at_zero = curve_at_x(1000.0, 0.5, curvature, 0.0).expect("root at x=0");
            assert_close(at_zero.y, 0.0);
            let at_width = curve_at_x(1000.0, 0.5, curvature, 1000.0).expect("root at x=width");
            assert_close(at_width.y, 0.5);
        }
    }

    #[test]
    fn zero_curvature_is_the_straight_diagonal() {
        for x in [0.0, 125.0, 400.0, 777.0, 1000.0] {
            let point = curve_at_x(1000.0, 1.0, 0.0, x).expect("diagonal solves everywhere");
            assert_close(point.y, x / 1000.0);
        }
    }

    #[test]
    fn curve_passes_through_its_center_of_symmetry() {
        // The control configuration is point-symmetric about the center, so
        // x = width/2 maps to y = height/2 for every curvature.
        for curvature in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let point = curve_at_x(800.0, 0.6, curvature, 400.0).expect("center solves");
            assert_close(point.y, 0.3);
        }
    }

    #[test]
    fn one_third_curvature_collapses_to_lower_degree() {
        // curvature = 1/3 makes x(t) linear in t; the root finder has to take
        // the degree-collapse path without dividing by the vanishing cubic
        // coefficient.
        let point = curve_at_x(900.0, 1.0, 1.0 / 3.0, 450.0).expect("collapsed curve solves");
        assert_close(point.x, 450.0);
        assert_close(point.y, 0.5);
    }

    #[test]
    fn x_outside_domain_has_no_solution() {
        assert_eq!(curve_at_x(1000.0, 0.5, 0.5, 2000.0), None);
        assert_eq!(curve_at_x(1000.0, 0.5, 0.5, -500.0), None);
    }

    #[test]
    fn high_curvature_stays_flat_near_the_start() {
        let bent = curve_at_x(1000.0, 1.0, 1.0, 100.0).expect("solves");
        let straight = curve_at_x(1000.0, 1.0, 0.0, 100.0).expect("solves");
        assert!(bent.y < straight.y);
    }

    proptest! {
        /// f(0) = 0 and f(width) = height for every parameter combination.
        #[test]
        fn prop_boundary_law(
            width in 10.0f64..4000.0,
            height in 0.05f64..1.0,
            curvature in 0.0f64..=1.0,
        ) {
            let start = curve_at_x(width, height, curvature, 0.0);
            prop_assert!(start.is_some());
            prop_assert!(start.map(|p| p.y.abs() < TOLERANCE).unwrap_or(false));

            let end = curve_at_x(width, height, curvature, width);
            prop_assert!(end.is_some());
            prop_assert!(end.map(|p| (p.y - height).abs() < TOLERANCE).unwrap_or(false));
        }

        /// x1 <= x2 implies f(x1) <= f(x2).
        ///
        /// The slack is wider than [`TOLERANCE`]: near curvature 1 the curve
        /// has a vertical tangent at its center, where the solved y is only
        /// conditioned to about the cube root of the coefficient error.
        #[test]
        fn prop_monotonic(
            width in 10.0f64..4000.0,
            height in 0.05f64..1.0,
            curvature in 0.0f64..=1.0,
            fr1 in 0.0f64..=1.0,
            fr2 in 0.0f64..=1.0,
        ) {
            let (lo, hi) = if fr1 <= fr2 { (fr1, fr2) } else { (fr2, fr1) };
            let y1 = curve_at_x(width, height, curvature, lo * width);
            let y2 = curve_at_x(width, height, curvature, hi * width);
            prop_assert!(y1.is_some() && y2.is_some());
            if let (Some(p1), Some(p2)) = (y1, y2) {
                prop_assert!(p1.y <= p2.y + 1e-4);
            }
        }

        /// Forward then inverse evaluation returns to the same curve point.
        ///
        /// Closeness is measured in y, falling back to x where the curve is
        /// vertical (curvature near 1 at the center): there the inverse is a
        /// valid answer whose x matches even though y is ill-conditioned.
        #[test]
        fn prop_round_trip(
            width in 10.0f64..4000.0,
            height in 0.05f64..1.0,
            curvature in 0.0f64..=1.0,
            t in 0.0f64..=1.0,
        ) {
            let forward = curve_at_parameter(width, height, curvature, t);
            let inverse = curve_at_x(width, height, curvature, forward.x);
            prop_assert!(inverse.is_some());
            if let Some(point) = inverse {
                let y_close = (point.y - forward.y).abs() < TOLERANCE;
                let x_close = (point.x - forward.x).abs() < width * 1e-9;
                prop_assert!(y_close || x_close);
            }
        }
    }
}
