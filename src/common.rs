//! Common mathematical operations: closed-form polynomial root finding.

use std::f64::consts::PI;

use arrayvec::ArrayVec;

/// Magnitude below which a cubic's leading coefficient is treated as zero.
///
/// For very small leading coefficients the cubic formula returns unreliable
/// results, so [`solve_cubic`] falls back to the quadratic solver rather
/// than testing for exact zero.
pub const CUBIC_EPSILON: f64 = 1e-6;

/// Find real roots of a quadratic equation.
///
/// Returns values of x for which a x² + b x + c = 0. The result is neither
/// sorted nor deduplicated; a double root appears twice, and callers filter
/// and order roots as needed.
///
/// Degenerate coefficient sets are not errors: with `a == 0` the linear
/// equation is solved instead (one root), and with `a == 0 && b == 0` there
/// is no equation to solve and the result is empty. Complex conjugate roots
/// (negative discriminant) are discarded, also yielding an empty result.
///
/// ```
/// use beztools::common::solve_quadratic;
///
/// assert_eq!(solve_quadratic(1.0, 0.0, -4.0).as_slice(), [2.0, -2.0]);
/// assert_eq!(solve_quadratic(0.0, 2.0, -4.0).as_slice(), [2.0]);
/// assert!(solve_quadratic(0.0, 0.0, 5.0).is_empty());
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    if a == 0.0 {
        if b != 0.0 {
            result.push(-c / b);
        }
        return result;
    }
    let d = b * b - 4.0 * a * c;
    if d >= 0.0 {
        let rd = d.sqrt();
        result.push((-b + rd) / (2.0 * a));
        result.push((-b - rd) / (2.0 * a));
    }
    result
}

/// Find real roots of a cubic equation.
///
/// Returns values of x for which a x³ + b x² + c x + d = 0, by Cardano's
/// method with the trigonometric branch for three real roots. The result is
/// neither sorted nor deduplicated.
///
/// When `|a| <` [`CUBIC_EPSILON`] the equation is treated as quadratic and
/// the result equals `solve_quadratic(b, c, d)` exactly. A strictly negative
/// `R² − Q³` selects the three-real-root branch; zero or positive yields the
/// single real root (a repeated root is reported once).
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    if a.abs() < CUBIC_EPSILON {
        result.extend(solve_quadratic(b, c, d));
        return result;
    }
    let a1 = b / a;
    let a2 = c / a;
    let a3 = d / a;

    let q = (a1 * a1 - 3.0 * a2) / 9.0;
    let r = (2.0 * a1 * a1 * a1 - 9.0 * a1 * a2 + 27.0 * a3) / 54.0;
    let r2_q3 = r * r - q * q * q;

    if r2_q3 < 0.0 {
        // Three distinct real roots, by the trigonometric method.
        let theta = (r / (q * q * q).sqrt()).acos();
        let rq2 = -2.0 * q.sqrt();
        result.push(rq2 * (theta / 3.0).cos() - a1 / 3.0);
        result.push(rq2 * ((theta + 2.0 * PI) / 3.0).cos() - a1 / 3.0);
        result.push(rq2 * ((theta + 4.0 * PI) / 3.0).cos() - a1 / 3.0);
    } else {
        let mut x = if q == 0.0 && r == 0.0 {
            0.0
        } else {
            let x = (r2_q3.sqrt() + r.abs()).cbrt();
            x + q / x
        };
        if r >= 0.0 {
            x = -x;
        }
        result.push(x - a1 / 3.0);
    }
    result
}
