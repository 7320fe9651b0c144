//! Cubic Bézier segments.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_quadratic};
use crate::{Axis, ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

/// A single cubic Bézier segment.
///
/// `p0` and `p3` are the anchor points, `p1` and `p2` the handles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start anchor.
    pub p0: Point,
    /// The first handle.
    pub p1: Point,
    /// The second handle.
    pub p2: Point,
    /// The end anchor.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The power-basis coefficients `(a, b, c, d)` of this curve, so that
    /// B(t) = a t³ + b t² + c t + d.
    ///
    /// These are the unique coefficients satisfying B(0) = `p0`,
    /// B(1) = `p3`, and matching the Bézier basis at the handles.
    #[inline]
    pub fn parameters(&self) -> (Vec2, Vec2, Vec2, Vec2) {
        let d = self.p0.to_vec2();
        let c = 3.0 * (self.p1.to_vec2() - d);
        let b = 3.0 * (self.p2 - self.p1) - c;
        let a = self.p3.to_vec2() - d - c - b;
        (a, b, c, d)
    }

    /// Recover the control points of the curve with the given power-basis
    /// coefficients.
    fn from_parameters(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> CubicBez {
        let p0 = d.to_point();
        let p1 = p0 + c * (1.0 / 3.0);
        let p2 = p1 + (b + c) * (1.0 / 3.0);
        let p3 = (a + b + c + d).to_point();
        CubicBez { p0, p1, p2, p3 }
    }

    /// Split the curve where it crosses the coordinate `value` on the given
    /// axis.
    ///
    /// With [`Axis::Horizontal`], `value` is an x coordinate; with
    /// [`Axis::Vertical`], a y coordinate. Crossings are kept in the
    /// half-open parameter interval `[0, 1)` and sorted; with no crossing
    /// the original segment is returned as the single element. Otherwise
    /// each consecutive parameter pair (bracketed by 0 and 1) yields one
    /// output segment, and the segments concatenated in order exactly cover
    /// the original curve.
    pub fn split_at_coord(&self, value: f64, axis: Axis) -> ArrayVec<CubicBez, 4> {
        let (a, b, c, d) = self.parameters();
        let mut ts: ArrayVec<f64, 3> = ArrayVec::new();
        for t in solve_cubic(
            a.coord(axis),
            b.coord(axis),
            c.coord(axis),
            d.coord(axis) - value,
        ) {
            if (0.0..1.0).contains(&t) {
                ts.push(t);
            }
        }
        ts.sort_by(|x, y| x.partial_cmp(y).unwrap());

        let mut result = ArrayVec::new();
        if ts.is_empty() {
            result.push(*self);
            return result;
        }
        let mut t0 = 0.0;
        for &t1 in ts.iter().chain(std::iter::once(&1.0)) {
            result.push(self.subsegment(t0..t1));
            t0 = t1;
        }
        result
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// Reparameterize onto `range` by the substitution u = t0 + delta·s.
    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (a, b, c, d) = self.parameters();
        let (t0, t1) = (range.start, range.end);
        let delta = t1 - t0;
        let a1 = a * (delta * delta * delta);
        let b1 = (a * (3.0 * t0) + b) * (delta * delta);
        let c1 = (a * (3.0 * t0 * t0) + b * (2.0 * t0) + c) * delta;
        let d1 = a * (t0 * t0 * t0) + b * (t0 * t0) + c * t0 + d;
        CubicBez::from_parameters(a1, b1, c1, d1)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveExtrema for CubicBez {
    /// Interior extrema of the curve.
    ///
    /// The derivative is a quadratic per axis, 3a t² + 2b t + c, solved with
    /// the quadratic solver. Roots from both axes contribute: an extremum on
    /// the "wrong" axis evaluates to a point already inside the bound and
    /// does not move it.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let (a, b, c, _) = self.parameters();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            for t in solve_quadratic(3.0 * a.coord(axis), 2.0 * b.coord(axis), c.coord(axis)) {
                if (0.0..1.0).contains(&t) {
                    result.push(t);
                }
            }
        }
        result.sort_by(|x, y| x.partial_cmp(y).unwrap());
        result
    }
}
