//! Quadratic Bézier segments.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{Axis, ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

/// A single quadratic Bézier segment.
///
/// `p0` and `p2` are the anchor points, `p1` the handle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start anchor.
    pub p0: Point,
    /// The handle.
    pub p1: Point,
    /// The end anchor.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// The power-basis coefficients `(a, b, c)` of this curve, so that
    /// B(t) = a t² + b t + c.
    ///
    /// These are the unique coefficients satisfying B(0) = `p0`,
    /// B(1) = `p2`, and matching the Bézier basis at the handle.
    #[inline]
    pub fn parameters(&self) -> (Vec2, Vec2, Vec2) {
        let c = self.p0.to_vec2();
        let b = 2.0 * (self.p1.to_vec2() - c);
        let a = self.p2.to_vec2() - c - b;
        (a, b, c)
    }

    /// Recover the control points of the curve with the given power-basis
    /// coefficients.
    fn from_parameters(a: Vec2, b: Vec2, c: Vec2) -> QuadBez {
        let p0 = c.to_point();
        let p1 = p0 + b * 0.5;
        let p2 = (a + b + c).to_point();
        QuadBez { p0, p1, p2 }
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
    ///
    /// A tangent crossing is a double root and produces a degenerate middle
    /// segment, matching the solver's no-deduplication policy.
    ///
    /// ```
    /// use beztools::{Axis, QuadBez};
    ///
    /// let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
    /// let parts = q.split_at_coord(50.0, Axis::Horizontal);
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0], QuadBez::new((0.0, 0.0), (25.0, 50.0), (50.0, 50.0)));
    /// assert_eq!(parts[1], QuadBez::new((50.0, 50.0), (75.0, 50.0), (100.0, 0.0)));
    /// ```
    pub fn split_at_coord(&self, value: f64, axis: Axis) -> ArrayVec<QuadBez, 3> {
        let (a, b, c) = self.parameters();
        let mut ts: ArrayVec<f64, 2> = ArrayVec::new();
        for t in solve_quadratic(a.coord(axis), b.coord(axis), c.coord(axis) - value) {
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

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t;
        v.to_point()
    }

    /// Reparameterize onto `range` by the substitution u = t0 + delta·s.
    fn subsegment(&self, range: Range<f64>) -> QuadBez {
        let (a, b, c) = self.parameters();
        let (t0, t1) = (range.start, range.end);
        let delta = t1 - t0;
        let a1 = a * (delta * delta);
        let b1 = (a * (2.0 * t0) + b) * delta;
        let c1 = a * (t0 * t0) + b * t0 + c;
        QuadBez::from_parameters(a1, b1, c1)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveExtrema for QuadBez {
    /// Interior extrema of the curve.
    ///
    /// The derivative of a quadratic is linear, so each axis is solved
    /// directly: 2 a t + b = 0, skipping an axis whose quadratic
    /// coefficient vanishes.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let (a, b, _) = self.parameters();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let ax = a.coord(axis);
            if ax != 0.0 {
                let t = -b.coord(axis) / (2.0 * ax);
                if (0.0..1.0).contains(&t) {
                    result.push(t);
                }
            }
        }
        result.sort_by(|x, y| x.partial_cmp(y).unwrap());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_parameters() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let (a, b, c) = q.parameters();
        assert_eq!(c, Vec2::new(0.0, 0.0));
        assert_eq!(b, Vec2::new(100.0, 200.0));
        assert_eq!(a, Vec2::new(0.0, -200.0));
        // Power basis and Bézier basis agree on a parameter grid.
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let p = (a * (t * t) + b * t + c).to_point();
            assert_near(p, q.eval(t), 1e-12);
        }
    }

    #[test]
    fn quadbez_bounding_box() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 100.0, 50.0));
        // Monotone on both axes: the anchors alone span the box.
        let q = QuadBez::new((0.0, 0.0), (100.0, 0.0), (100.0, 100.0));
        assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn quadbez_subsegment() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        let t0 = 0.1;
        let t1 = 0.8;
        let qs = q.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(q.eval(ts), qs.eval(t), epsilon);
        }
    }

    #[test]
    fn quadbez_subdivide() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        let (left, right) = q.subdivide();
        let epsilon = 1e-12;
        assert_near(left.start(), q.start(), epsilon);
        assert_near(left.end(), right.start(), epsilon);
        assert_near(right.end(), q.end(), epsilon);
        assert_near(left.end(), q.eval(0.5), epsilon);
    }

    #[test]
    fn quadbez_split_single_crossing() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let parts = q.split_at_coord(25.0, Axis::Horizontal);
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            QuadBez::new((0.0, 0.0), (12.5, 25.0), (25.0, 37.5))
        );
        assert_eq!(
            parts[1],
            QuadBez::new((25.0, 37.5), (62.5, 75.0), (100.0, 0.0))
        );
    }

    #[test]
    fn quadbez_split_double_crossing() {
        // y reaches 25 twice on the way up and down.
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let parts = q.split_at_coord(25.0, Axis::Vertical);
        assert_eq!(parts.len(), 3);
        // Reconstruct the crossing parameters the same way the splitter
        // brackets them and compare against subsegments of the original.
        let (a, b, c) = q.parameters();
        let mut ts: Vec<f64> = solve_quadratic(a.y, b.y, c.y - 25.0)
            .into_iter()
            .filter(|t| (0.0..1.0).contains(t))
            .collect();
        ts.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(ts.len(), 2);
        let brackets = [0.0, ts[0], ts[1], 1.0];
        let epsilon = 1e-9;
        for (seg, w) in parts.iter().zip(brackets.windows(2)) {
            let n = 8;
            for i in 0..=n {
                let s = (i as f64) * (n as f64).recip();
                let t = w[0] + s * (w[1] - w[0]);
                assert_near(seg.eval(s), q.eval(t), epsilon);
            }
        }
        // Junctions sit on the threshold.
        assert!((parts[0].p2.y - 25.0).abs() < epsilon);
        assert!((parts[1].p2.y - 25.0).abs() < epsilon);
    }

    #[test]
    fn quadbez_split_tangent_crossing() {
        // The apex is a double root; the degenerate middle segment is kept.
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let parts = q.split_at_coord(50.0, Axis::Vertical);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].p0, parts[1].p2);
    }

    #[test]
    fn quadbez_split_outside_is_unsplit() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let parts = q.split_at_coord(150.0, Axis::Horizontal);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], q);
    }
}
