//! A trait for curves parametrized by a scalar.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::{Point, Rect, MAX_EXTREMA};

/// A curve parametrized by a scalar.
///
/// The parameter `t` is the curve's own coordinate: 0 at the start anchor,
/// 1 at the end anchor.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// Get a subsegment of the curve for the given parameter range.
    ///
    /// The subsegment is an exact reparameterization: evaluating it at `s`
    /// reproduces the original curve at `range.start + s * (range.end -
    /// range.start)`, up to floating-point rounding.
    fn subsegment(&self, range: Range<f64>) -> Self;

    /// Subdivide into (roughly) halves.
    fn subdivide(&self) -> (Self, Self) {
        (self.subsegment(0.0..0.5), self.subsegment(0.5..1.0))
    }

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A parametrized curve that reports its interior extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Parameter values of the interior axis-aligned extrema of the curve,
    /// on either axis.
    ///
    /// These are the `t` values where the curve's derivative vanishes on the
    /// x or y axis, filtered to the half-open interval `[0, 1)` and sorted
    /// ascending. The upper endpoint is excluded because the end anchor is
    /// accounted for separately when computing bounds.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA>;

    /// The tight bounding rectangle of the curve.
    ///
    /// This is the exact box spanning the two anchor points and every
    /// interior point where the derivative vanishes on either axis.
    fn bounding_box(&self) -> Rect {
        let mut points: ArrayVec<Point, { MAX_EXTREMA + 2 }> = ArrayVec::new();
        points.push(self.start());
        points.push(self.end());
        for t in self.extrema() {
            points.push(self.eval(t));
        }
        Rect::of_points(&points)
    }
}
