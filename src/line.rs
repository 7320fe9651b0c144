//! Lines.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::{Axis, ParamCurve, ParamCurveExtrema, Point, MAX_EXTREMA};

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Split the line where it crosses the coordinate `value` on the given
    /// axis.
    ///
    /// With [`Axis::Horizontal`], `value` is an x coordinate and the line is
    /// split where its x component equals `value`; with [`Axis::Vertical`],
    /// a y coordinate. A crossing at parameter `t` is used only when `0 <= t
    /// < 1`: a crossing at the start anchor yields a degenerate leading
    /// piece, while a crossing exactly at the end anchor (or no crossing at
    /// all, including a line parallel to the threshold) returns the original
    /// segment unsplit.
    ///
    /// ```
    /// use beztools::{Axis, Line, Point};
    ///
    /// let line = Line::new((0.0, 0.0), (100.0, 100.0));
    /// let parts = line.split_at_coord(50.0, Axis::Vertical);
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0].p1, Point::new(50.0, 50.0));
    /// assert_eq!(parts[1].p0, Point::new(50.0, 50.0));
    /// ```
    pub fn split_at_coord(&self, value: f64, axis: Axis) -> ArrayVec<Line, 2> {
        let mut result = ArrayVec::new();
        let d = self.p1 - self.p0;
        let da = d.coord(axis);
        if da != 0.0 {
            let t = (value - self.p0.coord(axis)) / da;
            if (0.0..1.0).contains(&t) {
                let mid = self.p0 + d * t;
                result.push(Line::new(self.p0, mid));
                result.push(Line::new(mid, self.p1));
                return result;
            }
        }
        result.push(*self);
        result
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        Line {
            p0: self.eval(range.start),
            p1: self.eval(range.end),
        }
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveExtrema for Line {
    /// A line has no interior extrema.
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        ArrayVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    #[test]
    fn line_split_midway() {
        let line = Line::new((0.0, 0.0), (100.0, 100.0));
        let parts = line.split_at_coord(50.0, Axis::Vertical);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Line::new((0.0, 0.0), (50.0, 50.0)));
        assert_eq!(parts[1], Line::new((50.0, 50.0), (100.0, 100.0)));
    }

    #[test]
    fn line_split_at_end_is_unsplit() {
        // A crossing exactly at t = 1 is outside the half-open split
        // interval, so the segment comes back whole.
        let line = Line::new((0.0, 0.0), (100.0, 100.0));
        let parts = line.split_at_coord(100.0, Axis::Vertical);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], line);
    }

    #[test]
    fn line_split_at_start() {
        // t = 0 is inside the interval; the leading piece is degenerate.
        let line = Line::new((0.0, 0.0), (100.0, 100.0));
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let parts = line.split_at_coord(0.0, axis);
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0], Line::new((0.0, 0.0), (0.0, 0.0)));
            assert_eq!(parts[1], line);
        }
    }

    #[test]
    fn line_split_parallel_is_unsplit() {
        // A horizontal line never crosses a y threshold.
        let line = Line::new((0.0, 0.0), (100.0, 0.0));
        let parts = line.split_at_coord(5.0, Axis::Vertical);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], line);
    }

    #[test]
    fn line_split_outside_is_unsplit() {
        let line = Line::new((0.0, 0.0), (100.0, 100.0));
        assert_eq!(line.split_at_coord(150.0, Axis::Horizontal).len(), 1);
        assert_eq!(line.split_at_coord(-1.0, Axis::Vertical).len(), 1);
    }

    #[test]
    fn line_bounding_box() {
        let line = Line::new((3.0, 7.0), (-2.0, 5.0));
        assert_eq!(line.bounding_box(), Rect::new(-2.0, 5.0, 3.0, 7.0));
    }

    #[test]
    fn line_subsegment() {
        let line = Line::new((0.0, 0.0), (10.0, 20.0));
        let sub = line.subsegment(0.25..0.75);
        assert_eq!(sub, Line::new((2.5, 5.0), (7.5, 15.0)));
        let (left, right) = line.subdivide();
        assert_eq!(left.p1, right.p0);
        assert_eq!(left.p1, Point::new(5.0, 10.0));
    }
}
