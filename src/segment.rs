//! A tagged union over the segment kinds.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::{
    Axis, CubicBez, Line, ParamCurve, ParamCurveExtrema, Point, QuadBez, MAX_EXTREMA,
};

/// A single Bézier path segment of any kind.
///
/// This is the entry point for callers operating on heterogeneous segment
/// sequences; each operation dispatches to the concrete segment type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl Segment {
    /// Split the segment where it crosses the coordinate `value` on the
    /// given axis.
    ///
    /// Same semantics as the concrete `split_at_coord` methods: crossings in
    /// `[0, 1)`, original segment returned unsplit when there are none, and
    /// the pieces concatenated in order exactly cover the original.
    pub fn split_at_coord(&self, value: f64, axis: Axis) -> ArrayVec<Segment, 4> {
        let mut result = ArrayVec::new();
        match self {
            Segment::Line(line) => {
                result.extend(line.split_at_coord(value, axis).into_iter().map(Segment::Line));
            }
            Segment::Quad(quad) => {
                result.extend(quad.split_at_coord(value, axis).into_iter().map(Segment::Quad));
            }
            Segment::Cubic(cubic) => {
                result.extend(
                    cubic
                        .split_at_coord(value, axis)
                        .into_iter()
                        .map(Segment::Cubic),
                );
            }
        }
        result
    }
}

impl ParamCurve for Segment {
    fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Quad(quad) => quad.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn subsegment(&self, range: Range<f64>) -> Segment {
        match self {
            Segment::Line(line) => Segment::Line(line.subsegment(range)),
            Segment::Quad(quad) => Segment::Quad(quad.subsegment(range)),
            Segment::Cubic(cubic) => Segment::Cubic(cubic.subsegment(range)),
        }
    }

    fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.start(),
            Segment::Quad(quad) => quad.start(),
            Segment::Cubic(cubic) => cubic.start(),
        }
    }

    fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.end(),
            Segment::Quad(quad) => quad.end(),
            Segment::Cubic(cubic) => cubic.end(),
        }
    }
}

impl ParamCurveExtrema for Segment {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        match self {
            Segment::Line(line) => line.extrema(),
            Segment::Quad(quad) => quad.extrema(),
            Segment::Cubic(cubic) => cubic.extrema(),
        }
    }
}

impl From<Line> for Segment {
    #[inline]
    fn from(line: Line) -> Segment {
        Segment::Line(line)
    }
}

impl From<QuadBez> for Segment {
    #[inline]
    fn from(quad: QuadBez) -> Segment {
        Segment::Quad(quad)
    }
}

impl From<CubicBez> for Segment {
    #[inline]
    fn from(cubic: CubicBez) -> Segment {
        Segment::Cubic(cubic)
    }
}
