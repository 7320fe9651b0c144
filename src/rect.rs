//! A rectangle.

use crate::Point;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// The bounding rectangle of a non-empty set of points.
    ///
    /// ```
    /// use beztools::{Point, Rect};
    ///
    /// let pts = [Point::new(2., 3.), Point::new(-1., 5.), Point::new(0., 0.)];
    /// assert_eq!(Rect::of_points(&pts), Rect::new(-1., 0., 2., 5.));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty; an empty set has no bounding rectangle,
    /// and passing one is a caller contract violation.
    pub fn of_points(points: &[Point]) -> Rect {
        assert!(!points.is_empty(), "bounding rect of an empty point set");
        let p0 = points[0];
        points[1..]
            .iter()
            .fold(Rect::new(p0.x, p0.y, p0.x, p0.y), |r, &p| r.union_pt(p))
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles. Thus, a
    /// succession of `union_pt` operations on a series of points yields their
    /// enclosing rectangle.
    ///
    /// Results are valid only if width and height are non-negative.
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Whether the point lies in this rectangle (closed boundary).
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }
}
