//! Coordinate axes.

/// A coordinate axis in the plane.
///
/// Operations that compare a curve against a single coordinate (splitting at
/// a threshold, selecting one component of a coefficient) take an explicit
/// `Axis` rather than a boolean index: [`Axis::Horizontal`] selects the `x`
/// coordinate and [`Axis::Vertical`] the `y` coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Get the axis perpendicular to this one.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
