//! Exact geometric analysis of Bézier path segments.
//!
//! This crate contains the curve mathematics underlying outline-font and
//! vector-graphics processing: tight bounding boxes for line, quadratic and
//! cubic Bézier segments, splitting a segment where it crosses a coordinate
//! threshold, and the closed-form quadratic and cubic root solvers those
//! operations are built on.
//!
//! Everything is a pure function over immutable value types: segments go in,
//! new segments come out, and no state is shared. Results with a small hard
//! upper bound (roots, split pieces, extrema) are returned in
//! stack-allocated [`arrayvec::ArrayVec`]s.
//!
//! # Examples
//!
//! Tight bounds of a quadratic segment:
//! ```
//! use beztools::{ParamCurveExtrema, QuadBez, Rect};
//!
//! let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
//! assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 100.0, 50.0));
//! ```
//!
//! Splitting a cubic where it crosses `y = 50`:
//! ```
//! use beztools::{Axis, CubicBez, ParamCurve};
//!
//! let c = CubicBez::new((0.0, 0.0), (25.0, 100.0), (75.0, 100.0), (100.0, 0.0));
//! let parts = c.split_at_coord(50.0, Axis::Vertical);
//! assert_eq!(parts.len(), 3);
//! // The pieces chain end to start and cover the original curve.
//! assert_eq!(parts[0].end(), parts[1].start());
//! assert!((parts[2].end() - c.end()).hypot() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]

mod axis;
pub mod common;
mod cubicbez;
mod line;
mod param_curve;
mod point;
mod quadbez;
mod rect;
mod segment;
mod vec2;

pub use crate::axis::*;
pub use crate::cubicbez::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::rect::*;
pub use crate::segment::*;
pub use crate::vec2::*;

/// The maximum number of interior extrema a segment can report.
///
/// A cubic's derivative is quadratic on each axis, so at most two roots per
/// axis contribute.
pub const MAX_EXTREMA: usize = 4;
