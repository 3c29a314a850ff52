//! polybool2d - Boolean operations on planar polygons with holes.
//!
//! Computes union, intersection, and both directional differences of two
//! polygons, each given as an outer loop plus zero or more hole loops. The
//! result is the set of boundary segments of the operation, emitted as
//! two-point polylines; no loop re-stitching is performed.
//!
//! The engine works with floating-point arithmetic under explicit
//! tolerances rather than exact predicates: edges are cut at every
//! intersection event (including collinear overlaps and T-junctions), and
//! each resulting atomic segment is kept or dropped by testing its midpoint
//! against both polygons.
//!
//! # Example
//!
//! ```
//! use polybool2d::{difference_segments, InputPolygon, Point2};
//!
//! let a = InputPolygon::from_outer(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//! let b = InputPolygon::from_outer(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ]);
//!
//! // A minus B is an L-shape with six boundary segments.
//! let segments = difference_segments(&a, &b);
//! assert_eq!(segments.len(), 6);
//! ```

pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::LoadError;
pub use polygon::{
    boolean_segments, difference_segments, intersection_segments, prepare, prepare_with,
    union_segments, AtomicSegment, BooleanOp, InputPolygon, Polyline, Prepared,
};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{intersect_segments, interval_intersection, SegmentIntersection};
