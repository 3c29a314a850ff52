//! Polygon types, topology, subdivision, and Boolean classification.
//!
//! The pipeline runs in three stages: [`make_topo`] turns loop data into an
//! indexed vertex/loop model, [`atomic_segments`] cuts every edge at every
//! intersection event, and [`boolean_segments`] filters the atomic segments
//! through one operation's keep/drop rule.
//!
//! # Example
//!
//! ```
//! use polybool2d::polygon::{intersection_segments, InputPolygon};
//! use polybool2d::Point2;
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
//! // The overlap is the unit square [1,2]x[1,2]: four boundary segments.
//! let segments = intersection_segments(&a, &b);
//! assert_eq!(segments.len(), 4);
//! ```

mod boolean;
mod classify;
mod input;
mod subdivide;
mod topology;

pub use boolean::{
    boolean_segments, difference_segments, intersection_segments, prepare, prepare_with,
    union_segments, BooleanOp, Polyline, Prepared,
};
pub use classify::point_in_loop;
pub use input::InputPolygon;
pub use subdivide::{atomic_segments, AtomicSegment};
pub use topology::{build_raw_edges, make_topo, LoopTopo, PolygonTopo, RawEdge, Vertex};
