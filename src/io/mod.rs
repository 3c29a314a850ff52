//! Input utilities for polygon data.

mod loops;

pub use loops::{load_polygon, parse_loops};
