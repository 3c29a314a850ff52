//! Polygon-with-holes input type.

use crate::polygon::classify::point_in_loop;
use crate::primitives::Point2;
use num_traits::Float;

/// A planar polygon given as an outer boundary loop plus zero or more hole
/// loops.
///
/// Loops are implicitly closed: the last point connects back to the first.
/// A polygon with an empty outer loop is the empty polygon and contains
/// nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputPolygon<F> {
    /// The outer boundary loop.
    pub outer: Vec<Point2<F>>,
    /// Hole loops, each subtracted from the outer region.
    pub holes: Vec<Vec<Point2<F>>>,
}

impl<F: Float> InputPolygon<F> {
    /// Creates a polygon from an outer loop and hole loops.
    #[inline]
    pub fn new(outer: Vec<Point2<F>>, holes: Vec<Vec<Point2<F>>>) -> Self {
        Self { outer, holes }
    }

    /// Creates a polygon with no holes.
    #[inline]
    pub fn from_outer(outer: Vec<Point2<F>>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates the empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            outer: Vec::new(),
            holes: Vec::new(),
        }
    }

    /// Returns true if the polygon has no outer loop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Returns the number of points on the outer loop.
    #[inline]
    pub fn outer_point_count(&self) -> usize {
        self.outer.len()
    }

    /// Removes all loops, leaving the empty polygon.
    pub fn clear(&mut self) {
        self.outer.clear();
        self.holes.clear();
    }

    /// Tests whether a point lies in the polygon's material region: inside
    /// the outer loop and outside every hole loop.
    ///
    /// Points on the outer boundary count as inside; points on a hole
    /// boundary count as outside the material.
    pub fn contains(&self, p: Point2<F>) -> bool {
        let eps = F::from(1e-9).unwrap();
        if !point_in_loop(&self.outer, p, eps) {
            return false;
        }
        !self.holes.iter().any(|h| point_in_loop(h, p, eps))
    }
}
