//! Segment-segment intersection with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of a segment intersection test.
///
/// Collinear segments sharing a positive-length sub-interval report the
/// shared portion in the parameter space of both segments; everything else
/// collapses to a single point or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not meet within tolerance.
    None,
    /// Segments meet at a single point.
    Point {
        /// Parameter along the first segment (0 = start, 1 = end).
        t_a: F,
        /// Parameter along the second segment.
        t_b: F,
        /// The intersection point.
        point: Point2<F>,
    },
    /// Collinear segments sharing a sub-interval of positive length.
    Overlap {
        /// Start of the shared interval on the first segment, low to high.
        t_a0: F,
        /// End of the shared interval on the first segment.
        t_a1: F,
        /// Start of the shared interval on the second segment, low to high.
        t_b0: F,
        /// End of the shared interval on the second segment.
        t_b1: F,
    },
}

/// Intersects two closed parameter intervals.
///
/// Either interval may be given in any order; the result is returned low to
/// high. Returns `None` when the intervals do not meet. A shared single
/// value yields a zero-width interval.
#[inline]
pub fn interval_intersection<F: Float>(a0: F, a1: F, b0: F, b1: F) -> Option<(F, F)> {
    let (a_lo, a_hi) = if a0 <= a1 { (a0, a1) } else { (a1, a0) };
    let (b_lo, b_hi) = if b0 <= b1 { (b0, b1) } else { (b1, b0) };
    let lo = a_lo.max(b_lo);
    let hi = a_hi.min(b_hi);
    if hi >= lo {
        Some((lo, hi))
    } else {
        None
    }
}

/// Classifies the intersection of two line segments.
///
/// The decision proceeds in three stages:
///
/// 1. Non-parallel (|r x s| > `eps_geom`): solve for the parameters on each
///    segment; if both land in [-eps_geom, 1 + eps_geom] they are clamped to
///    [0, 1] and reported as a [`SegmentIntersection::Point`]. The clamp
///    absorbs tiny excursions so a touch at an endpoint is reported exactly
///    at that endpoint.
/// 2. Parallel on distinct lines: [`SegmentIntersection::None`].
/// 3. Collinear: each segment's endpoints are projected onto the other's
///    parameter axis and intersected with [0, 1]. An empty interval on
///    either side means no contact; two near-zero-width intervals collapse
///    to a `Point` at the interval midpoints; anything wider is an
///    [`SegmentIntersection::Overlap`] carrying both intervals.
///
/// # Arguments
///
/// * `a`, `b` - The segments to intersect
/// * `eps_geom` - Geometric tolerance, used both for the parallelism test
///   and for the parameter-range clamping
pub fn intersect_segments<F: Float>(
    a: Segment2<F>,
    b: Segment2<F>,
    eps_geom: F,
) -> SegmentIntersection<F> {
    let r = a.direction();
    let s = b.direction();
    let d = b.start - a.start;

    let rxs = r.cross(s);
    if rxs.abs() > eps_geom {
        // Non-parallel: Cramer's rule on a.start + t*r = b.start + u*s.
        let t = d.cross(s) / rxs;
        let u = d.cross(r) / rxs;
        if t >= -eps_geom && t <= F::one() + eps_geom && u >= -eps_geom && u <= F::one() + eps_geom
        {
            let t = t.max(F::zero()).min(F::one());
            let u = u.max(F::zero()).min(F::one());
            return SegmentIntersection::Point {
                t_a: t,
                t_b: u,
                point: a.point_at(t),
            };
        }
        return SegmentIntersection::None;
    }

    if d.cross(r).abs() > eps_geom {
        // Parallel but on distinct lines.
        return SegmentIntersection::None;
    }

    // Collinear: resolve which portion of the shared line each segment
    // contributes, in both parameter spaces.
    let rr = r.dot(r);
    let param_on_a = |p: Point2<F>| -> F {
        if rr < eps_geom {
            F::zero()
        } else {
            (p - a.start).dot(r) / rr
        }
    };
    let (t_a_lo, t_a_hi) = match interval_intersection(
        F::zero(),
        F::one(),
        param_on_a(b.start),
        param_on_a(b.end),
    ) {
        Some(iv) => iv,
        None => return SegmentIntersection::None,
    };

    let ss = s.dot(s);
    let param_on_b = |p: Point2<F>| -> F {
        if ss < eps_geom {
            F::zero()
        } else {
            (p - b.start).dot(s) / ss
        }
    };
    let (t_b_lo, t_b_hi) = match interval_intersection(
        F::zero(),
        F::one(),
        param_on_b(a.start),
        param_on_b(a.end),
    ) {
        Some(iv) => iv,
        None => return SegmentIntersection::None,
    };

    if t_a_hi - t_a_lo <= eps_geom && t_b_hi - t_b_lo <= eps_geom {
        // Contact reduces to a single point, e.g. collinear end-to-end touch.
        let two = F::one() + F::one();
        let t_a = (t_a_lo + t_a_hi) / two;
        let t_b = (t_b_lo + t_b_hi) / two;
        return SegmentIntersection::Point {
            t_a,
            t_b,
            point: a.point_at(t_a),
        };
    }

    SegmentIntersection::Overlap {
        t_a0: t_a_lo,
        t_a1: t_a_hi,
        t_b0: t_b_lo,
        t_b1: t_b_hi,
    }
}
