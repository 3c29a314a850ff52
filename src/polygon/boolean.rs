//! Boolean operations over a pair of polygons.
//!
//! [`prepare`] builds both topologies and the shared atomic-segment list
//! once; each operation then filters that list through its keep/drop rule
//! and returns the kept segments as two-point polylines. No loop
//! re-stitching is performed.

use crate::polygon::classify::coincident_opposite;
use crate::polygon::input::InputPolygon;
use crate::polygon::subdivide::{atomic_segments, AtomicSegment};
use crate::polygon::topology::{make_topo, PolygonTopo};
use crate::primitives::Point2;
use num_traits::Float;

/// A polyline, as an ordered list of points. Boolean results consist of
/// two-point polylines only.
pub type Polyline<F> = Vec<Point2<F>>;

/// The four supported Boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// A ∪ B.
    Union,
    /// A ∩ B.
    Intersection,
    /// A − B.
    AMinusB,
    /// B − A.
    BMinusA,
}

/// Topologies and atomic segments shared by all four operations on one
/// polygon pair.
#[derive(Debug, Clone)]
pub struct Prepared<F> {
    /// Topology of the first polygon.
    pub topo_a: PolygonTopo<F>,
    /// Topology of the second polygon.
    pub topo_b: PolygonTopo<F>,
    /// All atomic segments of both polygons.
    pub atoms: Vec<AtomicSegment<F>>,
}

/// Builds the shared context for a polygon pair with default tolerances:
/// geometric tolerance 1e-3, parameter tolerance 1e-9, loop-closure
/// tolerance 1e-9.
pub fn prepare<F: Float>(poly_a: &InputPolygon<F>, poly_b: &InputPolygon<F>) -> Prepared<F> {
    prepare_with(
        poly_a,
        poly_b,
        F::from(1e-3).unwrap(),
        F::from(1e-9).unwrap(),
        F::from(1e-9).unwrap(),
    )
}

/// Builds the shared context for a polygon pair with explicit tolerances.
///
/// `eps_geom` governs the segment intersection kernel, `eps_param` the
/// parameter-space dedup and the minimum atomic-segment span, `eps_close`
/// the loop-closure dedup when building topology.
pub fn prepare_with<F: Float>(
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
    eps_geom: F,
    eps_param: F,
    eps_close: F,
) -> Prepared<F> {
    let topo_a = make_topo(poly_a, eps_close);
    let topo_b = make_topo(poly_b, eps_close);
    let atoms = atomic_segments(&topo_a, &topo_b, eps_geom, eps_param);
    Prepared {
        topo_a,
        topo_b,
        atoms,
    }
}

/// Decides whether one atomic segment belongs to the boundary of the
/// operation result.
///
/// Coincident segments are resolved by which side of the shared boundary
/// each polygon's material lies on; the surviving same-direction copy is
/// always taken from A so the result never carries a duplicate. For
/// everything else the segment midpoint is tested against both polygons,
/// with the containment sense flipped for segments that come from a hole
/// loop: a hole boundary's material side is the outside of that loop.
fn keep_segment<F: Float>(
    seg: &AtomicSegment<F>,
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
    op: BooleanOp,
) -> bool {
    if seg.coincident_with_other {
        let opposite = coincident_opposite(seg, poly_a, poly_b);
        return match op {
            BooleanOp::Union | BooleanOp::Intersection => !opposite && seg.from_a,
            BooleanOp::AMinusB => opposite && seg.from_a,
            BooleanOp::BMinusA => opposite && !seg.from_a,
        };
    }

    let mid = seg.midpoint();
    let in_a = poly_a.contains(mid);
    let in_b = poly_b.contains(mid);
    let hole = seg.from_hole_loop();

    match op {
        BooleanOp::Union => {
            if seg.from_a {
                !in_b
            } else {
                !in_a
            }
        }
        BooleanOp::Intersection => {
            if seg.from_a {
                in_b
            } else {
                in_a
            }
        }
        BooleanOp::AMinusB => match (seg.from_a, hole) {
            (true, true) => !in_b,
            (true, false) => in_a && !in_b,
            (false, true) => in_a && !in_b,
            (false, false) => in_a && in_b,
        },
        BooleanOp::BMinusA => match (seg.from_a, hole) {
            (false, true) => !in_a,
            (false, false) => in_b && !in_a,
            (true, true) => in_b && !in_a,
            (true, false) => in_a && in_b,
        },
    }
}

/// Filters the prepared atomic segments through one operation's keep rule.
///
/// `poly_a` and `poly_b` must be the polygons the context was prepared
/// from. Each kept segment is returned as a two-point polyline; the order
/// follows the atomic-segment list and is stable within a run.
pub fn boolean_segments<F: Float>(
    prep: &Prepared<F>,
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
    op: BooleanOp,
) -> Vec<Polyline<F>> {
    prep.atoms
        .iter()
        .filter(|seg| keep_segment(seg, poly_a, poly_b, op))
        .map(|seg| vec![seg.p0, seg.p1])
        .collect()
}

/// Computes the boundary segments of A ∪ B with default tolerances.
pub fn union_segments<F: Float>(
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
) -> Vec<Polyline<F>> {
    let prep = prepare(poly_a, poly_b);
    boolean_segments(&prep, poly_a, poly_b, BooleanOp::Union)
}

/// Computes the boundary segments of A ∩ B with default tolerances.
pub fn intersection_segments<F: Float>(
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
) -> Vec<Polyline<F>> {
    let prep = prepare(poly_a, poly_b);
    boolean_segments(&prep, poly_a, poly_b, BooleanOp::Intersection)
}

/// Computes the boundary segments of A − B with default tolerances.
///
/// Swap the arguments for B − A.
pub fn difference_segments<F: Float>(
    poly_a: &InputPolygon<F>,
    poly_b: &InputPolygon<F>,
) -> Vec<Polyline<F>> {
    let prep = prepare(poly_a, poly_b);
    boolean_segments(&prep, poly_a, poly_b, BooleanOp::AMinusB)
}
