//! Subdivision of polygon edges into atomic segments.
//!
//! Every intersection event between edges, whether within one polygon or
//! across the two, contributes cut parameters to the edges involved. Each
//! edge is then exploded at its cuts, leaving segments whose interiors are
//! free of further intersections.

use crate::polygon::topology::{build_raw_edges, PolygonTopo, RawEdge};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{intersect_segments, SegmentIntersection};
use num_traits::Float;

/// A maximal sub-segment of an original edge whose interior contains no
/// intersection event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicSegment<F> {
    /// First endpoint.
    pub p0: Point2<F>,
    /// Second endpoint.
    pub p1: Point2<F>,
    /// True if the source edge belongs to the first polygon.
    pub from_a: bool,
    /// Loop id of the source edge (0 = outer, positive = hole).
    pub loop_id: usize,
    /// True if the segment lies within a collinear overlap with the other
    /// polygon's boundary.
    pub coincident_with_other: bool,
}

impl<F: Float> AtomicSegment<F> {
    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.p0.midpoint(self.p1)
    }

    /// True if the source edge belongs to a hole loop.
    #[inline]
    pub fn from_hole_loop(&self) -> bool {
        self.loop_id > 0
    }
}

/// Mutable scratch for one edge: the cut parameters collected so far and
/// the parameter intervals on which the edge coincides with the other
/// polygon.
struct EdgeWork<F> {
    edge: RawEdge,
    cut_params: Vec<F>,
    overlaps: Vec<(F, F)>,
}

impl<F: Float> EdgeWork<F> {
    fn new(edge: RawEdge) -> Self {
        Self {
            edge,
            cut_params: vec![F::zero(), F::one()],
            overlaps: Vec::new(),
        }
    }
}

#[inline]
fn edge_points<F: Float>(topo: &PolygonTopo<F>, edge: &RawEdge) -> (Point2<F>, Point2<F>) {
    (topo.verts[edge.v_start].pos, topo.verts[edge.v_end].pos)
}

/// Cuts every edge of one polygon against every other edge of the same
/// polygon, so T-junctions and self-touches already present in the input
/// survive subdivision.
fn inject_self_cuts<F: Float>(topo: &PolygonTopo<F>, work: &mut [EdgeWork<F>], eps_geom: F) {
    let m = work.len();
    for i in 0..m {
        for j in (i + 1)..m {
            let (a0, a1) = edge_points(topo, &work[i].edge);
            let (b0, b1) = edge_points(topo, &work[j].edge);
            match intersect_segments(Segment2::new(a0, a1), Segment2::new(b0, b1), eps_geom) {
                SegmentIntersection::Point { t_a, t_b, .. } => {
                    work[i].cut_params.push(t_a);
                    work[j].cut_params.push(t_b);
                }
                SegmentIntersection::Overlap {
                    t_a0,
                    t_a1,
                    t_b0,
                    t_b1,
                } => {
                    work[i].cut_params.push(t_a0);
                    work[i].cut_params.push(t_a1);
                    work[j].cut_params.push(t_b0);
                    work[j].cut_params.push(t_b1);
                }
                SegmentIntersection::None => {}
            }
        }
    }
}

fn in_overlap<F: Float>(overlaps: &[(F, F)], t_lo: F, t_hi: F, eps_param: F) -> bool {
    overlaps.iter().any(|&(a, b)| {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        t_lo >= a - eps_param && t_hi <= b + eps_param
    })
}

/// Explodes one edge at its collected cut parameters.
///
/// Parameters are sorted and deduplicated under `eps_param`; consecutive
/// pairs spanning at least `eps_param` become atomic segments. A segment is
/// flagged coincident when its parameter span lies within one of the edge's
/// overlap intervals, with `eps_param` slack at both ends.
fn explode<F: Float>(
    work: &EdgeWork<F>,
    topo: &PolygonTopo<F>,
    eps_param: F,
    out: &mut Vec<AtomicSegment<F>>,
) {
    let mut params = work.cut_params.clone();
    params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    params.dedup_by(|a, b| (*a - *b).abs() < eps_param);

    let (p0, p1) = edge_points(topo, &work.edge);
    for pair in params.windows(2) {
        let (t_lo, t_hi) = (pair[0], pair[1]);
        if t_hi - t_lo < eps_param {
            continue;
        }
        out.push(AtomicSegment {
            p0: p0.lerp(p1, t_lo),
            p1: p0.lerp(p1, t_hi),
            from_a: work.edge.from_a,
            loop_id: work.edge.loop_id,
            coincident_with_other: in_overlap(&work.overlaps, t_lo, t_hi, eps_param),
        });
    }
}

/// Computes the full atomic-segment list for a pair of polygons.
///
/// Each edge starts with cuts at {0, 1}. Self cuts are injected within each
/// polygon, then every (A-edge, B-edge) pair is intersected: a point cut
/// lands on both edges, a collinear overlap cuts both edges at the interval
/// ends and records the interval for coincidence marking. Finally every
/// edge is exploded, A's edges first, in loop order, then B's.
///
/// Degenerate input contributes nothing; the result of two empty polygons
/// is empty.
pub fn atomic_segments<F: Float>(
    topo_a: &PolygonTopo<F>,
    topo_b: &PolygonTopo<F>,
    eps_geom: F,
    eps_param: F,
) -> Vec<AtomicSegment<F>> {
    let raw_a = build_raw_edges(topo_a, true);
    let raw_b = build_raw_edges(topo_b, false);
    let mut work_a: Vec<EdgeWork<F>> = raw_a.into_iter().map(EdgeWork::new).collect();
    let mut work_b: Vec<EdgeWork<F>> = raw_b.into_iter().map(EdgeWork::new).collect();

    inject_self_cuts(topo_a, &mut work_a, eps_geom);
    inject_self_cuts(topo_b, &mut work_b, eps_geom);

    for wa in work_a.iter_mut() {
        let (a0, a1) = edge_points(topo_a, &wa.edge);
        for wb in work_b.iter_mut() {
            let (b0, b1) = edge_points(topo_b, &wb.edge);
            match intersect_segments(Segment2::new(a0, a1), Segment2::new(b0, b1), eps_geom) {
                SegmentIntersection::Point { t_a, t_b, .. } => {
                    wa.cut_params.push(t_a);
                    wb.cut_params.push(t_b);
                }
                SegmentIntersection::Overlap {
                    t_a0,
                    t_a1,
                    t_b0,
                    t_b1,
                } => {
                    wa.cut_params.push(t_a0);
                    wa.cut_params.push(t_a1);
                    wa.overlaps.push((t_a0, t_a1));
                    wb.cut_params.push(t_b0);
                    wb.cut_params.push(t_b1);
                    wb.overlaps.push((t_b0, t_b1));
                }
                SegmentIntersection::None => {}
            }
        }
    }

    let mut atoms = Vec::new();
    for w in &work_a {
        explode(w, topo_a, eps_param, &mut atoms);
    }
    for w in &work_b {
        explode(w, topo_b, eps_param, &mut atoms);
    }
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::input::InputPolygon;
    use crate::polygon::topology::make_topo;
    use approx::assert_relative_eq;

    const EPS_GEOM: f64 = 1e-3;
    const EPS_PARAM: f64 = 1e-9;

    fn square(x0: f64, y0: f64, size: f64) -> InputPolygon<f64> {
        InputPolygon::from_outer(vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ])
    }

    fn atoms_for(a: &InputPolygon<f64>, b: &InputPolygon<f64>) -> Vec<AtomicSegment<f64>> {
        let ta = make_topo(a, 1e-9);
        let tb = make_topo(b, 1e-9);
        atomic_segments(&ta, &tb, EPS_GEOM, EPS_PARAM)
    }

    #[test]
    fn test_disjoint_squares_keep_original_edges() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        let atoms = atoms_for(&a, &b);
        assert_eq!(atoms.len(), 8);
        assert!(atoms.iter().all(|s| !s.coincident_with_other));
        assert_eq!(atoms.iter().filter(|s| s.from_a).count(), 4);
        // No edge was cut, so every atom spans a whole edge of length 1.
        for s in &atoms {
            assert_relative_eq!(s.p0.distance(s.p1), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_overlapping_squares_cut_counts() {
        // Corner overlap: each polygon has two edges cut once.
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let atoms = atoms_for(&a, &b);
        assert_eq!(atoms.iter().filter(|s| s.from_a).count(), 6);
        assert_eq!(atoms.iter().filter(|s| !s.from_a).count(), 6);
        assert!(atoms.iter().all(|s| !s.coincident_with_other));
    }

    #[test]
    fn test_t_junction_vertex_cuts_other_edge() {
        // The triangle's apex sits exactly on b's bottom edge.
        let a = InputPolygon::from_outer(vec![
            Point2::new(1.0, -2.0),
            Point2::new(3.0, -2.0),
            Point2::new(2.0, 0.0),
        ]);
        let b = square(0.0, 0.0, 4.0);
        let atoms = atoms_for(&a, &b);

        // b's bottom edge is split at the touch point into two atoms.
        let bottom: Vec<_> = atoms
            .iter()
            .filter(|s| !s.from_a && s.p0.y.abs() < 1e-9 && s.p1.y.abs() < 1e-9)
            .collect();
        assert_eq!(bottom.len(), 2);
        let mut xs: Vec<f64> = bottom
            .iter()
            .flat_map(|s| [s.p0.x, s.p1.x])
            .collect();
        xs.sort_by(|p, q| p.partial_cmp(q).unwrap());
        assert_relative_eq!(xs[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(xs[2], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identical_squares_are_fully_coincident() {
        let a = square(0.0, 0.0, 1.0);
        let atoms = atoms_for(&a, &a.clone());
        assert_eq!(atoms.len(), 8);
        assert!(atoms.iter().all(|s| s.coincident_with_other));
    }

    #[test]
    fn test_partial_edge_overlap_marks_only_shared_portion() {
        // b shares the right half of a's bottom edge.
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, -2.0, 2.0);
        let atoms = atoms_for(&a, &b);

        let a_bottom: Vec<_> = atoms
            .iter()
            .filter(|s| s.from_a && s.p0.y.abs() < 1e-9 && s.p1.y.abs() < 1e-9)
            .collect();
        assert_eq!(a_bottom.len(), 2);
        for s in &a_bottom {
            let lo = s.p0.x.min(s.p1.x);
            if lo < 0.5 {
                assert!(!s.coincident_with_other);
            } else {
                assert!(s.coincident_with_other);
            }
        }
    }

    #[test]
    fn test_self_collinear_hole_edge_cuts_outer() {
        // A hole edge lying along the outer boundary splits the outer edge.
        let mut a = square(0.0, 0.0, 4.0);
        a.holes.push(vec![
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 3.0),
            Point2::new(1.0, 3.0),
            Point2::new(1.0, 1.0),
        ]);
        let b = square(10.0, 10.0, 1.0);
        let atoms = atoms_for(&a, &b);

        // Outer left edge runs x = 0; the collinear hole edge cuts it twice.
        let left: Vec<_> = atoms
            .iter()
            .filter(|s| s.loop_id == 0 && s.p0.x.abs() < 1e-9 && s.p1.x.abs() < 1e-9)
            .collect();
        assert_eq!(left.len(), 3);
        // Cross-polygon coincidence is not involved here.
        assert!(atoms.iter().all(|s| !s.coincident_with_other));
    }

    #[test]
    fn test_empty_inputs() {
        let empty = InputPolygon::empty();
        let a = square(0.0, 0.0, 1.0);
        assert_eq!(atoms_for(&empty, &empty).len(), 0);
        let atoms = atoms_for(&a, &empty);
        assert_eq!(atoms.len(), 4);
        assert!(atoms.iter().all(|s| s.from_a));
    }

    #[test]
    fn test_atoms_meet_only_at_endpoints() {
        // After subdivision no two atoms from different edges cross in
        // their interiors.
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let atoms = atoms_for(&a, &b);
        for (i, s) in atoms.iter().enumerate() {
            for t in atoms.iter().skip(i + 1) {
                match intersect_segments(
                    Segment2::new(s.p0, s.p1),
                    Segment2::new(t.p0, t.p1),
                    EPS_GEOM,
                ) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point { point, .. } => {
                        let at_endpoint = [s.p0, s.p1, t.p0, t.p1]
                            .iter()
                            .any(|e| e.distance(point) < 1e-6);
                        assert!(at_endpoint, "interior crossing between atoms");
                    }
                    SegmentIntersection::Overlap { .. } => {
                        panic!("unexpected overlap between atoms");
                    }
                }
            }
        }
    }
}
