//! Vertex/loop index model built from polygon input.

use crate::polygon::input::InputPolygon;
use crate::primitives::Point2;
use num_traits::Float;

/// A vertex in the topological model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<F> {
    /// Position in the plane.
    pub pos: Point2<F>,
    /// True for vertices introduced at intersection points rather than
    /// taken from an input loop. Vertices built by [`make_topo`] carry
    /// `false`.
    pub is_intersection: bool,
}

/// One closed loop, as a cyclic sequence of indices into the vertex array.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopTopo {
    /// Indices into [`PolygonTopo::verts`], in loop order.
    pub vertices: Vec<usize>,
    /// True for hole loops, false for the outer boundary.
    pub is_hole: bool,
}

/// The topological model of one polygon: a flat vertex array plus its loops.
///
/// Vertices are not shared across loops; each loop owns a fresh run of
/// indices, which keeps cyclic traversal trivial. Loop 0 is the outer
/// boundary, positive loop ids are holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonTopo<F> {
    /// All vertices of all loops.
    pub verts: Vec<Vertex<F>>,
    /// The loops, outer first.
    pub loops: Vec<LoopTopo>,
}

/// One directed edge of a loop, by vertex index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEdge {
    /// Index of the owning loop (0 = outer).
    pub loop_id: usize,
    /// Start vertex index.
    pub v_start: usize,
    /// End vertex index.
    pub v_end: usize,
    /// Provenance: true if the edge belongs to the first polygon of the
    /// operation.
    pub from_a: bool,
}

/// Builds the topological model for a polygon.
///
/// The outer loop is walked first, then each hole. A loop whose last point
/// lies within `eps_close` (Euclidean) of its first drops the duplicate
/// trailing point. Loops with fewer than three remaining points are
/// rejected silently and contribute nothing.
///
/// Loop winding is not validated; containment tests downstream are
/// parity-based and do not depend on it.
pub fn make_topo<F: Float>(poly: &InputPolygon<F>, eps_close: F) -> PolygonTopo<F> {
    let mut topo = PolygonTopo {
        verts: Vec::new(),
        loops: Vec::new(),
    };
    append_loop(&mut topo, &poly.outer, false, eps_close);
    for hole in &poly.holes {
        append_loop(&mut topo, hole, true, eps_close);
    }
    topo
}

fn append_loop<F: Float>(
    topo: &mut PolygonTopo<F>,
    pts: &[Point2<F>],
    is_hole: bool,
    eps_close: F,
) {
    let mut n = pts.len();
    if n >= 2 && pts[0].distance_squared(pts[n - 1]) < eps_close * eps_close {
        n -= 1;
    }
    if n < 3 {
        return;
    }
    let mut vertices = Vec::with_capacity(n);
    for &pt in &pts[..n] {
        vertices.push(topo.verts.len());
        topo.verts.push(Vertex {
            pos: pt,
            is_intersection: false,
        });
    }
    topo.loops.push(LoopTopo { vertices, is_hole });
}

/// Walks every loop cyclically and emits one [`RawEdge`] per loop point.
pub fn build_raw_edges<F: Float>(topo: &PolygonTopo<F>, from_a: bool) -> Vec<RawEdge> {
    let mut edges = Vec::new();
    for (loop_id, lp) in topo.loops.iter().enumerate() {
        let lv = &lp.vertices;
        let n = lv.len();
        if n < 2 {
            continue;
        }
        for i in 0..n {
            edges.push(RawEdge {
                loop_id,
                v_start: lv[i],
                v_end: lv[(i + 1) % n],
                from_a,
            });
        }
    }
    edges
}
