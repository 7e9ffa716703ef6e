//! Clipping of sweep edges against the bounding box (Liang–Barsky).
//!
//! A raw edge is the part of the bisector line `P(t) = midpoint + t * dir` between two
//! parameters, either of which may be infinite. Clipping narrows that interval to the box.
//! Ends cut by a side are snapped onto it, so border vertices carry the exact side
//! coordinate. Ends that are Voronoi vertices are kept untouched.

use crate::bounds::{BoundingBox, Side};
use crate::edge::Edge;
use crate::geometry::{self, EPSILON, Point};
use crate::sweep::RawEdge;

#[derive(Clone, Copy, Debug)]
enum Limit {
    Open,
    Vertex(f64, Point),
    Clipped(f64, Side),
}

impl Limit {
    fn param(&self, open: f64) -> f64 {
        match self {
            Limit::Open => open,
            Limit::Vertex(t, _) | Limit::Clipped(t, _) => *t,
        }
    }
}

/// Clips every raw edge, dropping those outside the box or of zero length.
pub(crate) fn clip_edges(raw: &[RawEdge], sites: &[Point], bounds: &BoundingBox) -> Vec<Edge> {
    let edges: Vec<Edge> = raw.iter().filter_map(|e| clip_edge(e, sites, bounds)).collect();
    tracing::debug!(
        raw = raw.len(),
        kept = edges.len(),
        dropped = raw.len() - edges.len(),
        "clipped edges"
    );
    edges
}

pub(crate) fn clip_edge(edge: &RawEdge, sites: &[Point], bounds: &BoundingBox) -> Option<Edge> {
    let a = sites[edge.left];
    let b = sites[edge.right];
    let origin = a.midpoint(b);
    let dir = geometry::bisector_direction(a, b);
    let norm = dir.dot(dir);
    if norm == 0.0 {
        return None;
    }
    let param = |v: Point| (v - origin).dot(dir) / norm;

    let mut lower = edge.start.map_or(Limit::Open, |v| Limit::Vertex(param(v), v));
    let mut upper = edge.end.map_or(Limit::Open, |v| Limit::Vertex(param(v), v));

    let origin_axes: [f64; 2] = origin.into();
    let dir_axes: [f64; 2] = dir.into();
    for axis in 0..2 {
        for is_max in [false, true] {
            let side = Side::from_axis(axis, is_max)?;
            let (p, q) = if is_max {
                (dir_axes[axis], bounds.max[axis] - origin_axes[axis])
            } else {
                (-dir_axes[axis], origin_axes[axis] - bounds.min[axis])
            };
            if p == 0.0 {
                // Parallel to this side.
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > lower.param(f64::NEG_INFINITY) {
                    lower = Limit::Clipped(t, side);
                }
            } else if t < upper.param(f64::INFINITY) {
                upper = Limit::Clipped(t, side);
            }
        }
    }
    if lower.param(f64::NEG_INFINITY) > upper.param(f64::INFINITY) {
        return None;
    }

    let resolve = |limit: Limit| match limit {
        Limit::Open => None,
        Limit::Vertex(_, v) => Some(v),
        Limit::Clipped(t, side) => Some(bounds.snap(origin + dir * t, side)),
    };
    let start = resolve(lower)?;
    let end = resolve(upper)?;
    if start.approx_eq(&end, EPSILON) {
        return None;
    }
    Some(Edge::new(start, end, edge.left, edge.right))
}
