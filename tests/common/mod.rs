#![allow(dead_code)]

use approx::relative_eq;
use vorosweep::{BorderEdgeGeneration, BoundingBox, Edge, Point, Site, tessellate};

pub const TOLERANCE: f64 = 1e-6;

/// The `[0, 1000] x [0, 1000]` domain used by the scenarios.
pub fn domain() -> BoundingBox {
    BoundingBox::from_extents(0.0, 0.0, 1000.0, 1000.0)
}

pub fn run(points: &[[f64; 2]]) -> (Vec<Site>, Vec<Edge>) {
    run_in(points, &domain())
}

pub fn run_in(points: &[[f64; 2]], bounds: &BoundingBox) -> (Vec<Site>, Vec<Edge>) {
    let mut sites: Vec<Site> = points.iter().map(|&p| Site::from(p)).collect();
    let edges = tessellate(&mut sites, bounds, BorderEdgeGeneration::DoNotMakeBorderEdges)
        .expect("valid input");
    (sites, edges)
}

/// Corners of a regular `n`-gon around the domain centre, starting on the positive x axis.
pub fn regular_polygon(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / n as f64;
            [500.0 + radius * angle.cos(), 500.0 + radius * angle.sin()]
        })
        .collect()
}

/// Quarter turn counter-clockwise about the domain centre.
pub fn rotate(p: [f64; 2]) -> [f64; 2] {
    [1000.0 - p[1], p[0]]
}

pub fn rotate_times(p: [f64; 2], turns: usize) -> [f64; 2] {
    (0..turns).fold(p, |q, _| rotate(q))
}

pub fn pt(p: [f64; 2]) -> Point {
    Point::from(p)
}

pub fn any_edge_between(edges: &[Edge], a: [f64; 2], b: [f64; 2]) -> bool {
    edges.iter().any(|e| e.connects(pt(a), pt(b), TOLERANCE))
}

pub fn sorted_pair(edge: &Edge) -> [usize; 2] {
    let [l, r] = edge.sites();
    [l.min(r), l.max(r)]
}

pub fn assert_edge(edges: &[Edge], a: [f64; 2], b: [f64; 2]) {
    assert!(
        any_edge_between(edges, a, b),
        "no edge between {:?} and {:?} in {:?}",
        a,
        b,
        edges
    );
}

pub fn site_has_point(site: &Site, p: [f64; 2]) -> bool {
    site.has_point(pt(p), TOLERANCE)
}

pub fn site_has_edge(site: &Site, edges: &[Edge], a: [f64; 2], b: [f64; 2]) -> bool {
    site.has_edge(edges, pt(a), pt(b), TOLERANCE)
}

/// Structural checks every diagram must pass.
pub fn assert_consistent(sites: &[Site], edges: &[Edge]) {
    let mut pairs: Vec<[usize; 2]> = edges.iter().map(sorted_pair).collect();
    pairs.sort();
    let total = pairs.len();
    pairs.dedup();
    assert_eq!(total, pairs.len(), "duplicate edge for a site pair");

    for (i, edge) in edges.iter().enumerate() {
        assert!(!edge.start().approx_eq(&edge.end(), vorosweep::EPSILON));
        for s in edge.sites() {
            assert!(sites[s].cell().contains(&i), "edge {} missing from cell {}", i, s);
            assert!(sites[s].has_point(edge.start(), TOLERANCE));
            assert!(sites[s].has_point(edge.end(), TOLERANCE));
        }
    }

    for site in sites {
        let mut distinct: Vec<Point> = Vec::new();
        for e in site.cell_edges(edges) {
            for p in [e.start(), e.end()] {
                if !distinct.iter().any(|q| q.approx_eq(&p, vorosweep::EPSILON)) {
                    distinct.push(p);
                }
            }
        }
        assert_eq!(site.points().len(), distinct.len());
    }
}

/// Every edge lies on the bisector of its two sites and no site is closer to it.
pub fn assert_nearest_sites(sites: &[Site], edges: &[Edge]) {
    for edge in edges {
        let [l, r] = edge.sites();
        let (a, b) = (sites[l].position(), sites[r].position());
        for p in [edge.start(), edge.end(), edge.midpoint()] {
            let (da, db) = (p.distance(a), p.distance(b));
            assert!(
                relative_eq!(da, db, epsilon = TOLERANCE, max_relative = 1e-9),
                "{:?} is not on the bisector of {} and {}",
                p,
                l,
                r
            );
        }
        let m = edge.midpoint();
        let d = m.distance(a);
        for (i, site) in sites.iter().enumerate() {
            assert!(
                m.distance(site.position()) >= d - TOLERANCE,
                "site {} is closer to {:?}",
                i,
                m
            );
        }
    }
}
