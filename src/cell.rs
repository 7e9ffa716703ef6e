use crate::edge::Edge;
use crate::geometry::{EPSILON, Point};
use std::cmp::Ordering;

/// An input site and, once tessellated, its Voronoi cell.
///
/// The cell is stored as handles into the edge list returned by the tessellation, together
/// with the distinct vertices of those edges. Both are ordered counter-clockwise around the
/// site. Without border edges, a cell touching the bounding box is an open chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Site {
    position: Point,
    // Indices into the edge list.
    cell: Vec<usize>,
    points: Vec<Point>,
}

impl Site {
    pub fn new(x: f64, y: f64) -> Site {
        Site {
            position: Point::new(x, y),
            cell: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Handles of the edges bounding this site's cell.
    pub fn cell(&self) -> &[usize] {
        &self.cell
    }

    /// Distinct vertices of the cell.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// True if the site has no cell: it is a duplicate, lies outside the bounds, or is
    /// alone.
    pub fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    pub fn has_point(&self, p: Point, tolerance: f64) -> bool {
        self.points.iter().any(|q| q.approx_eq(&p, tolerance))
    }

    /// Resolves the cell handles against `edges`.
    pub fn cell_edges<'a>(&'a self, edges: &'a [Edge]) -> impl Iterator<Item = &'a Edge> + 'a {
        self.cell.iter().filter_map(move |&i| edges.get(i))
    }

    /// True if the cell contains an edge joining `a` and `b`.
    pub fn has_edge(&self, edges: &[Edge], a: Point, b: Point, tolerance: f64) -> bool {
        self.cell_edges(edges).any(|e| e.connects(a, b, tolerance))
    }

    pub(crate) fn clear(&mut self) {
        self.cell.clear();
        self.points.clear();
    }
}

impl From<Point> for Site {
    fn from(p: Point) -> Site {
        Site::new(p.x, p.y)
    }
}

impl From<[f64; 2]> for Site {
    fn from(p: [f64; 2]) -> Site {
        Site::new(p[0], p[1])
    }
}

fn angle_around(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

fn by_angle(center: Point) -> impl Fn(&Point, &Point) -> Ordering {
    move |a, b| {
        angle_around(center, *a)
            .partial_cmp(&angle_around(center, *b))
            .unwrap_or(Ordering::Equal)
    }
}

/// Fills every site's cell and points from the final edge list.
pub(crate) fn assemble(sites: &mut [Site], edges: &[Edge]) {
    sites.iter_mut().for_each(Site::clear);

    for (i, edge) in edges.iter().enumerate() {
        for s in edge.sites() {
            if let Some(site) = sites.get_mut(s) {
                site.cell.push(i);
            }
        }
    }

    for site in sites.iter_mut().filter(|s| !s.cell.is_empty()) {
        let center = site.position;
        let order = by_angle(center);
        site.cell
            .sort_by(|&a, &b| order(&edges[a].midpoint(), &edges[b].midpoint()));

        let mut points: Vec<Point> = Vec::with_capacity(site.cell.len() + 1);
        for edge in site.cell.iter().map(|&i| &edges[i]) {
            for p in [edge.start(), edge.end()] {
                if !points.iter().any(|q| q.approx_eq(&p, EPSILON)) {
                    points.push(p);
                }
            }
        }
        points.sort_by(&order);
        site.points = points;
    }
}
