use crate::geometry::Point;

/// A finite Voronoi edge inside the bounding box.
///
/// The edge separates the cells of two sites, referenced by their index in the input. Its
/// orientation is such that `left_site` lies on the left when walking from `start` to `end`
/// (with `y` pointing up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    start: Point,
    end: Point,
    left: usize,
    right: usize,
}

impl Edge {
    pub(crate) fn new(start: Point, end: Point, left: usize, right: usize) -> Self {
        Self {
            start,
            end,
            left,
            right,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Indices of the two sites separated by this edge, `[left, right]`.
    pub fn sites(&self) -> [usize; 2] {
        [self.left, self.right]
    }

    pub fn left_site(&self) -> usize {
        self.left
    }

    pub fn right_site(&self) -> usize {
        self.right
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Returns true if the edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: Point, b: Point, tolerance: f64) -> bool {
        (self.start.approx_eq(&a, tolerance) && self.end.approx_eq(&b, tolerance))
            || (self.start.approx_eq(&b, tolerance) && self.end.approx_eq(&a, tolerance))
    }

    pub fn touches_site(&self, site: usize) -> bool {
        self.left == site || self.right == site
    }

    /// The site across this edge from `site`, or `None` if `site` is not one of its sites.
    pub fn other_site(&self, site: usize) -> Option<usize> {
        if site == self.left {
            Some(self.right)
        } else if site == self.right {
            Some(self.left)
        } else {
            None
        }
    }
}
