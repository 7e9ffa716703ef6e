//! Planar geometric primitives shared by the sweep and the clipper.
//!
//! All predicates work on `f64` coordinates. Equality of coordinates is decided with the
//! fixed tolerance [`EPSILON`], which absorbs the rounding error of circumcenter
//! computations on inputs of moderate magnitude.

use std::ops::{Add, Mul, Sub};

/// Tolerance used when comparing coordinates.
pub const EPSILON: f64 = 1e-9;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true if both coordinates differ by less than `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the cross product of `self` and `other`.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Direction in which the breakpoint between the arcs of `left` and `right` travels as
/// the sweep line advances towards positive y.
///
/// This is `right - left` rotated a quarter turn counter-clockwise, so it is also the
/// direction vector of the perpendicular bisector of the two sites.
pub(crate) fn bisector_direction(left: Point, right: Point) -> Point {
    Point::new(left.y - right.y, right.x - left.x)
}

/// Center of the circle through `origin`, `p` and `q`, or `None` if they are collinear.
pub(crate) fn circumcenter(origin: Point, p: Point, q: Point) -> Option<Point> {
    let b = p - origin;
    let c = q - origin;
    let d = 2.0 * b.cross(c);
    if d == 0.0 || !d.is_finite() {
        return None;
    }
    let hb = b.dot(b);
    let hc = c.dot(c);
    let center = Point::new(
        (c.y * hb - b.y * hc) / d + origin.x,
        (b.x * hc - c.x * hb) / d + origin.y,
    );
    center.is_finite().then_some(center)
}

/// Returns the circumcenter of the arcs `left`, `middle`, `right` if the two breakpoints
/// around `middle` converge, together with the sweep coordinate at which they meet.
///
/// Nearly collinear triples converge too: their center lies far away, but the collapse can
/// still happen right above the sites.
pub(crate) fn circle_event(left: Point, middle: Point, right: Point) -> Option<(Point, f64)> {
    if (left - middle).cross(right - middle) >= 0.0 {
        return None;
    }
    let center = circumcenter(middle, left, right)?;
    let offset = center - middle;
    let radius = offset.x.hypot(offset.y);
    let bottom = if offset.y < 0.0 {
        // center.y + radius with the cancellation removed
        middle.y + offset.x * offset.x / (radius - offset.y)
    } else {
        center.y + radius
    };
    Some((center, bottom))
}

/// Abscissa of the breakpoint between the arc of `left` and the arc of `right` (in beach
/// line order) when the sweep line is at `directrix`.
///
/// A focus lying on the directrix degenerates its parabola to a vertical ray, in which case
/// the breakpoint is the focus abscissa itself. Two parabolas generally cross twice; `left`
/// left of `right` selects the crossing near their midpoint, the opposite order the far one.
/// Both roots are evaluated without cancellation, so foci a few ulps apart in height still
/// give the right side of the beach line.
pub(crate) fn breakpoint(left: Point, right: Point, directrix: f64) -> f64 {
    let right_offset = right.y - directrix;
    if right_offset == 0.0 {
        return right.x;
    }
    let left_offset = left.y - directrix;
    if left_offset == 0.0 {
        return left.x;
    }
    let dx = left.x - right.x;
    let dy = right.y - left.y;
    if dy == 0.0 {
        return if dx < 0.0 { (left.x + right.x) * 0.5 } else { f64::INFINITY };
    }
    let spread = (left_offset * right_offset).sqrt() * dx.hypot(dy);
    if dx < 0.0 {
        right.x + right_offset * (dx * dx - left_offset * dy) / (right_offset * dx + spread)
    } else {
        right.x + (right_offset * dx - spread) / dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumcenter_right_triangle() {
        let c = circumcenter(
            Point::new(500.0, 500.0),
            Point::new(300.0, 500.0),
            Point::new(500.0, 300.0),
        )
        .unwrap();
        assert!(c.approx_eq(&Point::new(400.0, 400.0), EPSILON));
    }

    #[test]
    fn test_circumcenter_collinear() {
        let c = circumcenter(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_circle_event_converging() {
        // Arc of (0, 0) squeezed between (1, 1) on the left and (4, 0) on the right.
        let (center, bottom) = circle_event(
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
        )
        .unwrap();
        assert!(center.approx_eq(&Point::new(2.0, -1.0), EPSILON));
        assert!((bottom - (-1.0 + 5.0f64.sqrt())).abs() < EPSILON);
    }

    #[test]
    fn test_circle_event_diverging() {
        let event = circle_event(
            Point::new(4.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        );
        assert!(event.is_none());
    }

    #[test]
    fn test_circle_event_nearly_collinear() {
        // The arc of the lowest site is squeezed between two close sites on one row.
        let left = Point::new(595.3770207958421, 415.554163871235);
        let middle = Point::new(896.1993782191371, 415.5541638712325);
        let right = Point::new(595.5255497012797, 415.554163871235);
        let (center, bottom) = circle_event(left, middle, right).unwrap();
        assert!((center.x - 595.4512852485609).abs() < 1e-6);
        assert!(center.y < -1e16);
        assert!((bottom - 415.554163871235).abs() < 1e-9, "{bottom}");
    }

    #[test]
    fn test_breakpoint_vertical_pair() {
        // Parabolas of (0, -2) and (0, 0) at directrix 1 intersect at x = -sqrt(3) and x = sqrt(3).
        let lower = Point::new(0.0, -2.0);
        let upper = Point::new(0.0, 0.0);
        let left = breakpoint(lower, upper, 1.0);
        let right = breakpoint(upper, lower, 1.0);
        assert!((left + 3.0f64.sqrt()).abs() < 1e-12);
        assert!((right - 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_breakpoint_same_height() {
        let x = breakpoint(Point::new(0.0, 0.0), Point::new(4.0, 0.0), 10.0);
        assert!((x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_breakpoint_near_equal_heights() {
        let upper = Point::new(10.36586038104861, 25.00188842378518);
        let lower = Point::new(769.4943900119076, 25.00188842378508);
        let directrix = 906.0051663082716;
        let near = breakpoint(upper, lower, directrix);
        assert!((near - 389.930125196478).abs() < 1e-9, "{near}");
        // The lower focus wraps around the upper one; their other crossing is far left.
        let far = breakpoint(lower, upper, directrix);
        assert!(far < -1e18, "{far}");
    }

    #[test]
    fn test_breakpoint_foci_close_to_directrix() {
        // Both parabolas are needles; the crossings sit between the foci, not at their midpoint.
        let low = Point::new(277.363236323852, 695.8043923359807);
        let high = Point::new(505.5420245895192, 695.8043923359858);
        let directrix = 695.8043923359863;
        assert!((breakpoint(low, high, directrix) - 450.721369434947763).abs() < 1e-9);
        assert!((breakpoint(high, low, directrix) - 611.069077136461130).abs() < 1e-9);
    }

    #[test]
    fn test_breakpoint_degenerate_focus() {
        // A focus on the directrix is a vertical ray.
        let x = breakpoint(Point::new(1.0, 1.0), Point::new(0.0, 0.0), 1.0);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn test_bisector_direction() {
        let d = bisector_direction(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        assert_eq!(d, Point::new(0.0, 2.0));
    }
}
