use crate::error::TessellationError;
use crate::geometry::Point;

/// Axis-aligned rectangle that bounds the tessellation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

/// One of the four sides of a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    /// The side facing the minimum or maximum of `axis` (0 for x, 1 for y). There is no
    /// side for any other axis.
    pub(crate) fn from_axis(axis: usize, is_max: bool) -> Option<Side> {
        match (axis, is_max) {
            (0, false) => Some(Side::Left),
            (0, true) => Some(Side::Right),
            (1, false) => Some(Side::Bottom),
            (1, true) => Some(Side::Top),
            _ => None,
        }
    }
}

impl BoundingBox {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_extents(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new([min_x, min_y], [max_x, max_y])
    }

    /// Checks that the box is finite and has a positive extent along both axes.
    pub fn validate(&self) -> Result<(), TessellationError> {
        let finite = self.min.iter().chain(self.max.iter()).all(|v| v.is_finite());
        if !finite || self.min[0] >= self.max[0] || self.min[1] >= self.max[1] {
            return Err(TessellationError::InvalidBounds {
                min_x: self.min[0],
                min_y: self.min[1],
                max_x: self.max[0],
                max_y: self.max[1],
            });
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
        )
    }

    /// Returns true if `p` lies inside the box or on its boundary.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }

    /// Coordinate of `side` along its normal axis.
    pub fn side_coordinate(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.min[0],
            Side::Right => self.max[0],
            Side::Bottom => self.min[1],
            Side::Top => self.max[1],
        }
    }

    /// Moves `p` exactly onto `side`, clamping the other coordinate into the box.
    pub fn snap(&self, p: Point, side: Side) -> Point {
        let c = self.side_coordinate(side);
        match side {
            Side::Left | Side::Right => Point::new(c, p.y.clamp(self.min[1], self.max[1])),
            Side::Bottom | Side::Top => Point::new(p.x.clamp(self.min[0], self.max[0]), c),
        }
    }
}
