//! Error type for tessellation input validation.

use thiserror::Error;

/// Errors reported before the sweep starts.
///
/// Degenerate but well-formed input (no sites, a single site, coincident sites, sites
/// outside the bounds) is not an error: it produces empty cells.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TessellationError {
    /// The bounding box is empty, inverted or not finite.
    #[error("invalid bounds [{min_x}, {max_x}] x [{min_y}, {max_y}]: extents must be finite and positive")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    /// A site has a NaN or infinite coordinate.
    #[error("site {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteSite { index: usize, x: f64, y: f64 },
    /// A flat generator slice does not hold whole `[x, y]` pairs.
    #[error("generator slice of length {len} does not hold whole [x, y] pairs")]
    MalformedGenerators { len: usize },
}
