//! # vorosweep
//!
//! `vorosweep` is a Rust library for planar Voronoi diagrams computed with Fortune's sweep
//! line algorithm, designed to be used in Rust as well as compiled to WebAssembly (WASM).
//! Edges are clipped to a rectangular domain and handed back together with, for every
//! site, the edges and vertices of its cell.
//!
//! ## Features
//!
//! - **Sweep line**: O(n log n) construction with an event queue and a treap beach line.
//! - **Robust input handling**: coincident sites, sites outside the domain, collinear and
//!   co-circular configurations produce a valid diagram instead of an error.
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript.
//! - **Batches**: Independent site sets are tessellated in parallel with `rayon`.
//!
//! ## Example
//!
//! ```
//! use vorosweep::{tessellate, BorderEdgeGeneration, BoundingBox, Point, Site};
//!
//! let bounds = BoundingBox::from_extents(0.0, 0.0, 1000.0, 1000.0);
//! let mut sites = vec![Site::new(500.0, 700.0), Site::new(500.0, 300.0)];
//! let edges = tessellate(&mut sites, &bounds, BorderEdgeGeneration::DoNotMakeBorderEdges)?;
//!
//! assert_eq!(edges.len(), 1);
//! assert!(edges[0].connects(Point::new(0.0, 500.0), Point::new(1000.0, 500.0), 1e-9));
//! assert_eq!(sites[0].points().len(), 2);
//! # Ok::<(), vorosweep::TessellationError>(())
//! ```
//!
//! See `demos/svg.rs` for rendering a diagram with `plotters`.
//!
//! ## Main Interface
//!
//! The entry point is [`tessellate`]. The [`Tessellation`] struct wraps it for callers that
//! hold generators as flat coordinate arrays.

mod beach_line;
mod bounds;
mod cell;
mod clip;
mod edge;
mod error;
mod event_queue;
mod geometry;
mod sweep;
mod tessellation;
mod wasm;

pub use bounds::BoundingBox;
pub use bounds::Side;
pub use cell::Site;
pub use edge::Edge;
pub use error::TessellationError;
pub use geometry::EPSILON;
pub use geometry::Point;
pub use tessellation::BorderEdgeGeneration;
pub use tessellation::Tessellation;
pub use tessellation::tessellate;
pub use tessellation::tessellate_batch;
pub use wasm::BoundingBox2D;
pub use wasm::Tessellation2D;
#[cfg(target_arch = "wasm32")]
pub use wasm::init_threads;
