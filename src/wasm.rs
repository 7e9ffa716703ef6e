use crate::bounds::BoundingBox;
use crate::tessellation::Tessellation;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Bounding Box ---

/// Axis-aligned rectangle bounding the diagram.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D { min_x, min_y, max_x, max_y }
    }
}

impl From<BoundingBox2D> for BoundingBox {
    fn from(b: BoundingBox2D) -> Self {
        BoundingBox::from_extents(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

// --- Tessellation ---

/// A 2D Voronoi tessellation. Coordinates cross the boundary as flat arrays.
#[wasm_bindgen(js_name = Tessellation2D)]
pub struct Tessellation2D {
    inner: Tessellation,
}

#[wasm_bindgen(js_class = Tessellation2D)]
impl Tessellation2D {
    #[wasm_bindgen(constructor)]
    pub fn new(bounds: BoundingBox2D) -> Result<Tessellation2D, JsError> {
        Ok(Tessellation2D { inner: Tessellation::new(bounds.into())? })
    }

    /// Sets generators from a flat `[x, y, x, y, ...]` array.
    pub fn set_generators(&mut self, generators: &[f64]) -> Result<(), JsError> {
        self.inner.set_generators(generators)?;
        Ok(())
    }

    pub fn random_generators(&mut self, count: usize) { self.inner.random_generators(count); }

    pub fn calculate(&mut self) -> Result<(), JsError> {
        self.inner.calculate()?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn count_generators(&self) -> usize { self.inner.count_sites() }
    #[wasm_bindgen(getter)]
    pub fn count_edges(&self) -> usize { self.inner.count_edges() }
    #[wasm_bindgen(getter)]
    pub fn generators(&self) -> Vec<f64> { self.inner.generators().to_vec() }

    /// All edges as `[x1, y1, x2, y2, ...]`.
    #[wasm_bindgen(getter)]
    pub fn edges(&self) -> Vec<f64> {
        self.inner
            .edges()
            .iter()
            .flat_map(|e| [e.start().x, e.start().y, e.end().x, e.end().y])
            .collect()
    }

    /// Site indices of all edges as `[left, right, left, right, ...]`.
    #[wasm_bindgen(getter)]
    pub fn edge_sites(&self) -> Vec<u32> {
        self.inner
            .edges()
            .iter()
            .flat_map(|e| e.sites().map(|s| s as u32))
            .collect()
    }

    /// Vertices of the cell of a site as `[x, y, x, y, ...]`, counter-clockwise.
    pub fn site_points(&self, index: usize) -> Vec<f64> {
        self.inner
            .site(index)
            .map(|s| s.points().iter().flat_map(|p| [p.x, p.y]).collect())
            .unwrap_or_default()
    }

    /// Edge indices of the cell of a site.
    pub fn site_cell(&self, index: usize) -> Vec<u32> {
        self.inner
            .site(index)
            .map(|s| s.cell().iter().map(|&i| i as u32).collect())
            .unwrap_or_default()
    }
}
