use crate::bounds::BoundingBox;
use crate::cell::{self, Site};
use crate::clip;
use crate::edge::Edge;
use crate::error::TessellationError;
use crate::geometry::{EPSILON, Point};
use crate::sweep::Sweep;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// How the boundary of the bounding box contributes to the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BorderEdgeGeneration {
    /// Only bisector edges are produced. Cells touching the box stay open along it.
    #[default]
    DoNotMakeBorderEdges,
}

/// Computes the Voronoi diagram of `sites` inside `bounds`.
///
/// Returns the edge list and fills every site's [`Site::cell`] and [`Site::points`]. Sites
/// outside the box and later copies of a coincident site get an empty cell.
///
/// # Errors
///
/// Returns [`TessellationError::InvalidBounds`] for an empty or non-finite box and
/// [`TessellationError::NonFiniteSite`] if a site coordinate is NaN or infinite. The sites are
/// left untouched in both cases.
pub fn tessellate(
    sites: &mut [Site],
    bounds: &BoundingBox,
    mode: BorderEdgeGeneration,
) -> Result<Vec<Edge>, TessellationError> {
    bounds.validate()?;
    if let Some((index, site)) = sites.iter().enumerate().find(|(_, s)| !s.position().is_finite()) {
        return Err(TessellationError::NonFiniteSite {
            index,
            x: site.x(),
            y: site.y(),
        });
    }

    let positions: Vec<Point> = sites.iter().map(Site::position).collect();
    let participants = participants(&positions, bounds);
    tracing::debug!(
        sites = sites.len(),
        participants = participants.len(),
        ?mode,
        "tessellating"
    );

    let raw = Sweep::new(&positions, &participants).run();
    let edges = match mode {
        BorderEdgeGeneration::DoNotMakeBorderEdges => clip::clip_edges(&raw, &positions, bounds),
    };
    cell::assemble(sites, &edges);
    Ok(edges)
}

/// Runs [`tessellate`] on independent site sets in parallel. Results keep the input order.
pub fn tessellate_batch(
    batches: &mut [Vec<Site>],
    bounds: &BoundingBox,
    mode: BorderEdgeGeneration,
) -> Vec<Result<Vec<Edge>, TessellationError>> {
    batches
        .par_iter_mut()
        .map(|sites| tessellate(sites, bounds, mode))
        .collect()
}

/// Indices of the sites taking part in the sweep: inside the box, one per position.
fn participants(positions: &[Point], bounds: &BoundingBox) -> Vec<usize> {
    let mut order: Vec<usize> = (0..positions.len())
        .filter(|&i| bounds.contains(positions[i]))
        .collect();
    let outside = positions.len() - order.len();
    order.sort_by(|&a, &b| {
        let (p, q) = (positions[a], positions[b]);
        p.y.partial_cmp(&q.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal))
            .then(a.cmp(&b))
    });

    let mut kept: Vec<usize> = Vec::with_capacity(order.len());
    for i in order {
        let p = positions[i];
        let duplicate = kept
            .iter()
            .rev()
            .take_while(|&&k| p.y - positions[k].y < EPSILON)
            .any(|&k| positions[k].approx_eq(&p, EPSILON));
        if !duplicate {
            kept.push(i);
        }
    }
    tracing::debug!(
        outside,
        duplicates = positions.len() - outside - kept.len(),
        "filtered sites"
    );
    kept
}

/// A Voronoi tessellation of a set of generators inside a bounding box.
///
/// Generators are stored as a flat `[x, y, x, y, ...]` array, as handed over from
/// JavaScript, and mirrored as [`Site`]s that receive their cells on [`calculate`].
///
/// [`calculate`]: Tessellation::calculate
#[derive(Clone, Debug)]
pub struct Tessellation {
    bounds: BoundingBox,
    mode: BorderEdgeGeneration,
    generators: Vec<f64>,
    sites: Vec<Site>,
    edges: Vec<Edge>,
}

impl Tessellation {
    pub fn new(bounds: BoundingBox) -> Result<Self, TessellationError> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            mode: BorderEdgeGeneration::default(),
            generators: Vec::new(),
            sites: Vec::new(),
            edges: Vec::new(),
        })
    }

    pub fn with_mode(mut self, mode: BorderEdgeGeneration) -> Self {
        self.mode = mode;
        self
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn mode(&self) -> BorderEdgeGeneration {
        self.mode
    }

    /// Replaces all generators. Previously calculated edges are discarded.
    pub fn set_generators(&mut self, generators: &[f64]) -> Result<(), TessellationError> {
        if generators.len() % 2 != 0 {
            return Err(TessellationError::MalformedGenerators {
                len: generators.len(),
            });
        }
        self.generators = generators.to_vec();
        self.sites = generators
            .chunks_exact(2)
            .map(|p| Site::new(p[0], p[1]))
            .collect();
        self.edges.clear();
        Ok(())
    }

    pub fn set_sites(&mut self, sites: Vec<Site>) {
        self.generators = sites.iter().flat_map(|s| [s.x(), s.y()]).collect();
        self.sites = sites;
        self.edges.clear();
    }

    /// Generates `count` random points within the bounds and sets them as generators.
    pub fn random_generators(&mut self, count: usize) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let w = self.bounds.width();
        let h = self.bounds.height();
        let sites = (0..count)
            .map(|_| {
                let x = self.bounds.min[0] + rng.r#gen::<f64>() * w;
                let y = self.bounds.min[1] + rng.r#gen::<f64>() * h;
                Site::new(x, y)
            })
            .collect();
        self.set_sites(sites);
    }

    pub fn calculate(&mut self) -> Result<(), TessellationError> {
        self.edges = tessellate(&mut self.sites, &self.bounds, self.mode)?;
        Ok(())
    }

    pub fn count_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn generators(&self) -> &[f64] {
        &self.generators
    }

    pub fn site(&self, index: usize) -> Option<&Site> {
        self.sites.get(index)
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges of the cell of site `index`. Empty for an unknown index.
    pub fn cell_edges(&self, index: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.sites
            .get(index)
            .into_iter()
            .flat_map(|site| site.cell_edges(&self.edges))
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}
