//! Similarity map construction
//!
//! Each grid cell is sampled once from the source image and matched against
//! the color index. The resulting candidate lists are fixed for the run and
//! shared read-only by every frame worker.

use crate::color::average::average_color;
use crate::io::error::Result;
use crate::spatial::{ColorIndex, ColorKey, MosaicGrid, TileRecord};
use image::RgbaImage;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Candidate tiles per grid cell, keyed by the cell's source-space origin
///
/// Cells whose source region is fully transparent have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimilarityMap {
    cells: HashMap<[u32; 2], Vec<usize>>,
}

impl SimilarityMap {
    /// Candidate tile ids for `key`, nearest first
    pub fn candidates(&self, key: [u32; 2]) -> Option<&[usize]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// One candidate for `key` chosen uniformly at random
    ///
    /// Returns `None` when the cell has no entry.
    pub fn pick<R: Rng + ?Sized>(&self, key: [u32; 2], rng: &mut R) -> Option<usize> {
        let candidates = self.cells.get(&key)?;
        if candidates.is_empty() {
            return None;
        }
        candidates.get(rng.random_range(0..candidates.len())).copied()
    }

    /// Number of cells with candidates
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has candidates
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(key, candidates)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = ([u32; 2], &[usize])> {
        self.cells.iter().map(|(&key, ids)| (key, ids.as_slice()))
    }
}

/// Sample `image` on a `block_size` grid at `scale` and record the `jitter`
/// nearest tiles for every visible cell
///
/// # Errors
///
/// Returns an error if a sampled color cannot be used as an index query
pub fn plan(
    index: &ColorIndex,
    image: &RgbaImage,
    block_size: u32,
    scale: f64,
    jitter: usize,
) -> Result<SimilarityMap> {
    plan_grid(index, image, &MosaicGrid::for_image(image, block_size, scale), jitter)
}

/// Build the similarity map for an existing grid layout
///
/// When two destination cells round to the same source key, the later cell
/// in row-major order replaces the earlier one.
///
/// # Errors
///
/// Returns an error if a sampled color cannot be used as an index query
#[tracing::instrument(skip(index, image, grid), fields(width = grid.width(), height = grid.height()))]
pub fn plan_grid(
    index: &ColorIndex,
    image: &RgbaImage,
    grid: &MosaicGrid,
    jitter: usize,
) -> Result<SimilarityMap> {
    let mut cells = HashMap::with_capacity(grid.cell_count());
    let mut transparent = 0usize;

    for cell in grid.cells() {
        let color = average_color(image, cell.sample);
        let [.., alpha] = color.0;
        if alpha == 0 {
            transparent += 1;
            continue;
        }

        let candidates = index
            .nearest(jitter, &ColorKey::from_rgba(color))?
            .into_iter()
            .map(TileRecord::id)
            .collect();
        cells.insert(cell.key, candidates);
    }

    debug!(cells = cells.len(), transparent, "similarity map built");
    Ok(SimilarityMap { cells })
}
