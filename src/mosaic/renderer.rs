//! Frame rendering from a similarity map
//!
//! Frames are independent: each worker owns its output raster and its random
//! source, and only reads the shared similarity map and catalog.

use crate::color::palette::quantize_frame;
use crate::io::progress::FrameProgress;
use crate::mosaic::catalog::TileCatalog;
use crate::mosaic::planner::SimilarityMap;
use crate::spatial::MosaicGrid;
use image::{RgbaImage, imageops};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

/// Render one palette-quantized frame
///
/// Every cell with candidates receives one of them, chosen with `rng`, copied
/// over the destination without blending and clipped to the frame. Cells
/// without candidates stay transparent.
pub fn render_frame<R: Rng + ?Sized>(
    map: &SimilarityMap,
    catalog: &TileCatalog,
    grid: &MosaicGrid,
    rng: &mut R,
) -> RgbaImage {
    let mut frame = RgbaImage::new(grid.width(), grid.height());

    for cell in grid.cells() {
        let Some(tile) = map.pick(cell.key, rng).and_then(|id| catalog.get(id)) else {
            continue;
        };
        imageops::replace(
            &mut frame,
            tile.image(),
            i64::from(cell.destination.x0),
            i64::from(cell.destination.y0),
        );
    }

    quantize_frame(&mut frame);
    frame
}

/// Render `frame_count` frames in parallel, returned in frame order
#[tracing::instrument(skip(map, catalog, grid, progress))]
pub fn render_frames(
    map: &SimilarityMap,
    catalog: &TileCatalog,
    grid: &MosaicGrid,
    frame_count: usize,
    seed: Option<u64>,
    progress: &FrameProgress,
) -> Vec<RgbaImage> {
    (0..frame_count)
        .into_par_iter()
        .map(|frame| {
            let mut rng = frame_rng(seed, frame);
            let image = render_frame(map, catalog, grid, &mut rng);
            progress.frame_done();
            debug!(frame, "frame rendered");
            image
        })
        .collect()
}

/// Random source for one frame worker
///
/// With a seed, frame `i` uses `seed + i` so runs are reproducible; without
/// one, each worker is seeded from the thread-local generator.
pub fn frame_rng(seed: Option<u64>, frame: usize) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        |seed| StdRng::seed_from_u64(seed.wrapping_add(frame as u64)),
    )
}
