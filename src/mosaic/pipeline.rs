//! End-to-end mosaic generation
//!
//! Tiles are loaded and indexed first, then the source image is decoded,
//! planned once and rendered into the requested number of frames.

use crate::io::animation::{assemble, uniform_delays};
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY_CS, DEFAULT_JITTER,
    DEFAULT_SCALE, MAX_OUTPUT_DIMENSION, MAX_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_image;
use crate::io::progress::FrameProgress;
use crate::mosaic::catalog::TileCatalog;
use crate::mosaic::planner::plan_grid;
use crate::mosaic::renderer::render_frames;
use crate::spatial::{ColorIndex, MosaicGrid};
use image::RgbaImage;
use std::path::PathBuf;
use tracing::info;

/// Everything a single generation run needs
#[derive(Clone, Debug, PartialEq)]
pub struct MosaicConfig {
    /// Source image path
    pub source: PathBuf,
    /// Directory of tile images
    pub tiles: PathBuf,
    /// Block and tile edge in output pixels, `1..=MAX_TILE_SIZE`
    pub block_size: u32,
    /// Output scale relative to the source, strictly positive
    pub scale: f64,
    /// Number of animation frames
    pub frame_count: usize,
    /// Nearest tiles considered per block
    pub jitter: usize,
    /// Delay between frames in centiseconds
    pub frame_delay: u32,
    /// Seed for reproducible tile choices
    pub seed: Option<u64>,
    /// Draw a progress bar while rendering
    pub show_progress: bool,
}

impl MosaicConfig {
    /// Configuration with default rendering parameters
    pub fn new(source: impl Into<PathBuf>, tiles: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            tiles: tiles.into(),
            block_size: DEFAULT_BLOCK_SIZE,
            scale: DEFAULT_SCALE,
            frame_count: DEFAULT_FRAME_COUNT,
            jitter: DEFAULT_JITTER,
            frame_delay: DEFAULT_FRAME_DELAY_CS,
            seed: None,
            show_progress: false,
        }
    }

    /// Check parameter ranges before any work begins
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is out of range
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 || self.block_size > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &format!("must be between 1 and {MAX_TILE_SIZE}"),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be a positive number",
            ));
        }
        if self.frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &"must be at least 1",
            ));
        }
        if self.jitter == 0 {
            return Err(invalid_parameter(
                "jitter",
                &self.jitter,
                &"must be at least 1",
            ));
        }
        if self.frame_delay == 0 {
            return Err(invalid_parameter(
                "frame_delay",
                &self.frame_delay,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Generate an animated GIF mosaic as encoded bytes
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is out of range
/// - The tile directory cannot be read or holds no decodable images
/// - The source image cannot be decoded
/// - The scaled output is empty or too large for a GIF
/// - Encoding the animation fails
pub fn generate_mosaic(config: &MosaicConfig) -> Result<Vec<u8>> {
    config.validate()?;

    let catalog = TileCatalog::load(&config.tiles, config.block_size)?;
    let index = ColorIndex::build(catalog.colors());

    info!(source = %config.source.display(), "loading source image");
    let source = load_image(&config.source)?;

    let frames = render_mosaic(config, &catalog, &index, &source)?;
    info!(frames = frames.len(), "encoding animation");
    assemble(frames, &uniform_delays(config.frame_count, config.frame_delay))
}

/// Plan `source` against an indexed catalog and render every frame
///
/// # Errors
///
/// Returns an error if the configuration is out of range, the scaled output
/// is empty or exceeds GIF dimensions, or a color query fails
pub fn render_mosaic(
    config: &MosaicConfig,
    catalog: &TileCatalog,
    index: &ColorIndex,
    source: &RgbaImage,
) -> Result<Vec<RgbaImage>> {
    config.validate()?;

    let grid = MosaicGrid::for_image(source, config.block_size, config.scale);
    check_output_size(&grid, config.scale)?;

    let map = plan_grid(index, source, &grid, config.jitter)?;

    let progress = if config.show_progress {
        FrameProgress::new(config.frame_count)
    } else {
        FrameProgress::hidden(config.frame_count)
    };
    let frames = render_frames(
        &map,
        catalog,
        &grid,
        config.frame_count,
        config.seed,
        &progress,
    );
    progress.finish();

    Ok(frames)
}

fn check_output_size(grid: &MosaicGrid, scale: f64) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("scaled output {width}x{height} is empty"),
        ));
    }
    if width > MAX_OUTPUT_DIMENSION || height > MAX_OUTPUT_DIMENSION {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!(
                "scaled output {width}x{height} exceeds the {MAX_OUTPUT_DIMENSION} pixel GIF limit"
            ),
        ));
    }
    Ok(())
}
