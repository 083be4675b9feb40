//! Command-line interface for generating a mosaic GIF from one image

use crate::io::animation::write_animation;
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY_CS, DEFAULT_JITTER,
    DEFAULT_SCALE, DEFAULT_TILE_DIRECTORY, MAX_TILE_SIZE,
};
use crate::io::error::Result;
use crate::io::logging::level_for;
use crate::mosaic::pipeline::{MosaicConfig, generate_mosaic};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "moji")]
#[command(
    author,
    version,
    about = "Generate an animated emoji mosaic GIF from an image"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Input PNG or JPEG image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output GIF path
    #[arg(short, long, value_name = "OUTPUT")]
    pub out: PathBuf,

    /// Directory of tile images
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub emojis: PathBuf,

    /// Block size in output pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BLOCK_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TILE_SIZE))
    )]
    pub pixels: u32,

    /// Output scale relative to the input
    #[arg(short, long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    pub scale: f64,

    /// Number of animation frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT, value_parser = parse_count)]
    pub frames: usize,

    /// Nearest tiles to choose from per block
    #[arg(short, long, default_value_t = DEFAULT_JITTER, value_parser = parse_count)]
    pub jitter: usize,

    /// Delay between frames in centiseconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FRAME_DELAY_CS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub delay: u32,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.verbose, self.quiet)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration described by the arguments
    pub fn config(&self) -> MosaicConfig {
        MosaicConfig {
            block_size: self.pixels,
            scale: self.scale,
            frame_count: self.frames,
            jitter: self.jitter,
            frame_delay: self.delay,
            seed: self.seed,
            show_progress: self.should_show_progress(),
            ..MosaicConfig::new(&self.input, &self.emojis)
        }
    }

    /// Generate the mosaic and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the output cannot be written
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let bytes = generate_mosaic(&self.config())?;
        write_animation(&self.out, &bytes)?;
        info!(
            output = %self.out.display(),
            bytes = bytes.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "mosaic written"
        );
        Ok(())
    }
}

fn parse_scale(value: &str) -> std::result::Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be greater than 0, got {value}"))
    }
}

fn parse_count(value: &str) -> std::result::Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a whole number: {e}"))?;
    if count == 0 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(count)
    }
}
