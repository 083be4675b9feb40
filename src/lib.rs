//! Animated emoji mosaics built from nearest-color tile matching
//!
//! A source image is split into a grid of blocks, each block's RMS color is
//! matched against a k-d tree of tile colors, and every output frame picks one
//! of the nearest tiles per block at random so the mosaic shimmers when animated.

#![forbid(unsafe_code)]

/// Color averaging and palette quantization
pub mod color;
/// Input/output adapters, configuration and error handling
pub mod io;
/// Tile catalog, planning, frame rendering and pipeline orchestration
pub mod mosaic;
/// Regions, grid geometry and the nearest-color index
pub mod spatial;

pub use io::error::{MosaicError, Result};
pub use mosaic::pipeline::{MosaicConfig, generate_mosaic};
