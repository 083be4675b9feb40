//! Spatial data structures for sampling and color lookup
//!
//! This module contains spatial-related functionality including:
//! - Integer regions and clamping against image bounds
//! - Mosaic grid geometry in source and destination space
//! - The nearest-color index over tile colors

/// Scaled grid geometry shared by planning and rendering
pub mod grid;
/// Nearest-color index over tile average colors
pub mod index;
/// Integer rectangles and bound clamping
pub mod region;

pub use grid::{GridCell, MosaicGrid};
pub use index::{ColorIndex, ColorKey, TileRecord};
pub use region::Region;
