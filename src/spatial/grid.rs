//! Mosaic grid geometry in destination (scaled) and source space
//!
//! The grid walks the scaled image with a stride of one block and runs up to
//! one block past the far edges, so partially covered edge strips still get a
//! tile. Each destination origin maps back to source space by dividing by the
//! scale and rounding; that rounded source origin is the cell's key.

use crate::spatial::Region;
use image::RgbaImage;

/// One block of the mosaic grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Where the tile is drawn in the output frame (may overshoot the frame)
    pub destination: Region,
    /// Source-space region whose color the block represents
    pub sample: Region,
    /// Source-space top-left corner identifying the cell
    pub key: [u32; 2],
}

/// Grid layout for one source image at a given block size and scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MosaicGrid {
    width: u32,
    height: u32,
    block_size: u32,
    scale: f64,
}

impl MosaicGrid {
    /// Lay out a grid over a `source_width × source_height` image
    ///
    /// A zero block size is treated as one pixel.
    pub fn new(source_width: u32, source_height: u32, block_size: u32, scale: f64) -> Self {
        Self {
            width: scale_coordinate(source_width, scale),
            height: scale_coordinate(source_height, scale),
            block_size: block_size.max(1),
            scale,
        }
    }

    /// Lay out a grid over a decoded image
    pub fn for_image(image: &RgbaImage, block_size: u32, scale: f64) -> Self {
        Self::new(image.width(), image.height(), block_size, scale)
    }

    /// Width of the output frame
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the output frame
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of a block in output pixels
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Geometry of the block whose destination origin is `(x, y)`
    pub fn cell_at(&self, x: u32, y: u32) -> GridCell {
        let far_x = x.saturating_add(self.block_size);
        let far_y = y.saturating_add(self.block_size);
        let key = [
            unscale_coordinate(x, self.scale),
            unscale_coordinate(y, self.scale),
        ];

        GridCell {
            destination: Region::new(x, y, far_x, far_y),
            sample: Region::new(
                key[0],
                key[1],
                unscale_coordinate(far_x, self.scale),
                unscale_coordinate(far_y, self.scale),
            ),
            key,
        }
    }

    /// All cells in row-major order, including the overshooting last row and column
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let step = self.block_size as usize;
        let rows = 0..self.height.saturating_add(self.block_size);
        rows.step_by(step).flat_map(move |y| {
            (0..self.width.saturating_add(self.block_size))
                .step_by(step)
                .map(move |x| self.cell_at(x, y))
        })
    }

    /// Number of cells visited by [`Self::cells`]
    pub const fn cell_count(&self) -> usize {
        let columns = self.width.div_ceil(self.block_size) + 1;
        let rows = self.height.div_ceil(self.block_size) + 1;
        columns as usize * rows as usize
    }
}

/// Map a source coordinate into output space
pub fn scale_coordinate(value: u32, scale: f64) -> u32 {
    (f64::from(value) * scale).round() as u32
}

/// Map an output coordinate back into source space
pub fn unscale_coordinate(value: u32, scale: f64) -> u32 {
    (f64::from(value) / scale).round() as u32
}
