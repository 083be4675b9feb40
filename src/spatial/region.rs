//! Half-open integer rectangles used for sampling and drawing

use std::ops::Range;

/// Rectangle covering `[x0, x1) × [y0, y1)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge (inclusive)
    pub x0: u32,
    /// Top edge (inclusive)
    pub y0: u32,
    /// Right edge (exclusive)
    pub x1: u32,
    /// Bottom edge (exclusive)
    pub y1: u32,
}

impl Region {
    /// Create a region, swapping edges given in reverse order
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal extent
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Vertical extent
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Column indices covered by the region
    pub const fn columns(&self) -> Range<u32> {
        self.x0..self.x1
    }

    /// Row indices covered by the region
    pub const fn rows(&self) -> Range<u32> {
        self.y0..self.y1
    }

    /// Move the region back inside a `width × height` image
    ///
    /// An axis whose far edge overshoots is shifted toward the origin so it
    /// ends at the image edge, keeping its span when the image is large
    /// enough. The near edge never goes below zero, so the span shrinks only
    /// when the image itself is smaller than the region.
    #[must_use]
    pub const fn clamp_to(&self, width: u32, height: u32) -> Self {
        let (x0, x1) = clamp_span(self.x0, self.x1, width);
        let (y0, y1) = clamp_span(self.y0, self.y1, height);
        Self { x0, y0, x1, y1 }
    }
}

const fn clamp_span(start: u32, end: u32, limit: u32) -> (u32, u32) {
    if end <= limit {
        return (start, end);
    }
    let span = end - start;
    (limit.saturating_sub(span), limit)
}
