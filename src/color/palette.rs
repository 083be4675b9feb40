//! Web-safe palette quantization for GIF frames

use crate::io::configuration::TRANSPARENCY_THRESHOLD;
use image::{Rgba, RgbaImage};

// Spacing of the six levels 0x00, 0x33, .., 0xFF of the 6×6×6 color cube
const LEVEL_STEP: u16 = 0x33;

/// Snap one channel to the nearest web-safe level
pub const fn quantize_channel(value: u8) -> u8 {
    // Levels are evenly spaced, so rounding the quotient picks the nearest one
    let level = (value as u16 + LEVEL_STEP / 2) / LEVEL_STEP;
    (level * LEVEL_STEP) as u8
}

/// Map a pixel to its nearest palette color
///
/// The cube is separable, so per-channel rounding equals the nearest entry by
/// Euclidean RGB distance. Pixels below [`TRANSPARENCY_THRESHOLD`] become
/// fully transparent; everything else becomes opaque.
pub const fn quantize_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a < TRANSPARENCY_THRESHOLD {
        return Rgba([0, 0, 0, 0]);
    }
    Rgba([
        quantize_channel(r),
        quantize_channel(g),
        quantize_channel(b),
        u8::MAX,
    ])
}

/// Quantize every pixel of a frame in place
pub fn quantize_frame(frame: &mut RgbaImage) {
    for pixel in frame.pixels_mut() {
        *pixel = quantize_pixel(*pixel);
    }
}
