//! Region sampling with channel-wise quadratic mean colors
//!
//! Every channel is averaged as `sqrt(mean(c²))` rather than `mean(c)`, so
//! the result leans toward the brighter pixels of a block. Color channels are
//! premultiplied by alpha first: transparent pixels contribute no color, and
//! the averaged color is itself premultiplied.

use crate::spatial::Region;
use image::{Rgba, RgbaImage};

/// Fully transparent color returned when a region covers no pixels
pub const NO_COVERAGE: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Scale a straight color channel by `alpha`
pub const fn premultiply(channel: u8, alpha: u8) -> u8 {
    (channel as u16 * alpha as u16 / u8::MAX as u16) as u8
}

/// Channel-wise RMS of a set of pixels, in premultiplied color
///
/// Returns [`NO_COVERAGE`] for an empty set. Squares are summed exactly in
/// `u64`, divided with integer division and the root is truncated, so a set of
/// identical opaque pixels averages to exactly that pixel.
pub fn rms_average<'a, I>(pixels: I) -> Rgba<u8>
where
    I: IntoIterator<Item = &'a Rgba<u8>>,
{
    let mut sums = [0u64; 4];
    let mut count = 0u64;

    for pixel in pixels {
        let [r, g, b, a] = pixel.0;
        let channels = [
            premultiply(r, a),
            premultiply(g, a),
            premultiply(b, a),
            a,
        ];
        for (sum, channel) in sums.iter_mut().zip(channels) {
            let value = u64::from(channel);
            *sum += value * value;
        }
        count += 1;
    }

    if count == 0 {
        return NO_COVERAGE;
    }

    Rgba(sums.map(|sum| ((sum / count) as f64).sqrt() as u8))
}

/// Average color of `region`, clamped into the image first
///
/// Regions that overshoot the right or bottom edge are shifted back inside
/// the image (see [`Region::clamp_to`]). A region left with no pixels yields
/// alpha zero, which callers treat as "nothing to draw here".
pub fn average_color(image: &RgbaImage, region: Region) -> Rgba<u8> {
    let window = region.clamp_to(image.width(), image.height());
    if window.is_empty() {
        return NO_COVERAGE;
    }
    rms_average(
        window
            .rows()
            .flat_map(|y| window.columns().map(move |x| (x, y)))
            .filter_map(|(x, y)| image.get_pixel_checked(x, y)),
    )
}

/// Average color over the whole image
pub fn image_average(image: &RgbaImage) -> Rgba<u8> {
    rms_average(image.pixels())
}
