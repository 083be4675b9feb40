//! Animated GIF assembly from rendered frames

use crate::io::error::{MosaicError, Result, file_system_error, invalid_parameter};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageError, RgbaImage};
use std::path::{Path, PathBuf};

/// The same delay for each of `count` frames
pub fn uniform_delays(count: usize, centiseconds: u32) -> Vec<Delay> {
    vec![Delay::from_numer_denom_ms(centiseconds.saturating_mul(10), 1); count]
}

/// Encode frames as a looping GIF, keeping their order
///
/// Frames are expected to be palette-quantized already, so the encoder can
/// store their colors exactly.
///
/// # Errors
///
/// Returns an error if:
/// - `frames` is empty
/// - `delays` does not hold exactly one delay per frame
/// - GIF encoding fails
pub fn assemble(frames: Vec<RgbaImage>, delays: &[Delay]) -> Result<Vec<u8>> {
    if frames.is_empty() {
        return Err(invalid_parameter(
            "frames",
            &0,
            &"at least one frame is required",
        ));
    }
    if frames.len() != delays.len() {
        return Err(invalid_parameter(
            "delays",
            &delays.len(),
            &format!("expected one delay per frame ({})", frames.len()),
        ));
    }

    let export_error = |source: ImageError| MosaicError::ImageExport {
        path: PathBuf::from("<memory>"),
        source,
    };

    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(export_error)?;
        encoder
            .encode_frames(
                frames
                    .into_iter()
                    .zip(delays.iter())
                    .map(|(image, &delay)| Frame::from_parts(image, 0, 0, delay)),
            )
            .map_err(export_error)?;
    }

    Ok(bytes)
}

/// Write encoded animation bytes, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_animation(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    std::fs::write(path, bytes).map_err(|e| file_system_error(path, "write animation", e))
}
