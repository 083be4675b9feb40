//! Image decoding and directory listing at the filesystem boundary

use crate::io::error::{MosaicError, Result, file_system_error};
use image::{ImageResult, RgbaImage};
use std::fs::{self, DirEntry};
use std::path::Path;

/// Decode an encoded image, sniffing the format from its contents
///
/// # Errors
///
/// Returns the codec error if the bytes are not a supported image format
pub fn decode_image(bytes: &[u8]) -> ImageResult<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.into_rgba8())
}

/// Read and decode the image at `path`
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a supported image format
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| file_system_error(path, "read image", e))?;
    decode_image(&bytes).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// List the entries of a directory ordered by file name
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn list_directory<P: AsRef<Path>>(path: P) -> Result<Vec<DirEntry>> {
    let path = path.as_ref();
    let mut entries = fs::read_dir(path)
        .map_err(|e| file_system_error(path, "read directory", e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| file_system_error(path, "read directory entry", e))?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}
