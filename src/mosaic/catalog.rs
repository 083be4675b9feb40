//! Tile catalog loading and per-tile average colors
//!
//! Every regular file in the tile directory is decoded and resized to the
//! block size with nearest-neighbor sampling, which keeps the hard edges of
//! icon-style artwork. Files that fail to decode are logged and skipped.

use crate::color::average::image_average;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{decode_image, list_directory};
use image::imageops::{self, FilterType};
use image::{ImageError, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A named tile image
#[derive(Clone, Debug)]
pub struct Tile {
    name: String,
    image: RgbaImage,
}

impl Tile {
    /// Wrap an already decoded image
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Tile name, usually its file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tile pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// RMS average color over the whole tile
    pub fn average_color(&self) -> Rgba<u8> {
        image_average(&self.image)
    }

    #[must_use]
    fn resized(self, size: u32) -> Self {
        if self.image.dimensions() == (size, size) {
            return self;
        }
        Self {
            image: imageops::resize(&self.image, size, size, FilterType::Nearest),
            name: self.name,
        }
    }
}

/// Square tiles of a uniform size, indexed by position
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    tile_size: u32,
}

impl TileCatalog {
    /// Load every decodable image in `path` as a `tile_size` square tile
    ///
    /// Tiles are ordered by file name. Subdirectories are ignored and files
    /// that fail to decode are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tile_size` is zero
    /// - The directory cannot be listed
    /// - No file in the directory decodes as an image
    #[tracing::instrument(skip_all, fields(path = %path.display(), tile_size = tile_size))]
    pub fn load(path: &Path, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least 1",
            ));
        }

        let mut tiles = Vec::new();
        for entry in list_directory(path)? {
            let entry_path = entry.path();
            if !entry_path.is_file() {
                debug!(entry = %entry_path.display(), "skipping non-regular entry");
                continue;
            }

            match load_tile(&entry_path) {
                Ok(tile) => tiles.push(tile.resized(tile_size)),
                Err(error) => warn!(%error, "ignoring tile"),
            }
        }

        if tiles.is_empty() {
            return Err(MosaicError::EmptyCatalog {
                path: path.to_path_buf(),
            });
        }

        info!(count = tiles.len(), "loaded tiles");
        Ok(Self { tiles, tile_size })
    }

    /// Build a catalog from in-memory tiles, resizing them to `tile_size`
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero or `tiles` is empty
    pub fn from_tiles(tiles: Vec<Tile>, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least 1",
            ));
        }
        if tiles.is_empty() {
            return Err(MosaicError::EmptyCatalog {
                path: PathBuf::from("<memory>"),
            });
        }

        Ok(Self {
            tiles: tiles
                .into_iter()
                .map(|tile| tile.resized(tile_size))
                .collect(),
            tile_size,
        })
    }

    /// Edge length of every tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at position `id`
    pub fn get(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// `(name, average color)` for every tile in id order
    pub fn colors(&self) -> Vec<(String, Rgba<u8>)> {
        self.tiles
            .iter()
            .map(|tile| (tile.name.clone(), tile.average_color()))
            .collect()
    }
}

fn load_tile(path: &Path) -> Result<Tile> {
    let tile_error = |source: ImageError| MosaicError::TileDecode {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(|e| tile_error(ImageError::IoError(e)))?;
    let image = decode_image(&bytes).map_err(tile_error)?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    Ok(Tile::new(name, image))
}
