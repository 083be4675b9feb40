//! Nearest-color index over tile average colors
//!
//! Tile colors are points in RGBA space, held in an immutable `kiddo` k-d
//! tree. Queries return the `k` nearest tiles by Euclidean distance.

use crate::io::configuration::COLOR_DIMENSIONS;
use crate::io::error::{Result, spatial_query_error};
use image::Rgba;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZero;
use tracing::debug;

/// A color as a point in 4-D RGBA space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorKey([f64; COLOR_DIMENSIONS]);

impl ColorKey {
    /// Create a key from raw coordinates
    pub const fn new(coordinates: [f64; COLOR_DIMENSIONS]) -> Self {
        Self(coordinates)
    }

    /// Key for an 8-bit RGBA color
    pub fn from_rgba(color: Rgba<u8>) -> Self {
        Self(color.0.map(f64::from))
    }

    /// Coordinates in R, G, B, A order
    pub const fn coordinates(&self) -> [f64; COLOR_DIMENSIONS] {
        self.0
    }

    /// Whether every coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Squared Euclidean distance to another key
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// A tile as stored in the index
#[derive(Clone, Debug, PartialEq)]
pub struct TileRecord {
    id: usize,
    name: String,
    key: ColorKey,
}

impl TileRecord {
    /// Record for tile `id` whose average color is `color`
    pub fn new(id: usize, name: impl Into<String>, color: Rgba<u8>) -> Self {
        Self {
            id,
            name: name.into(),
            key: ColorKey::from_rgba(color),
        }
    }

    /// Position of the tile in its catalog
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Tile name, usually its file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Average color of the tile as an index key
    pub const fn key(&self) -> &ColorKey {
        &self.key
    }
}

/// k-nearest-neighbor index over tile colors
///
/// Built once and read-only afterwards, so it can be shared freely between
/// threads. Tiles with identical colors share a single tree point.
pub struct ColorIndex {
    records: Vec<TileRecord>,
    groups: Vec<Vec<usize>>,
    tree: Option<ImmutableKdTree<f64, COLOR_DIMENSIONS>>,
}

impl fmt::Debug for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorIndex")
            .field("tiles", &self.records.len())
            .field("distinct_colors", &self.groups.len())
            .finish()
    }
}

impl ColorIndex {
    /// Build the index from `(name, average color)` pairs
    ///
    /// Tile ids are the positions in `colors`.
    pub fn build<S: Into<String>>(colors: Vec<(S, Rgba<u8>)>) -> Self {
        let records: Vec<TileRecord> = colors
            .into_iter()
            .enumerate()
            .map(|(id, (name, color))| TileRecord::new(id, name, color))
            .collect();

        let mut points: Vec<[f64; COLOR_DIMENSIONS]> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut slots: HashMap<[u64; COLOR_DIMENSIONS], usize> = HashMap::new();
        for record in &records {
            let coordinates = record.key.coordinates();
            let slot = *slots
                .entry(coordinates.map(f64::to_bits))
                .or_insert_with(|| {
                    points.push(coordinates);
                    groups.push(Vec::new());
                    groups.len() - 1
                });
            if let Some(group) = groups.get_mut(slot) {
                group.push(record.id);
            }
        }

        let tree = (!points.is_empty()).then(|| ImmutableKdTree::new_from_slice(&points));
        debug!(
            tiles = records.len(),
            distinct_colors = points.len(),
            "color index built"
        );

        Self {
            records,
            groups,
            tree,
        }
    }

    /// Up to `k` tiles nearest to `key`, closest first
    ///
    /// Equidistant tiles are ordered by id. Returns every tile when `k`
    /// exceeds the index size and nothing when `k` is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate of `key` is NaN or infinite
    pub fn nearest(&self, k: usize, key: &ColorKey) -> Result<Vec<&TileRecord>> {
        if !key.is_finite() {
            return Err(spatial_query_error(&format!(
                "query point {:?} has a non-finite coordinate",
                key.coordinates()
            )));
        }

        let (Some(tree), Some(count)) = (&self.tree, NonZero::new(k)) else {
            return Ok(Vec::new());
        };
        let query = key.coordinates();

        let Some(radius) = tree
            .nearest_n::<SquaredEuclidean>(&query, count)
            .iter()
            .map(|neighbour| neighbour.distance)
            .reduce(f64::max)
        else {
            return Ok(Vec::new());
        };

        // Colors tied with the k-th nearest are gathered too so ids break the tie
        let mut ranked: Vec<(f64, usize)> = tree
            .within::<SquaredEuclidean>(&query, radius.next_up())
            .iter()
            .filter_map(|neighbour| usize::try_from(neighbour.item).ok())
            .filter_map(|slot| self.groups.get(slot))
            .flatten()
            .filter_map(|&id| self.records.get(id))
            .map(|record| (record.key.distance_squared(key), record.id))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        Ok(ranked
            .into_iter()
            .take(k)
            .filter_map(|(_, id)| self.records.get(id))
            .collect())
    }

    /// Number of indexed tiles
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for tile `id`
    pub fn get(&self, id: usize) -> Option<&TileRecord> {
        self.records.get(id)
    }

    /// All records in id order
    pub fn records(&self) -> &[TileRecord] {
        &self.records
    }
}
