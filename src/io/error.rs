//! Error types for catalog loading, planning, rendering and encoding

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A single tile file could not be decoded
    ///
    /// Reported through logging while the catalog loads; the tile is skipped
    TileDecode {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// No usable tiles remained after loading the tile directory
    EmptyCatalog {
        /// Directory that was scanned
        path: PathBuf,
    },

    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Malformed nearest-neighbor query point
    SpatialQuery {
        /// Description of what is wrong with the query
        reason: String,
    },

    /// Failed to encode or write the animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::TileDecode { path, source } => {
                write!(f, "Skipping tile '{}': {source}", path.display())
            }
            Self::EmptyCatalog { path } => {
                write!(f, "No usable tile images found in '{}'", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SpatialQuery { reason } => {
                write!(f, "Invalid color index query: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::TileDecode { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::EmptyCatalog { .. } | Self::InvalidParameter { .. } | Self::SpatialQuery { .. } => {
                None
            }
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a spatial query error
pub fn spatial_query_error(reason: &impl ToString) -> MosaicError {
    MosaicError::SpatialQuery {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
