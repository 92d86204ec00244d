use std::fmt;
use std::io;

use crate::autotile::Role;

/// Error type for autotile slicing
#[derive(Debug)]
pub enum SliceError {
    /// I/O error
    Io(io::Error),
    /// Source image could not be decoded or a slice could not be encoded
    Image(image::ImageError),
    /// Descriptor serialisation failed
    Json(serde_json::Error),
    /// Tile size of zero pixels
    InvalidTileSize,
    /// Slice count matches neither known layout
    UnsupportedLayout(usize),
    /// A layout table points past the end of the slice list
    IndexOutOfRange {
        role: Role,
        index: usize,
        len: usize,
    },
}

impl From<io::Error> for SliceError {
    fn from(err: io::Error) -> Self {
        SliceError::Io(err)
    }
}

impl From<image::ImageError> for SliceError {
    fn from(err: image::ImageError) -> Self {
        SliceError::Image(err)
    }
}

impl From<serde_json::Error> for SliceError {
    fn from(err: serde_json::Error) -> Self {
        SliceError::Json(err)
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::Io(err) => write!(f, "I/O error: {}", err),
            SliceError::Image(err) => write!(f, "Image error: {}", err),
            SliceError::Json(err) => write!(f, "JSON error: {}", err),
            SliceError::InvalidTileSize => write!(f, "Tile size must be at least 1 pixel"),
            SliceError::UnsupportedLayout(count) => write!(
                f,
                "Unsupported layout: image yields {} slices, expected 16 or 48",
                count
            ),
            SliceError::IndexOutOfRange { role, index, len } => write!(
                f,
                "Out of bounds: {} maps to slice {} but only {} slices exist",
                role, index, len
            ),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::Io(err) => Some(err),
            SliceError::Image(err) => Some(err),
            SliceError::Json(err) => Some(err),
            _ => None,
        }
    }
}
