//! Error types for map construction and persistence.

use std::io;

use strata_core::{DecodeError, TileIndex, TileType};
use thiserror::Error;

/// Errors from building or editing a [`TileMap`](crate::TileMap).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// Map dimensions outside the supported range.
    #[error("invalid map dimensions 2^{log_x} x 2^{log_y}")]
    InvalidDimensions {
        /// Requested log2 width.
        log_x: u8,
        /// Requested log2 height.
        log_y: u8,
    },
    /// An offset from a tile leaves the map.
    #[error("offset ({dx}, {dy}) from tile {index} leaves the map")]
    OutOfBounds {
        /// Starting tile.
        index: TileIndex,
        /// Step along x.
        dx: i32,
        /// Step along y.
        dy: i32,
    },
    /// The base cell's type cannot carry associated layers.
    #[error("tile {index} of type {base:?} cannot carry associated layers")]
    LayerNotSupported {
        /// The tile.
        index: TileIndex,
        /// Type of the base cell.
        base: TileType,
    },
    /// The tile already has a cell of this type.
    #[error("tile {index} already has a {tile_type:?} layer")]
    LayerConflict {
        /// The tile.
        index: TileIndex,
        /// Type of the rejected layer.
        tile_type: TileType,
    },
}

/// Errors from [`save`](crate::save) and [`load`](crate::load).
#[derive(Debug, Error)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input does not start with `b"STRA"`.
    #[error("invalid magic bytes (expected b\"STRA\")")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the input.
        found: u8,
    },
    /// The input ended before the map was complete.
    #[error("truncated input while reading {what}")]
    Truncated {
        /// What was being read.
        what: &'static str,
    },
    /// A cell holds a value no accessor can interpret.
    #[error("malformed cell at tile {index}: {source}")]
    MalformedCell {
        /// The tile whose cell is malformed.
        index: TileIndex,
        /// The undecodable value.
        #[source]
        source: DecodeError,
    },
    /// A layer entry names a tile that is not on the map.
    #[error("layer entry for tile {index} is off the map")]
    LayerIndexOutOfRange {
        /// The offending tile index.
        index: TileIndex,
    },
    /// The decoded map violates a map invariant.
    #[error(transparent)]
    Map(#[from] MapError),
}
