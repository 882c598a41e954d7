//! Map dimensions and their validation.

use crate::error::MapError;

/// Dimensions of a [`TileMap`](crate::TileMap), as base-2 logarithms.
///
/// Both axes are powers of two so that a [`TileIndex`](strata_core::TileIndex)
/// splits into x and y with a mask and a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapConfig {
    /// log2 of the map width. Default: 6 (64 tiles).
    pub log_x: u8,
    /// log2 of the map height. Default: 6 (64 tiles).
    pub log_y: u8,
}

impl MapConfig {
    /// Smallest accepted log2 dimension.
    pub const MIN_LOG: u8 = 6;
    /// Largest accepted log2 dimension.
    pub const MAX_LOG: u8 = 12;

    /// Validated dimensions.
    pub fn new(log_x: u8, log_y: u8) -> Result<Self, MapError> {
        let config = Self { log_x, log_y };
        config.validate()?;
        Ok(config)
    }

    /// Check both axes lie in `MIN_LOG..=MAX_LOG`.
    pub fn validate(&self) -> Result<(), MapError> {
        let range = Self::MIN_LOG..=Self::MAX_LOG;
        if range.contains(&self.log_x) && range.contains(&self.log_y) {
            Ok(())
        } else {
            Err(MapError::InvalidDimensions {
                log_x: self.log_x,
                log_y: self.log_y,
            })
        }
    }

    /// Width in tiles.
    pub fn size_x(&self) -> u32 {
        1 << self.log_x
    }

    /// Height in tiles.
    pub fn size_y(&self) -> u32 {
        1 << self.log_y
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        1usize << (self.log_x + self.log_y)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { log_x: 6, log_y: 6 }
    }
}
