//! Water body classes and climate zones.

use crate::error::DecodeError;

/// The kind of water body under a tile.
///
/// Carried by water tiles and by the station, industry and object tiles
/// that may sit in water. [`WaterClass::Invalid`] marks a tile of those
/// types that is built on dry land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum WaterClass {
    /// Open sea.
    Sea = 0,
    /// Player-built canal.
    Canal = 1,
    /// River.
    River = 2,
    /// No water.
    Invalid = 3,
}

impl WaterClass {
    /// Whether this is a real water body.
    pub const fn is_valid(self) -> bool {
        !matches!(self, WaterClass::Invalid)
    }
}

impl TryFrom<u8> for WaterClass {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(WaterClass::Sea),
            1 => Ok(WaterClass::Canal),
            2 => Ok(WaterClass::River),
            3 => Ok(WaterClass::Invalid),
            _ => Err(DecodeError::new("WaterClass", v)),
        }
    }
}

/// Climate zone of a tile in sub-tropical maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TropicZone {
    /// Neither desert nor rainforest.
    #[default]
    Normal = 0,
    /// Desert.
    Desert = 1,
    /// Rainforest.
    Rainforest = 2,
}

impl TryFrom<u8> for TropicZone {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TropicZone::Normal),
            1 => Ok(TropicZone::Desert),
            2 => Ok(TropicZone::Rainforest),
            _ => Err(DecodeError::new("TropicZone", v)),
        }
    }
}
