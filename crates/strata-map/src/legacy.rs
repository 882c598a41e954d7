//! Read-only decoding of the version 1 ("before metro") cell layout.
//!
//! Version 1 cells are 12 bytes: the current slots without `m9`. The
//! fields that now live in `m9` were packed into `m8`:
//!
//! | Field      | v1            | v2            |
//! |------------|---------------|---------------|
//! | house type | `m8` 0..12    | `m9` 0..16    |
//! | rail type  | `m8` 0..6     | `m9` 0..6     |
//! | tram type  | `m8` 6..12    | `m9` 0..6     |
//!
//! Every other field has the same position and meaning in both
//! versions. Nothing in this module writes the old layout.

use strata_core::{DecodeError, HouseId, RailTypeId, RoadTypeId, TileType, TransportType};

use crate::cell::{Cell, Field, Slot};
use crate::common::StationType;
use crate::layout;

/// Size of a serialized version 1 cell in bytes.
pub const LEGACY_CELL_LEN: usize = 12;

/// House type in version 1 cells.
pub const HOUSE_TYPE: Field = Field::new(Slot::M8, 0, 12);
/// Rail type in version 1 cells.
pub const RAIL_TYPE: Field = Field::new(Slot::M8, 0, 6);
/// Tram road type in version 1 cells.
pub const TRAM_TYPE: Field = Field::new(Slot::M8, 6, 6);

/// A decoded version 1 cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyCell {
    raw: Cell,
}

impl LegacyCell {
    /// Interpret 12 serialized bytes.
    pub fn from_le_bytes(b: [u8; LEGACY_CELL_LEN]) -> Self {
        let mut full = [0u8; Cell::SERIALIZED_LEN];
        full[..LEGACY_CELL_LEN].copy_from_slice(&b);
        Self {
            raw: Cell::from_le_bytes(full),
        }
    }

    /// The cell with every shared field in its current position. `m8`
    /// still holds the old packed fields and `m9` is zero.
    pub fn raw(&self) -> &Cell {
        &self.raw
    }

    /// Coarse tile type.
    pub fn tile_type(&self) -> Result<TileType, DecodeError> {
        TileType::try_from(self.raw.get(layout::TILE_TYPE) as u8)
    }

    /// House type, on house tiles.
    pub fn house_type(&self) -> Result<Option<HouseId>, DecodeError> {
        Ok(match self.tile_type()? {
            TileType::House => Some(HouseId(self.raw.get(HOUSE_TYPE) as u16)),
            _ => None,
        })
    }

    /// Rail type, on tiles that carry rail.
    pub fn rail_type(&self) -> Result<Option<RailTypeId>, DecodeError> {
        let carries_rail = match self.tile_type()? {
            TileType::Railway => true,
            TileType::Station => self.station_type()?.has_rail(),
            TileType::TunnelBridge => self.transport_type()? == TransportType::Rail,
            _ => false,
        };
        Ok(carries_rail.then(|| RailTypeId(self.raw.get(RAIL_TYPE) as u8)))
    }

    /// Tram road type, on tiles that carry road.
    pub fn tram_type(&self) -> Result<Option<RoadTypeId>, DecodeError> {
        let carries_road = match self.tile_type()? {
            TileType::Road => true,
            TileType::Station => self.station_type()?.is_road_stop(),
            TileType::TunnelBridge => self.transport_type()? == TransportType::Road,
            _ => false,
        };
        Ok(carries_road.then(|| RoadTypeId(self.raw.get(TRAM_TYPE) as u8)))
    }

    fn station_type(&self) -> Result<StationType, DecodeError> {
        StationType::try_from(self.raw.get(layout::station::TYPE) as u8)
    }

    fn transport_type(&self) -> Result<TransportType, DecodeError> {
        TransportType::try_from(self.raw.get(layout::tunnel_bridge::TRANSPORT) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(kind: TileType, m5: u8, m6: u8, m8: u16) -> LegacyCell {
        let mut b = [0u8; LEGACY_CELL_LEN];
        b[0] = (kind as u8) << 4;
        b[7] = m5;
        b[8] = m6;
        b[10..12].copy_from_slice(&m8.to_le_bytes());
        LegacyCell::from_le_bytes(b)
    }

    #[test]
    fn house_type_is_twelve_bits() {
        let c = legacy(TileType::House, 0, 0, 0xFABC);
        assert_eq!(c.house_type(), Ok(Some(HouseId(0xABC))));
        assert_eq!(c.rail_type(), Ok(None));
    }

    #[test]
    fn rail_and_tram_share_m8() {
        let m8 = (9 << 6) | 4;
        let road = legacy(TileType::Road, 0, 0, m8);
        assert_eq!(road.tram_type(), Ok(Some(RoadTypeId(9))));
        assert_eq!(road.rail_type(), Ok(None));

        let rail = legacy(TileType::Railway, 0, 0, m8);
        assert_eq!(rail.rail_type(), Ok(Some(RailTypeId(4))));
        assert_eq!(rail.tram_type(), Ok(None));
    }

    #[test]
    fn station_kind_selects_field() {
        let bus = legacy(TileType::Station, 0, (StationType::Bus as u8) << 3, 7 << 6);
        assert_eq!(bus.tram_type(), Ok(Some(RoadTypeId(7))));
        let rail = legacy(TileType::Station, 0, (StationType::Rail as u8) << 3, 2);
        assert_eq!(rail.rail_type(), Ok(Some(RailTypeId(2))));
        let dock = legacy(TileType::Station, 0, (StationType::Dock as u8) << 3, 2);
        assert_eq!(dock.rail_type(), Ok(None));
    }

    #[test]
    fn tunnel_transport_selects_field() {
        let road_tunnel = legacy(TileType::TunnelBridge, (TransportType::Road as u8) << 2, 0, 3 << 6);
        assert_eq!(road_tunnel.tram_type(), Ok(Some(RoadTypeId(3))));
        assert_eq!(road_tunnel.rail_type(), Ok(None));
    }

    #[test]
    fn bad_type_is_reported() {
        let mut b = [0u8; LEGACY_CELL_LEN];
        b[0] = 0xC0;
        let c = LegacyCell::from_le_bytes(b);
        assert!(c.tile_type().is_err());
        assert!(c.house_type().is_err());
    }
}
