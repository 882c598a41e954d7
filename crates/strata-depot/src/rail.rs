//! Railway tiles: plain track and rail depots.

use strata_core::{DecodeError, DepotId, DiagDirection, Owner, RailTypeId, TileType, TrackBits};
use strata_map::common::decode;
use strata_map::{layout, AsCell, AsCellMut, CommonTile, CommonTileMut};
use tracing::trace;

/// Subtype of a railway tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RailTileType {
    /// Track without signals.
    Normal = 0,
    /// Track with signals.
    Signals = 1,
    /// Depot.
    Depot = 3,
}

impl TryFrom<u8> for RailTileType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RailTileType::Normal),
            1 => Ok(RailTileType::Signals),
            3 => Ok(RailTileType::Depot),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "RailTileType",
                value: u32::from(v),
            }),
        }
    }
}

/// Read accessors for railway cells.
pub trait RailTile: CommonTile {
    /// Subtype.
    fn rail_tile_type(&self) -> RailTileType {
        assert!(self.is_tile_type(TileType::Railway), "not a railway tile");
        decode(self.cell().get(layout::rail::TILE_TYPE))
    }

    /// Whether the cell is a railway cell without a depot.
    fn is_plain_rail_tile(&self) -> bool {
        self.is_tile_type(TileType::Railway) && self.rail_tile_type() != RailTileType::Depot
    }

    /// Whether the railway cell is a depot.
    fn is_rail_depot(&self) -> bool {
        self.rail_tile_type() == RailTileType::Depot
    }

    /// Whether the cell is a rail depot.
    fn is_rail_depot_tile(&self) -> bool {
        self.is_tile_type(TileType::Railway) && self.is_rail_depot()
    }

    /// Rail type of the track or depot.
    fn rail_type(&self) -> RailTypeId {
        assert!(self.is_tile_type(TileType::Railway), "not a railway tile");
        RailTypeId(self.cell().get(layout::rail::RAIL_TYPE) as u8)
    }

    /// Track pieces of plain rail.
    fn rail_track_bits(&self) -> TrackBits {
        assert!(self.is_plain_rail_tile(), "not a plain rail tile");
        TrackBits::from_bits_truncate(self.cell().get(layout::rail::TRACK_BITS) as u8)
    }

    /// Direction trains leave the depot in.
    fn rail_depot_direction(&self) -> DiagDirection {
        assert!(self.is_rail_depot_tile(), "not a rail depot tile");
        decode(self.cell().get(layout::rail::DEPOT_DIRECTION))
    }

    /// Depot id.
    fn rail_depot_id(&self) -> DepotId {
        assert!(self.is_rail_depot_tile(), "not a rail depot tile");
        DepotId(self.cell().get(layout::rail::DEPOT_ID) as u16)
    }
}

impl<T: AsCell + ?Sized> RailTile for T {}

/// Write accessors and constructors for railway cells.
pub trait RailTileMut: AsCellMut + RailTile + CommonTileMut {
    /// Change the rail type.
    fn set_rail_type(&mut self, rail_type: RailTypeId) {
        assert!(self.is_tile_type(TileType::Railway), "not a railway tile");
        self.cell_mut()
            .set(layout::rail::RAIL_TYPE, u32::from(rail_type.0));
    }

    /// Replace the track pieces of plain rail.
    fn set_rail_track_bits(&mut self, bits: TrackBits) {
        assert!(self.is_plain_rail_tile(), "not a plain rail tile");
        self.cell_mut()
            .set(layout::rail::TRACK_BITS, u32::from(bits.bits()));
    }

    /// Point a depot's exit at `dir`.
    fn set_rail_depot_exit_direction(&mut self, dir: DiagDirection) {
        assert!(self.is_rail_depot_tile(), "not a rail depot tile");
        self.cell_mut()
            .set(layout::rail::DEPOT_DIRECTION, dir as u32);
    }

    /// Make plain track without signals.
    fn make_rail_normal(&mut self, owner: Owner, bits: TrackBits, rail_type: RailTypeId) {
        self.reset_to(TileType::Railway);
        self.set_owner(owner);
        let cell = self.cell_mut();
        cell.set(layout::rail::TILE_TYPE, RailTileType::Normal as u32);
        cell.set(layout::rail::TRACK_BITS, u32::from(bits.bits()));
        cell.set(layout::rail::RAIL_TYPE, u32::from(rail_type.0));
    }

    /// Make a rail depot.
    fn make_rail_depot(
        &mut self,
        owner: Owner,
        depot: DepotId,
        dir: DiagDirection,
        rail_type: RailTypeId,
    ) {
        self.reset_to(TileType::Railway);
        self.set_owner(owner);
        let cell = self.cell_mut();
        cell.set(layout::rail::TILE_TYPE, RailTileType::Depot as u32);
        cell.set(layout::rail::DEPOT_ID, u32::from(depot.0));
        cell.set(layout::rail::DEPOT_DIRECTION, dir as u32);
        cell.set(layout::rail::RAIL_TYPE, u32::from(rail_type.0));
        trace!(tile = self.index().0, %depot, ?dir, "rail depot built");
    }
}

impl<T: AsCellMut + ?Sized> RailTileMut for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::TileIndex;
    use strata_map::{MapConfig, TileMap};

    fn map() -> TileMap {
        TileMap::new(MapConfig::default()).unwrap()
    }

    #[test]
    fn plain_rail_fields() {
        let mut m = map();
        let t = TileIndex(20);
        m.tile_mut(t)
            .make_rail_normal(Owner(2), TrackBits::CROSS, RailTypeId(4));
        let tile = m.tile(t);
        assert!(tile.is_plain_rail_tile());
        assert!(!tile.is_rail_depot_tile());
        assert_eq!(tile.rail_track_bits(), TrackBits::CROSS);
        assert_eq!(tile.rail_type(), RailTypeId(4));
        assert_eq!(tile.owner(), Owner(2));
    }

    #[test]
    fn depot_fields() {
        let mut m = map();
        let t = TileIndex(21);
        let mut tile = m.tile_mut(t);
        tile.make_rail_depot(Owner(1), DepotId(300), DiagDirection::SouthEast, RailTypeId(2));
        assert!(tile.is_rail_depot_tile());
        assert_eq!(tile.rail_depot_id(), DepotId(300));
        assert_eq!(tile.rail_depot_direction(), DiagDirection::SouthEast);
        tile.set_rail_depot_exit_direction(DiagDirection::NorthWest);
        assert_eq!(tile.rail_depot_direction(), DiagDirection::NorthWest);
        assert_eq!(tile.rail_type(), RailTypeId(2));
    }

    #[test]
    fn rail_type_lives_in_m9() {
        let mut m = map();
        let t = TileIndex(22);
        let mut tile = m.tile_mut(t);
        tile.make_rail_normal(Owner(0), TrackBits::X, RailTypeId(63));
        tile.set_rail_type(RailTypeId(7));
        assert_eq!(m.cell(t).slot(strata_map::Slot::M9) & 0x3F, 7);
        assert_eq!(m.cell(t).get(layout::METRO_WORD), 0);
    }

    #[test]
    #[should_panic(expected = "not a rail depot tile")]
    fn depot_id_on_plain_rail_panics() {
        let mut m = map();
        let t = TileIndex(23);
        m.tile_mut(t).make_rail_normal(Owner(0), TrackBits::Y, RailTypeId(0));
        let _ = m.tile(t).rail_depot_id();
    }

    #[test]
    fn unused_subtype_rejected() {
        assert!(RailTileType::try_from(2).is_err());
    }
}
