//! Accessors shared by every tile kind.
//!
//! Owner, climate, docking, station and tunnel/bridge fields are read
//! by several encoder crates, so they live next to the storage rather
//! than in any one encoder.

use strata_core::{
    DecodeError, HouseId, Owner, StationId, TileType, TransportType, TropicZone, WaterClass,
};

use crate::cell::Slot;
use crate::handle::{AsCell, AsCellMut};
use crate::layout;

/// What a station tile is part of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StationType {
    /// Rail platform.
    Rail = 0,
    /// Airport tile (hangars included).
    Airport = 1,
    /// Lorry stop.
    Truck = 2,
    /// Bus stop.
    Bus = 3,
    /// Oil rig.
    Oilrig = 4,
    /// Ship dock.
    Dock = 5,
    /// Buoy.
    Buoy = 6,
    /// Rail waypoint.
    RailWaypoint = 7,
    /// Road waypoint.
    RoadWaypoint = 8,
}

impl StationType {
    /// Whether road vehicles stop here.
    pub const fn is_road_stop(self) -> bool {
        matches!(
            self,
            StationType::Truck | StationType::Bus | StationType::RoadWaypoint
        )
    }

    /// Whether the tile carries rail track.
    pub const fn has_rail(self) -> bool {
        matches!(self, StationType::Rail | StationType::RailWaypoint)
    }
}

impl TryFrom<u8> for StationType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Ok(match v {
            0 => StationType::Rail,
            1 => StationType::Airport,
            2 => StationType::Truck,
            3 => StationType::Bus,
            4 => StationType::Oilrig,
            5 => StationType::Dock,
            6 => StationType::Buoy,
            7 => StationType::RailWaypoint,
            8 => StationType::RoadWaypoint,
            _ => {
                return Err(DecodeError::InvalidDiscriminant {
                    kind: "StationType",
                    value: u32::from(v),
                })
            }
        })
    }
}

/// Decode a packed enum value read from a live cell.
///
/// # Panics
///
/// Panics if `raw` is not a valid discriminant. Every writer stores only
/// valid values and the codec rejects the invalid discriminants it knows
/// about at load time, so this only fires on a broken invariant.
pub fn decode<T: TryFrom<u8, Error = DecodeError>>(raw: u32) -> T {
    match T::try_from(raw as u8) {
        Ok(v) => v,
        Err(e) => panic!("corrupt cell: {e}"),
    }
}

/// Read accessors available on every cell handle.
pub trait CommonTile: AsCell {
    /// Owner of the tile.
    ///
    /// # Panics
    ///
    /// Houses and industries have no owner field.
    fn owner(&self) -> Owner {
        assert!(
            !self.is_tile_type(TileType::House) && !self.is_tile_type(TileType::Industry),
            "owner read on a tile type without an owner"
        );
        Owner(self.cell().get(layout::OWNER) as u8)
    }

    /// Whether the tile is owned by `owner`.
    fn is_tile_owner(&self, owner: Owner) -> bool {
        self.owner() == owner
    }

    /// Whether associated layer cells are stacked on this tile.
    fn has_associated_tile(&self) -> bool {
        self.cell().flag(layout::ASSOCIATED_TILE)
    }

    /// Climate zone.
    fn tropic_zone(&self) -> TropicZone {
        decode(self.cell().get(layout::TROPIC_ZONE))
    }

    /// Terrain height.
    fn height(&self) -> u8 {
        self.cell().get(layout::HEIGHT) as u8
    }

    /// Whether ships may dock here.
    fn is_docking_tile(&self) -> bool {
        matches!(
            self.tile_type(),
            TileType::Water | TileType::Station | TileType::TunnelBridge
        ) && self.cell().flag(layout::DOCKING)
    }

    // ── Station ─────────────────────────────────────────────────

    /// Station the tile belongs to.
    fn station_id(&self) -> StationId {
        assert!(self.is_tile_type(TileType::Station), "not a station tile");
        StationId(self.cell().get(layout::station::ID) as u16)
    }

    /// Kind of station part.
    fn station_type(&self) -> StationType {
        assert!(self.is_tile_type(TileType::Station), "not a station tile");
        decode(self.cell().get(layout::station::TYPE))
    }

    /// Whether the tile is an airport hangar.
    fn is_hangar(&self) -> bool {
        self.is_tile_type(TileType::Station)
            && self.station_type() == StationType::Airport
            && self.cell().flag(layout::station::HANGAR)
    }

    /// Whether the tile is a road stop or road waypoint.
    fn is_road_stop(&self) -> bool {
        self.is_tile_type(TileType::Station) && self.station_type().is_road_stop()
    }

    /// Whether the tile is a rail station or rail waypoint.
    fn has_station_rail(&self) -> bool {
        self.is_tile_type(TileType::Station) && self.station_type().has_rail()
    }

    /// Whether the rail platform is reserved.
    fn has_station_reservation(&self) -> bool {
        assert!(self.has_station_rail(), "not a rail station tile");
        self.cell().flag(layout::station::RESERVATION)
    }

    // ── Tunnel / bridge ─────────────────────────────────────────

    /// Transport mode of a tunnel entrance or bridge head.
    fn tunnel_bridge_transport_type(&self) -> TransportType {
        assert!(
            self.is_tile_type(TileType::TunnelBridge),
            "not a tunnel or bridge tile"
        );
        decode(self.cell().get(layout::tunnel_bridge::TRANSPORT))
    }

    // ── House ───────────────────────────────────────────────────

    /// Type of the house on this tile.
    fn house_type(&self) -> HouseId {
        assert!(self.is_tile_type(TileType::House), "not a house tile");
        HouseId(self.cell().get(layout::house::TYPE) as u16)
    }
}

impl<T: AsCell + ?Sized> CommonTile for T {}

/// Write accessors and constructors available on every mutable handle.
pub trait CommonTileMut: AsCellMut + CommonTile {
    /// Change the tile owner.
    fn set_owner(&mut self, owner: Owner) {
        assert!(
            !self.is_tile_type(TileType::House) && !self.is_tile_type(TileType::Industry),
            "owner write on a tile type without an owner"
        );
        self.cell_mut().set(layout::OWNER, u32::from(owner.0));
    }

    /// Change the associated-tile flag.
    ///
    /// # Panics
    ///
    /// Setting the flag on a type that cannot carry layers.
    fn set_associated_tile(&mut self, value: bool) {
        assert!(
            !value || self.tile_type().may_have_associated_tile(),
            "tile type cannot carry associated layers"
        );
        self.cell_mut().set_flag(layout::ASSOCIATED_TILE, value);
    }

    /// Change the climate zone.
    fn set_tropic_zone(&mut self, zone: TropicZone) {
        self.cell_mut().set(layout::TROPIC_ZONE, zone as u32);
    }

    /// Change the terrain height.
    fn set_height(&mut self, height: u8) {
        self.cell_mut().set(layout::HEIGHT, u32::from(height));
    }

    /// Mark the tile as a docking tile or clear the mark.
    fn set_docking_tile(&mut self, value: bool) {
        assert!(
            matches!(
                self.tile_type(),
                TileType::Water | TileType::Station | TileType::TunnelBridge
            ),
            "docking flag on a tile type that cannot carry it"
        );
        self.cell_mut().set_flag(layout::DOCKING, value);
    }

    /// Change the rail platform reservation.
    fn set_station_reservation(&mut self, value: bool) {
        assert!(self.has_station_rail(), "not a rail station tile");
        self.cell_mut().set_flag(layout::station::RESERVATION, value);
    }

    /// Turn the cell into `tile_type` with every type-specific slot zeroed.
    ///
    /// Keeps height, tropic zone, the metro word and the metro owner. The
    /// associated-tile flag is kept unless the previous type could not
    /// carry one. Constructors call this first and then fill their fields.
    fn reset_to(&mut self, tile_type: TileType) {
        let cell = self.cell_mut();
        let old = cell.tile_type();
        if !old.may_have_associated_tile() {
            cell.set_flag(layout::ASSOCIATED_TILE, false);
        }
        cell.set_tile_type(tile_type);
        cell.set_slot(Slot::M1, 0);
        for slot in [Slot::M2, Slot::M3, Slot::M4, Slot::M5, Slot::M6, Slot::M7] {
            cell.set_slot(slot, 0);
        }
        if old == TileType::House {
            cell.set_slot(Slot::M9, 0);
        } else {
            cell.set(layout::M9_PAYLOAD, 0);
        }
    }

    /// Make bare clear land owned by nobody.
    fn make_clear(&mut self) {
        self.reset_to(TileType::Clear);
        self.set_owner(Owner::NONE);
        self.cell_mut().set(layout::WATER_CLASS, WaterClass::Invalid as u32);
    }

    /// Make a station tile.
    fn make_station(
        &mut self,
        station_type: StationType,
        id: StationId,
        owner: Owner,
        gfx: u8,
        water_class: WaterClass,
    ) {
        self.reset_to(TileType::Station);
        self.set_owner(owner);
        let cell = self.cell_mut();
        cell.set(layout::WATER_CLASS, water_class as u32);
        cell.set(layout::station::ID, u32::from(id.0));
        cell.set(layout::station::TYPE, station_type as u32);
        cell.set(layout::station::GFX, u32::from(gfx));
    }

    /// Mark an airport tile as a hangar or clear the mark.
    fn set_hangar(&mut self, value: bool) {
        assert!(
            self.is_tile_type(TileType::Station) && self.station_type() == StationType::Airport,
            "hangar flag on a non-airport tile"
        );
        self.cell_mut().set_flag(layout::station::HANGAR, value);
    }

    /// Make a tunnel entrance or bridge head.
    fn make_tunnel_bridge(&mut self, transport: TransportType, owner: Owner) {
        self.reset_to(TileType::TunnelBridge);
        self.set_owner(owner);
        self.cell_mut()
            .set(layout::tunnel_bridge::TRANSPORT, transport as u32);
    }

    /// Make a house. Houses have no owner and no metro owner.
    fn make_house(&mut self, house: HouseId) {
        self.reset_to(TileType::House);
        let cell = self.cell_mut();
        cell.set(layout::OWNER, u32::from(Owner::TOWN.0));
        cell.set(layout::house::TYPE, u32::from(house.0));
    }
}

impl<T: AsCellMut + ?Sized> CommonTileMut for T {}
