//! Per-layer road accessors and road tile constructors.

use std::fmt;

use strata_core::{
    DecodeError, DepotId, DiagDirection, Owner, RoadBits, RoadTramType, RoadTypeId, StationId,
    TileType, TownId, TransportType, WaterClass,
};
use strata_map::common::decode;
use strata_map::{layout, AsCell, AsCellMut, CommonTile, CommonTileMut, StationType};
use tracing::trace;

use crate::config::RoadTypeTable;
use crate::error::RoadTypeError;

/// Subtype of a road tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoadTileType {
    /// Road pieces, possibly with trams.
    Normal = 0,
    /// A road vehicle depot with one entrance.
    Depot = 2,
}

impl TryFrom<u8> for RoadTileType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RoadTileType::Normal),
            2 => Ok(RoadTileType::Depot),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "RoadTileType",
                value: u32::from(v),
            }),
        }
    }
}

/// One-way restriction on a normal road.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisallowedRoadDirections {
    /// Two-way traffic.
    #[default]
    None = 0,
    /// Southbound traffic is not allowed.
    Southbound = 1,
    /// Northbound traffic is not allowed.
    Northbound = 2,
    /// No traffic in either direction.
    Both = 3,
}

impl TryFrom<u8> for DisallowedRoadDirections {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DisallowedRoadDirections::None),
            1 => Ok(DisallowedRoadDirections::Southbound),
            2 => Ok(DisallowedRoadDirections::Northbound),
            3 => Ok(DisallowedRoadDirections::Both),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "DisallowedRoadDirections",
                value: u32::from(v),
            }),
        }
    }
}

/// A set of road type ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoadTypes(u64);

impl RoadTypes {
    /// The empty set.
    pub const EMPTY: RoadTypes = RoadTypes(0);

    /// Add `id`. The sentinel is ignored.
    pub fn insert(&mut self, id: RoadTypeId) {
        if id.0 < RoadTypeId::INVALID.0 {
            self.0 |= 1u64 << id.0;
        }
    }

    /// Whether `id` is in the set.
    pub fn contains(self, id: RoadTypeId) -> bool {
        id.0 < RoadTypeId::INVALID.0 && self.0 & (1u64 << id.0) != 0
    }

    /// Whether the two sets share an id.
    pub fn intersects(self, other: RoadTypes) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of ids in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<RoadTypeId> for RoadTypes {
    fn from_iter<I: IntoIterator<Item = RoadTypeId>>(iter: I) -> Self {
        let mut set = RoadTypes::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for RoadTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries((0..RoadTypeId::INVALID.0).filter(|i| self.0 & (1u64 << i) != 0))
            .finish()
    }
}

/// Read accessors for road fields.
pub trait RoadTile: CommonTile {
    /// Whether the cell stores a road layer: road tiles, road stops and
    /// road tunnels or bridges.
    fn may_have_road(&self) -> bool {
        match self.tile_type() {
            TileType::Road => true,
            TileType::Station => self.is_road_stop(),
            TileType::TunnelBridge => self.tunnel_bridge_transport_type() == TransportType::Road,
            _ => false,
        }
    }

    /// Subtype of a road tile.
    fn road_tile_type(&self) -> RoadTileType {
        assert!(self.is_tile_type(TileType::Road), "not a road tile");
        decode(self.cell().get(layout::road::TILE_TYPE))
    }

    /// Road pieces with a possible tram layer.
    fn is_normal_road(&self) -> bool {
        self.road_tile_type() == RoadTileType::Normal
    }

    /// A road cell that is normal road.
    fn is_normal_road_tile(&self) -> bool {
        self.is_tile_type(TileType::Road) && self.is_normal_road()
    }

    /// A road depot.
    fn is_road_depot(&self) -> bool {
        self.road_tile_type() == RoadTileType::Depot
    }

    /// A road cell that is a road depot.
    fn is_road_depot_tile(&self) -> bool {
        self.is_tile_type(TileType::Road) && self.is_road_depot()
    }

    /// Pieces of one layer on a normal road.
    fn road_bits(&self, rtt: RoadTramType) -> RoadBits {
        assert!(self.is_normal_road(), "road bits on a non-normal road tile");
        let field = match rtt {
            RoadTramType::Road => layout::road::ROAD_BITS,
            RoadTramType::Tram => layout::road::TRAM_BITS,
        };
        RoadBits::from_bits_truncate(self.cell().get(field) as u8)
    }

    /// Pieces of both layers combined.
    fn all_road_bits(&self) -> RoadBits {
        self.road_bits(RoadTramType::Road) | self.road_bits(RoadTramType::Tram)
    }

    /// Road type of one layer, [`RoadTypeId::INVALID`] when absent.
    fn road_type(&self, rtt: RoadTramType) -> RoadTypeId {
        assert!(self.may_have_road(), "tile cannot carry road");
        let field = match rtt {
            RoadTramType::Road => layout::road::ROAD_TYPE,
            RoadTramType::Tram => layout::road::TRAM_TYPE,
        };
        RoadTypeId(self.cell().get(field) as u8)
    }

    /// Whether the layer is present.
    fn has_tile_road_type(&self, rtt: RoadTramType) -> bool {
        self.road_type(rtt).is_valid()
    }

    /// Road types of both present layers. Empty on tiles that cannot
    /// carry road.
    fn present_road_types(&self) -> RoadTypes {
        if !self.may_have_road() {
            return RoadTypes::EMPTY;
        }
        RoadTramType::ALL.iter().map(|&rtt| self.road_type(rtt)).collect()
    }

    /// Whether any present layer has a type in `types`.
    fn has_tile_any_road_type(&self, types: RoadTypes) -> bool {
        self.present_road_types().intersects(types)
    }

    /// Owner of one layer.
    ///
    /// The road owner is the tile owner on normal roads and has its own
    /// field elsewhere. A tram owner of [`Owner::NONE`] is stored as
    /// [`Owner::TOWN`], so trams are never town-owned.
    fn road_owner(&self, rtt: RoadTramType) -> Owner {
        assert!(self.may_have_road(), "tile cannot carry road");
        match rtt {
            RoadTramType::Road if self.is_normal_road_tile() => self.owner(),
            RoadTramType::Road => Owner(self.cell().get(layout::road::OWNER) as u8),
            RoadTramType::Tram => match Owner(self.cell().get(layout::road::TRAM_OWNER) as u8) {
                Owner::TOWN => Owner::NONE,
                o => o,
            },
        }
    }

    /// Whether the present layer `rtt` belongs to `owner`.
    fn is_road_owner(&self, rtt: RoadTramType, owner: Owner) -> bool {
        assert!(self.has_tile_road_type(rtt), "road layer not present");
        self.road_owner(rtt) == owner
    }

    /// Whether the road layer is present and owned by a town.
    fn has_town_owned_road(&self) -> bool {
        self.has_tile_road_type(RoadTramType::Road)
            && self.is_road_owner(RoadTramType::Road, Owner::TOWN)
    }

    /// Town a normal road belongs to.
    fn road_town(&self) -> TownId {
        assert!(self.is_normal_road_tile(), "not a normal road tile");
        TownId(self.cell().get(layout::road::TOWN) as u16)
    }

    /// One-way restriction of a normal road.
    fn disallowed_road_directions(&self) -> DisallowedRoadDirections {
        assert!(self.is_normal_road(), "not a normal road tile");
        decode(self.cell().get(layout::road::DISALLOWED_DIRECTIONS))
    }

    /// Whether the road lies on snow or desert.
    fn is_on_snow_or_desert(&self) -> bool {
        assert!(self.is_tile_type(TileType::Road), "not a road tile");
        self.cell().flag(layout::road::SNOW)
    }

    /// Exit direction of a road depot.
    fn road_depot_direction(&self) -> DiagDirection {
        assert!(self.is_road_depot_tile(), "not a road depot tile");
        decode(self.cell().get(layout::road::DEPOT_DIRECTION))
    }

    /// Depot id of a road depot.
    fn road_depot_id(&self) -> DepotId {
        assert!(self.is_road_depot_tile(), "not a road depot tile");
        DepotId(self.cell().get(layout::road::DEPOT_ID) as u16)
    }
}

impl<T: AsCell + ?Sized> RoadTile for T {}

/// Write accessors and constructors for road cells.
pub trait RoadTileMut: AsCellMut + RoadTile + CommonTileMut {
    /// Replace the pieces of one layer.
    ///
    /// # Panics
    ///
    /// Non-empty pieces need the layer's road type to be present.
    fn set_road_bits(&mut self, bits: RoadBits, rtt: RoadTramType) {
        assert!(self.is_normal_road(), "road bits on a non-normal road tile");
        assert!(
            bits.is_empty() || self.has_tile_road_type(rtt),
            "road bits for an absent {rtt:?} layer"
        );
        let field = match rtt {
            RoadTramType::Road => layout::road::ROAD_BITS,
            RoadTramType::Tram => layout::road::TRAM_BITS,
        };
        self.cell_mut().set(field, u32::from(bits.bits()));
    }

    /// Replace the road type of one layer without consulting a table.
    fn set_road_type(&mut self, rtt: RoadTramType, rt: RoadTypeId) {
        assert!(self.may_have_road(), "tile cannot carry road");
        assert!(rt.0 <= RoadTypeId::INVALID.0, "road type {rt} does not fit");
        let field = match rtt {
            RoadTramType::Road => layout::road::ROAD_TYPE,
            RoadTramType::Tram => layout::road::TRAM_TYPE,
        };
        self.cell_mut().set(field, u32::from(rt.0));
    }

    /// Replace the road type of one layer after checking it against
    /// `table`. Nothing is written on error.
    fn set_road_type_checked(
        &mut self,
        table: &RoadTypeTable,
        rtt: RoadTramType,
        rt: RoadTypeId,
    ) -> Result<(), RoadTypeError> {
        table.check(rt, rtt)?;
        self.set_road_type(rtt, rt);
        Ok(())
    }

    /// Replace both road types.
    fn set_road_types(&mut self, road: RoadTypeId, tram: RoadTypeId) {
        self.set_road_type(RoadTramType::Road, road);
        self.set_road_type(RoadTramType::Tram, tram);
    }

    /// Change the owner of one layer.
    fn set_road_owner(&mut self, rtt: RoadTramType, owner: Owner) {
        match rtt {
            RoadTramType::Road if self.is_normal_road_tile() => self.set_owner(owner),
            RoadTramType::Road => self
                .cell_mut()
                .set(layout::road::OWNER, u32::from(owner.0)),
            RoadTramType::Tram => {
                let stored = if owner == Owner::NONE { Owner::TOWN } else { owner };
                assert!(stored.0 <= Owner::TOWN.0, "tram owner {owner} cannot be stored");
                self.cell_mut()
                    .set(layout::road::TRAM_OWNER, u32::from(stored.0));
            }
        }
    }

    /// Change the one-way restriction of a normal road.
    fn set_disallowed_road_directions(&mut self, drd: DisallowedRoadDirections) {
        assert!(self.is_normal_road(), "not a normal road tile");
        self.cell_mut()
            .set(layout::road::DISALLOWED_DIRECTIONS, drd as u32);
    }

    /// Flip the snow or desert flag.
    fn toggle_snow_or_desert(&mut self) {
        let on = self.is_on_snow_or_desert();
        self.cell_mut().set_flag(layout::road::SNOW, !on);
    }

    /// Change the exit direction of a road depot.
    fn set_road_depot_exit_direction(&mut self, dir: DiagDirection) {
        assert!(self.is_road_depot_tile(), "not a road depot tile");
        self.cell_mut()
            .set(layout::road::DEPOT_DIRECTION, dir as u32);
    }

    /// Make a normal road tile.
    ///
    /// `bits` go to each layer whose road type is present. The roadside
    /// starts barren, the roadworks counter at zero and the road is
    /// two-way.
    fn make_road_normal(
        &mut self,
        bits: RoadBits,
        road_type: RoadTypeId,
        tram_type: RoadTypeId,
        town: TownId,
        road_owner: Owner,
        tram_owner: Owner,
    ) {
        self.reset_to(TileType::Road);
        self.set_owner(road_owner);
        let cell = self.cell_mut();
        cell.set(layout::road::TOWN, u32::from(town.0));
        cell.set(layout::road::TILE_TYPE, RoadTileType::Normal as u32);
        if road_type.is_valid() {
            cell.set(layout::road::ROAD_BITS, u32::from(bits.bits()));
        }
        if tram_type.is_valid() {
            cell.set(layout::road::TRAM_BITS, u32::from(bits.bits()));
        }
        self.set_road_types(road_type, tram_type);
        self.set_road_owner(RoadTramType::Tram, tram_owner);
    }

    /// Make a road stop of `station_type` owned by `owner` in both
    /// layers.
    fn make_road_stop(
        &mut self,
        station_type: StationType,
        id: StationId,
        owner: Owner,
        road_type: RoadTypeId,
        tram_type: RoadTypeId,
    ) {
        assert!(station_type.is_road_stop(), "{station_type:?} is not a road stop");
        self.make_station(station_type, id, owner, 0, WaterClass::Invalid);
        self.set_road_types(road_type, tram_type);
        self.set_road_owner(RoadTramType::Road, owner);
        self.set_road_owner(RoadTramType::Tram, owner);
    }

    /// Make a road depot. `table` decides whether `rt` is stored in the
    /// road or the tram layer; the other layer is left absent.
    fn make_road_depot(
        &mut self,
        owner: Owner,
        depot: DepotId,
        dir: DiagDirection,
        rt: RoadTypeId,
        table: &RoadTypeTable,
    ) -> Result<(), RoadTypeError> {
        let rtt = table.mode(rt)?;
        self.reset_to(TileType::Road);
        self.set_owner(owner);
        let cell = self.cell_mut();
        cell.set(layout::road::DEPOT_ID, u32::from(depot.0));
        cell.set(layout::road::TILE_TYPE, RoadTileType::Depot as u32);
        cell.set(layout::road::DEPOT_DIRECTION, dir as u32);
        cell.set(layout::road::OWNER, u32::from(owner.0));
        self.set_road_types(RoadTypeId::INVALID, RoadTypeId::INVALID);
        self.set_road_type(rtt, rt);
        self.set_road_owner(RoadTramType::Tram, owner);
        trace!(tile = self.index().0, %depot, ?rtt, "road depot built");
        Ok(())
    }
}

impl<T: AsCellMut + ?Sized> RoadTileMut for T {}
