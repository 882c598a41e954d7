//! Depot lookup across tile layers.
//!
//! A depot can sit in the base cell or in an associated layer, so these
//! functions take the whole map and search the railway, road, water and
//! station cells of a tile in that order.

use std::fmt;

use strata_core::{DepotId, Owner, StationId, TileIndex, TileType, TransportType, VehicleType};
use strata_map::{AsCell, CommonTile, Tile, TileMap};
use strata_road::RoadTile;
use strata_water::WaterTile;

use crate::rail::RailTile;

/// Cell types searched for a depot, in search order.
const DEPOT_LAYERS: [TileType; 4] = [
    TileType::Railway,
    TileType::Road,
    TileType::Water,
    TileType::Station,
];

/// Where vehicles heading for a depot are sent.
///
/// Hangars have no depot of their own and resolve to their airport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepotDestination {
    /// A rail, road or ship depot.
    Depot(DepotId),
    /// The airport owning a hangar.
    Station(StationId),
}

impl fmt::Display for DepotDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepotDestination::Depot(id) => write!(f, "depot {id}"),
            DepotDestination::Station(id) => write!(f, "station {id}"),
        }
    }
}

fn is_depot_cell(tile: &Tile<'_>) -> bool {
    match tile.tile_type() {
        TileType::Railway => tile.is_rail_depot(),
        TileType::Road => tile.is_road_depot(),
        TileType::Water => tile.is_ship_depot(),
        TileType::Station => tile.is_hangar(),
        _ => false,
    }
}

/// The depot cell on `t`, if any.
pub fn find_depot_tile(map: &TileMap, t: TileIndex) -> Option<Tile<'_>> {
    DEPOT_LAYERS
        .iter()
        .filter_map(|&ty| map.layer_tile(t, ty))
        .find(is_depot_cell)
}

/// Whether any cell on `t` is a depot or hangar.
pub fn is_depot_tile(map: &TileMap, t: TileIndex) -> bool {
    find_depot_tile(map, t).is_some()
}

/// Whether `t` holds a depot for `transport`.
pub fn is_depot_type_tile(map: &TileMap, t: TileIndex, transport: TransportType) -> bool {
    let ty = match transport {
        TransportType::Rail => TileType::Railway,
        TransportType::Road => TileType::Road,
        TransportType::Water => TileType::Water,
        TransportType::Air => TileType::Station,
    };
    map.layer_tile(t, ty).is_some_and(|tile| is_depot_cell(&tile))
}

/// The depot cell on `t`.
///
/// # Panics
///
/// `t` must hold a depot.
pub fn depot_tile(map: &TileMap, t: TileIndex) -> Tile<'_> {
    match find_depot_tile(map, t) {
        Some(tile) => tile,
        None => panic!("no depot on tile {t}"),
    }
}

/// Id of the rail, road or ship depot on `t`.
///
/// # Panics
///
/// `t` must hold a rail, road or ship depot. Hangars have no depot id.
pub fn depot_index(map: &TileMap, t: TileIndex) -> DepotId {
    let tile = depot_tile(map, t);
    match tile.tile_type() {
        TileType::Railway => tile.rail_depot_id(),
        TileType::Road => tile.road_depot_id(),
        TileType::Water => tile.ship_depot_id(),
        _ => panic!("hangar on tile {t} has no depot id"),
    }
}

/// Destination id for orders to the depot on `t`.
pub fn depot_destination_index(map: &TileMap, t: TileIndex) -> DepotDestination {
    let tile = depot_tile(map, t);
    if tile.is_hangar() {
        DepotDestination::Station(tile.station_id())
    } else {
        DepotDestination::Depot(depot_index(map, t))
    }
}

/// Kind of vehicle served by the depot on `t`.
pub fn depot_vehicle_type(map: &TileMap, t: TileIndex) -> VehicleType {
    match depot_tile(map, t).tile_type() {
        TileType::Railway => VehicleType::Train,
        TileType::Road => VehicleType::Road,
        TileType::Water => VehicleType::Ship,
        _ => VehicleType::Aircraft,
    }
}

/// Owner of the depot cell on `t`.
pub fn depot_owner(map: &TileMap, t: TileIndex) -> Owner {
    depot_tile(map, t).owner()
}

/// Whether `owner` owns the depot on `t`.
pub fn is_depot_owner(map: &TileMap, t: TileIndex, owner: Owner) -> bool {
    depot_owner(map, t) == owner
}
