//! Named bit positions for every persisted field.
//!
//! These constants are the on-disk format. Changing any of them breaks
//! save compatibility and needs a new [`FORMAT_VERSION`](crate::FORMAT_VERSION)
//! plus a migration.

use crate::cell::{Field, Slot};

// ── Common to all tile types ────────────────────────────────────

/// Coarse [`TileType`](strata_core::TileType).
pub const TILE_TYPE: Field = Field::new(Slot::Kind, 4, 4);
/// Set while the tile has associated layer cells.
pub const ASSOCIATED_TILE: Field = Field::bit(Slot::Kind, 3);
/// [`TropicZone`](strata_core::TropicZone).
pub const TROPIC_ZONE: Field = Field::new(Slot::Kind, 0, 2);
/// Terrain height.
pub const HEIGHT: Field = Field::whole(Slot::Height);
/// Tile owner.
pub const OWNER: Field = Field::new(Slot::M1, 0, 5);
/// [`WaterClass`](strata_core::WaterClass) on water, station, industry
/// and object tiles.
pub const WATER_CLASS: Field = Field::new(Slot::M1, 5, 2);
/// Ships may dock here (water, station and tunnel/bridge tiles).
pub const DOCKING: Field = Field::bit(Slot::M1, 7);
/// The metro word on every non-void tile.
pub const METRO_WORD: Field = Field::whole(Slot::M8);
/// Metro owner plus one, zero for none. Absent on houses.
pub const METRO_OWNER: Field = Field::new(Slot::M9, 12, 4);
/// The part of `m9` that belongs to the tile type rather than the metro.
pub const M9_PAYLOAD: Field = Field::new(Slot::M9, 0, 12);

/// Water tiles.
pub mod water {
    use super::*;

    /// Ship depot id.
    pub const DEPOT_ID: Field = Field::whole(Slot::M2);
    /// The tile never floods its neighbours.
    pub const NON_FLOODING: Field = Field::bit(Slot::M3, 0);
    /// Animation randomness.
    pub const RANDOM_BITS: Field = Field::whole(Slot::M4);
    /// Clear, coast, lock or depot.
    pub const TILE_TYPE: Field = Field::new(Slot::M5, 4, 4);
    /// Lock facing direction.
    pub const LOCK_DIRECTION: Field = Field::new(Slot::M5, 0, 2);
    /// Middle, lower or upper lock part.
    pub const LOCK_PART: Field = Field::new(Slot::M5, 2, 2);
    /// North or south ship depot part.
    pub const DEPOT_PART: Field = Field::bit(Slot::M5, 0);
    /// Ship depot axis.
    pub const DEPOT_AXIS: Field = Field::bit(Slot::M5, 1);
}

/// Road tiles.
pub mod road {
    use super::*;

    /// Town a normal road belongs to.
    pub const TOWN: Field = Field::whole(Slot::M2);
    /// Road depot id.
    pub const DEPOT_ID: Field = Field::whole(Slot::M2);
    /// Tram pieces (also on road stops and tunnels/bridges).
    pub const TRAM_BITS: Field = Field::new(Slot::M3, 0, 4);
    /// Tram owner; "none" is stored as the town owner.
    pub const TRAM_OWNER: Field = Field::new(Slot::M3, 4, 4);
    /// Road-mode road type.
    pub const ROAD_TYPE: Field = Field::new(Slot::M4, 0, 6);
    /// Normal or depot.
    pub const TILE_TYPE: Field = Field::new(Slot::M5, 6, 2);
    /// Road pieces of a normal road.
    pub const ROAD_BITS: Field = Field::new(Slot::M5, 0, 4);
    /// One-way restriction of a normal road.
    pub const DISALLOWED_DIRECTIONS: Field = Field::new(Slot::M5, 4, 2);
    /// Exit direction of a road depot.
    pub const DEPOT_DIRECTION: Field = Field::new(Slot::M5, 0, 2);
    /// Roadside decoration.
    pub const ROADSIDE: Field = Field::new(Slot::M6, 3, 3);
    /// Roadworks progress on a normal road.
    pub const ROADWORKS_COUNTER: Field = Field::new(Slot::M7, 0, 4);
    /// Road-mode owner on non-normal road tiles.
    pub const OWNER: Field = Field::new(Slot::M7, 0, 5);
    /// Road lies on snow or desert.
    pub const SNOW: Field = Field::bit(Slot::M7, 5);
    /// Tram-mode road type.
    pub const TRAM_TYPE: Field = Field::new(Slot::M9, 0, 6);
}

/// Station tiles.
pub mod station {
    use super::*;

    /// Station id (hangars resolve to their airport through it).
    pub const ID: Field = Field::whole(Slot::M2);
    /// Graphics index.
    pub const GFX: Field = Field::whole(Slot::M5);
    /// Rail platform reservation.
    pub const RESERVATION: Field = Field::bit(Slot::M6, 2);
    /// [`StationType`](crate::StationType).
    pub const TYPE: Field = Field::new(Slot::M6, 3, 4);
    /// This airport tile is a hangar.
    pub const HANGAR: Field = Field::bit(Slot::M6, 7);
}

/// Tunnel entrances and bridge heads.
pub mod tunnel_bridge {
    use super::*;

    /// [`TransportType`](strata_core::TransportType) carried.
    pub const TRANSPORT: Field = Field::new(Slot::M5, 2, 2);
}

/// Railway tiles.
pub mod rail {
    use super::*;

    /// Rail depot id.
    pub const DEPOT_ID: Field = Field::whole(Slot::M2);
    /// Normal, signals or depot.
    pub const TILE_TYPE: Field = Field::new(Slot::M5, 6, 2);
    /// Track pieces of a normal rail tile.
    pub const TRACK_BITS: Field = Field::new(Slot::M5, 0, 6);
    /// Exit direction of a rail depot.
    pub const DEPOT_DIRECTION: Field = Field::new(Slot::M5, 0, 2);
    /// Rail type (also on rail stations and rail tunnels/bridges).
    pub const RAIL_TYPE: Field = Field::new(Slot::M9, 0, 6);
}

/// Houses.
pub mod house {
    use super::*;

    /// House type. Takes all of `m9`, so houses carry no metro owner.
    pub const TYPE: Field = Field::whole(Slot::M9);
}
