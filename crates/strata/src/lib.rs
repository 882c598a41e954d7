//! Strata: bit-packed tile encodings for simulation maps.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Strata sub-crates and adds the tile-kind classifier. For most
//! users, adding `strata` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut map = TileMap::new(MapConfig::default()).unwrap();
//! let t = map.tile_xy(3, 4).unwrap();
//!
//! let mut tile = map.tile_mut(t);
//! tile.make_sea();
//! tile.set_metro_track_bits(TrackBits::HORZ);
//! tile.set_metro_has_signals(true);
//! assert!(tile.try_reserve_metro_track(Track::Upper));
//! assert!(tile.try_reserve_metro_track(Track::Lower));
//!
//! assert_eq!(classify(&map.tile(t)), TileKind::Water(WaterClass::Sea));
//! assert_eq!(map.tile(t).metro_reservation(), TrackBits::HORZ);
//!
//! let mut bytes = Vec::new();
//! strata::map::save(&map, &mut bytes).unwrap();
//! let loaded = strata::map::load(&mut bytes.as_slice()).unwrap();
//! assert_eq!(loaded, map);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Ids, directions, track geometry, road bits, coarse tile types |
//! | [`map`] | `strata-map` | Cells, field layout, the tile grid, handles, save/load |
//! | [`water`] | `strata-water` | Water, coast, lock and ship depot encoding |
//! | [`road`] | `strata-road` | Road and tram layers, roadside, roadworks, road types |
//! | [`metro`] | `strata-metro` | Metro word, reservation protocol, signals, metro owner |
//! | [`depot`] | `strata-depot` | Rail depots and depot lookup |
//! | [`kind`] | this crate | [`TileKind`] and [`classify`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kind;

pub use kind::{classify, classify_all, TileKind};

/// Ids, directions and track geometry (`strata-core`).
pub use strata_core as types;

/// Cell storage, the tile grid and persistence (`strata-map`).
pub use strata_map as map;

/// Water tile encoding (`strata-water`).
pub use strata_water as water;

/// Road tile encoding (`strata-road`).
pub use strata_road as road;

/// Metro layer encoding (`strata-metro`).
pub use strata_metro as metro;

/// Rail depots and depot lookup (`strata-depot`).
pub use strata_depot as depot;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
///
/// Brings in the map, every encoder's tile traits and the vocabulary
/// types they take.
pub mod prelude {
    // Core types
    pub use strata_core::{
        Axis, DepotId, DiagDirection, Owner, RailTypeId, RoadBits, RoadTramType, RoadTypeId,
        StationId, TileIndex, TileType, TownId, Track, TrackBits, Trackdir, TransportType,
        VehicleType, WaterClass,
    };

    // Map
    pub use strata_map::{
        AsCell, AsCellMut, CodecError, CommonTile, CommonTileMut, MapConfig, MapError,
        StationType, Tile, TileMap, TileMut,
    };

    // Encoders
    pub use strata_depot::{DepotDestination, RailTile, RailTileMut};
    pub use strata_metro::{
        MetroOwnerTile, MetroOwnerTileMut, MetroState, MetroTile, MetroTileMut, Signal,
    };
    pub use strata_road::{
        RoadTile, RoadTileMut, RoadTypeTable, Roadside, RoadsideTile, RoadsideTileMut,
    };
    pub use strata_water::{LockWaterClasses, WaterTile, WaterTileMut};

    // Classification
    pub use crate::kind::{classify, TileKind};
}
