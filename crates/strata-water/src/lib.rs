//! Water tile encoding for Strata.
//!
//! Water tiles come in four subtypes (clear water, coast, lock part,
//! ship depot part) sharing one cell layout. Single-cell accessors and
//! constructors are the [`WaterTile`] / [`WaterTileMut`] extension
//! traits; the multi-cell operations (locks, depot partners) take the
//! whole [`TileMap`](strata_map::TileMap).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lock;
pub mod water;

pub use lock::{make_lock, remove_lock, LockWaterClasses};
pub use strata_core::WaterClass;
pub use water::{
    other_ship_depot_tile, ship_depot_north_tile, DepotPart, LockPart, WaterTile, WaterTileMut,
    WaterTileType,
};
