//! Road tile encoding for Strata.
//!
//! A road-capable cell carries two independent layers, road and tram,
//! each with its own pieces, road type and owner. Normal road tiles also
//! carry roadside decoration and the roadworks counter; road depots
//! carry an exit direction instead.
//!
//! The road layer also lives on road stops and on road tunnels and
//! bridges; [`RoadTile::may_have_road`] is the gate for the per-layer
//! accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod road;
pub mod roadworks;

pub use config::RoadTypeTable;
pub use error::RoadTypeError;
pub use road::{DisallowedRoadDirections, RoadTile, RoadTileMut, RoadTileType, RoadTypes};
pub use roadworks::{Roadside, RoadsideTile, RoadsideTileMut, ROADWORKS_FINAL_STAGE};
pub use strata_core::{RoadBits, RoadTramType, RoadTypeId};
