//! Core types for the Strata tile-encoding framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary every encoding crate shares: strongly-typed ids,
//! diagonal directions and axes, rail track geometry, road bits, the
//! coarse [`TileType`] discriminant, water classes and the [`BitRange`]
//! primitive that all packed layouts are written in terms of.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod direction;
pub mod error;
pub mod id;
pub mod roadbits;
pub mod tile_type;
pub mod track;
pub mod transport;
pub mod water_class;

pub use bits::BitRange;
pub use direction::{Axis, DiagDirection};
pub use error::DecodeError;
pub use id::{DepotId, HouseId, Owner, RailTypeId, RoadTypeId, StationId, TileIndex, TownId};
pub use roadbits::{RoadBits, RoadTramType};
pub use tile_type::TileType;
pub use track::{tracks_overlap, DoubleTrackDirection, Track, TrackBits, Trackdir};
pub use transport::{TransportType, VehicleType};
pub use water_class::{TropicZone, WaterClass};
