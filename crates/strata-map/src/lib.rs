//! Cell storage adapter and tile map for Strata.
//!
//! A [`TileMap`] owns a dense grid of fixed-width [`Cell`] records plus
//! sparse per-tile layers of associated cells. Encoders never touch the
//! raw slots directly: every packed value is described by a named
//! [`Field`] in [`layout`] and read or written through [`Cell::get`] /
//! [`Cell::set`].
//!
//! # Architecture
//!
//! - [`Cell`], [`Slot`] and [`Field`] are the storage primitives
//! - [`TileMap`] owns cells, coordinate arithmetic and layers
//! - [`Tile`] / [`TileMut`] are position-plus-reference handles that
//!   encoder crates extend with their own traits
//! - [`CommonTile`] / [`CommonTileMut`] hold the accessors shared by every
//!   tile kind (owner, station, tunnel or bridge, house, clear land)
//! - [`codec`] persists maps; [`legacy`] and [`migrate`] load the older
//!   format exactly once
//!
//! # Format
//!
//! ```text
//! [MAGIC "STRA"] [VERSION u8] [log_x u8] [log_y u8]
//! [Cell 0] ... [Cell N-1]
//! [layer count u32] { [index u32] [count u8] [Cell]... }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod codec;
pub mod common;
pub mod config;
pub mod error;
pub mod handle;
pub mod layout;
pub mod legacy;
pub mod map;
pub mod migrate;

pub use cell::{Cell, Field, Slot};
pub use codec::{load, save};
pub use common::{CommonTile, CommonTileMut, StationType};
pub use config::MapConfig;
pub use error::{CodecError, MapError};
pub use handle::{AsCell, AsCellMut, Tile, TileMut};
pub use map::TileMap;
pub use migrate::MigrationReport;

/// Magic bytes at the start of every saved map.
pub const MAGIC: [u8; 4] = *b"STRA";

/// Current binary format version.
///
/// History:
/// - v1: 12-byte cells; house type, rail type and tram type packed in `m8`
/// - v2: 14-byte cells; `m8` holds the metro word, those fields move to `m9`
pub const FORMAT_VERSION: u8 = 2;

/// The oldest format version that [`load`] still accepts.
pub const LEGACY_FORMAT_VERSION: u8 = 1;
