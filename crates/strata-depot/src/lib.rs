//! Rail depots and depot lookup for Strata.
//!
//! Depots live in four different cell types: rail depots on railway
//! cells, road depots on road cells, ship depots on water cells and
//! hangars on airport station cells. [`rail`] encodes railway cells;
//! [`depot`] answers map-level questions ("is there a depot here, whose
//! is it, where do orders to it go") by searching every cell of a tile.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod depot;
pub mod rail;

pub use depot::{
    depot_destination_index, depot_index, depot_owner, depot_tile, depot_vehicle_type,
    find_depot_tile, is_depot_owner, is_depot_tile, is_depot_type_tile, DepotDestination,
};
pub use rail::{RailTile, RailTileMut, RailTileType};
pub use strata_water::other_ship_depot_tile;
