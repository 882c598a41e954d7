//! Benchmark profiles for the Strata tile encodings.
//!
//! - [`metro_profile`]: a map with random metro state on every tile
//! - [`straight_path`]: a row of tiles carrying one straight metro track,
//!   for reservation sweeps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{TileIndex, TrackBits};
use strata_map::{MapConfig, MapError, TileMap};
use strata_metro::MetroTileMut;
use strata_test_utils::{random_metro_state, seeded_rng};

/// A `2^log x 2^log` map with a random metro state on every tile.
pub fn metro_profile(log: u8, seed: u64) -> Result<TileMap, MapError> {
    let mut map = TileMap::new(MapConfig::new(log, log)?)?;
    let mut rng = seeded_rng(seed);
    for i in 0..map.len() as u32 {
        let state = random_metro_state(&mut rng);
        map.tile_mut(TileIndex(i)).set_metro_state(state);
    }
    Ok(map)
}

/// Lay an X-axis track along row `y` and return its tiles, west to east.
pub fn straight_path(map: &mut TileMap, y: u32) -> Vec<TileIndex> {
    let path: Vec<TileIndex> = (0..map.size_x()).filter_map(|x| map.tile_xy(x, y)).collect();
    for &t in &path {
        map.tile_mut(t).set_metro_track_bits(TrackBits::X);
    }
    path
}
