//! Map and metro fixtures.
//!
//! - [`small_map`]: a 64x64 map of clear land
//! - [`mixed_map`]: every tile kind the encoders know, placed at random,
//!   with random metro tracks, reservations and owners on top
//! - [`random_track_bits`], [`random_signalable_tracks`],
//!   [`random_metro_state`]: inputs for metro property checks

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{
    DiagDirection, HouseId, Owner, RailTypeId, RoadBits, RoadTypeId, StationId, TileIndex,
    TileType, Track, TrackBits, TownId, TransportType, WaterClass,
};
use strata_map::{AsCell, Cell, CommonTileMut, MapConfig, StationType, TileMap, TileMut};
use strata_metro::{
    MetroOwnerTile, MetroOwnerTileMut, MetroState, MetroTileMut, Signal, SignalState, SignalType,
    SignalVariant,
};
use strata_road::{RoadTileMut, Roadside, RoadsideTileMut};
use strata_water::{make_lock, LockWaterClasses, WaterTileMut};

/// Deterministic RNG for `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A 64x64 map of clear land.
pub fn small_map() -> TileMap {
    // The default dimensions are always valid.
    match TileMap::new(MapConfig::default()) {
        Ok(map) => map,
        Err(e) => panic!("default map config rejected: {e}"),
    }
}

/// Any track mask, including crossings and the empty mask.
pub fn random_track_bits(rng: &mut impl Rng) -> TrackBits {
    TrackBits::from_bits_truncate(rng.gen_range(0..64))
}

/// A single track or a parallel pair: the masks a signaled tile can hold.
pub fn random_signalable_tracks(rng: &mut impl Rng) -> TrackBits {
    match rng.gen_range(0..8u8) {
        6 => TrackBits::HORZ,
        7 => TrackBits::VERT,
        v => track(v).bits(),
    }
}

fn track(v: u8) -> Track {
    match Track::try_from(v % 6) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    }
}

fn random_signal(rng: &mut impl Rng) -> Signal {
    Signal {
        signal_type: if rng.gen() {
            SignalType::PbsOneWay
        } else {
            SignalType::Pbs
        },
        variant: if rng.gen() {
            SignalVariant::Semaphore
        } else {
            SignalVariant::Electric
        },
        state: if rng.gen() {
            SignalState::Green
        } else {
            SignalState::Red
        },
        side: rng.gen(),
    }
}

/// A random storable metro state, signaled or not, with a random legal
/// reservation.
pub fn random_metro_state(rng: &mut impl Rng) -> MetroState {
    let signaled = rng.gen_bool(0.3);
    let tracks = if signaled {
        random_signalable_tracks(rng)
    } else {
        random_track_bits(rng)
    };
    let mut state = MetroState::default().with_track_bits(tracks);
    if signaled {
        state = strata_metro::reencode(state, true).unwrap_or(state);
        if state.has_signals() {
            state = state.with_signal(random_signal(rng));
        }
    }
    let reserved = match tracks.first() {
        Some(t) if rng.gen_bool(0.5) => {
            let pair = tracks & (TrackBits::HORZ | TrackBits::VERT);
            if rng.gen() && (pair == TrackBits::HORZ || pair == TrackBits::VERT) {
                pair
            } else {
                t.bits()
            }
        }
        _ => TrackBits::NONE,
    };
    state.with_reserved(reserved)
}

/// Counts of what [`mixed_map`] placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MixedMapStats {
    pub water: usize,
    pub roads: usize,
    pub stations: usize,
    pub houses: usize,
    pub locks: usize,
    pub road_layers: usize,
    pub metro_tiles: usize,
}

/// A map with water, locks, roads, road stops, stations, houses, tunnels
/// and bridges, road layers over water, and metro tracks.
///
/// The border row and column stay clear so that locks always fit.
pub fn mixed_map(seed: u64) -> (TileMap, MixedMapStats) {
    let mut rng = seeded_rng(seed);
    let mut map = small_map();
    let mut stats = MixedMapStats::default();
    let size = map.size_x();

    for y in 1..size - 1 {
        for x in 1..size - 1 {
            let Some(t) = map.tile_xy(x, y) else { continue };
            let roll = rng.gen_range(0..100u32);
            let owner = Owner::company(rng.gen_range(0..Owner::MAX_COMPANIES));
            let mut tile = map.tile_mut(t);
            match roll {
                0..=14 => {
                    place_water(&mut tile, &mut rng, owner);
                    stats.water += 1;
                }
                15..=34 => {
                    tile.make_road_normal(
                        RoadBits::from_bits_truncate(rng.gen_range(1..16)),
                        RoadTypeId(rng.gen_range(0..8)),
                        RoadTypeId::INVALID,
                        TownId(rng.gen_range(0..100)),
                        Owner::TOWN,
                        Owner::NONE,
                    );
                    tile.set_roadside(Roadside::Paved);
                    if rng.gen_bool(0.2) {
                        tile.start_road_works();
                        for _ in 0..rng.gen_range(0..15) {
                            tile.increase_road_works_counter();
                        }
                    }
                    stats.roads += 1;
                }
                35..=39 => {
                    tile.make_road_stop(
                        StationType::Bus,
                        StationId(rng.gen_range(0..500)),
                        owner,
                        RoadTypeId(0),
                        RoadTypeId::INVALID,
                    );
                    stats.stations += 1;
                }
                40..=44 => {
                    let ty = if rng.gen() {
                        StationType::Rail
                    } else {
                        StationType::Airport
                    };
                    let id = StationId(rng.gen_range(0..500));
                    tile.make_station(ty, id, owner, 0, WaterClass::Invalid);
                    if ty == StationType::Airport && rng.gen_bool(0.3) {
                        tile.set_hangar(true);
                    }
                    stats.stations += 1;
                }
                45..=54 => {
                    tile.make_house(HouseId(rng.gen()));
                    stats.houses += 1;
                }
                55..=57 => {
                    tile.make_tunnel_bridge(TransportType::Road, owner);
                }
                _ => {}
            }
            if rng.gen_bool(0.25) {
                place_metro(&mut tile, &mut rng, owner);
            }
        }
    }

    // A few locks, then a column of sea tiles carrying road layers.
    for i in 0..4u32 {
        let Some(t) = map.tile_xy(8 + i * 12, 8 + i * 10) else { continue };
        let dir = DiagDirection::ALL[(i % 4) as usize];
        let Ok(classes) = LockWaterClasses::from_surroundings(&map, t, dir) else {
            continue;
        };
        if make_lock(&mut map, t, Owner::company(1), dir, classes).is_ok() {
            stats.locks += 1;
        }
    }
    for y in (2..size - 2).step_by(9) {
        let Some(t) = map.tile_xy(size / 2, y) else { continue };
        if add_road_layer(&mut map, t) {
            stats.road_layers += 1;
        }
    }

    stats.metro_tiles = map
        .tiles()
        .filter(|tile| !tile.is_tile_type(TileType::Void))
        .filter(|tile| tile.cell().get(strata_map::layout::METRO_WORD) != 0)
        .count();
    (map, stats)
}

fn place_water(tile: &mut TileMut<'_>, rng: &mut impl Rng, owner: Owner) {
    match rng.gen_range(0..4u8) {
        0 => tile.make_sea(),
        1 => tile.make_river(rng.gen()),
        2 => tile.make_canal(owner, rng.gen()),
        _ => tile.make_shore(),
    }
}

fn place_metro(tile: &mut TileMut<'_>, rng: &mut impl Rng, owner: Owner) {
    if tile.is_tile_type(TileType::Void) {
        return;
    }
    tile.set_metro_state(random_metro_state(rng));
    tile.set_metro_rail_type(RailTypeId(rng.gen_range(0..16)));
    if !tile.is_tile_type(TileType::House) && !tile.is_metro_owner_derived() {
        tile.set_metro_owner(owner);
    }
}

/// Turn `t` into sea with a straight road layer on top.
fn add_road_layer(map: &mut TileMap, t: TileIndex) -> bool {
    map.tile_mut(t).make_sea();
    let mut cell = Cell::new(TileType::Road);
    TileMut::new(t, &mut cell).make_road_normal(
        RoadBits::X,
        RoadTypeId(0),
        RoadTypeId::INVALID,
        TownId::INVALID,
        Owner::company(0),
        Owner::NONE,
    );
    map.push_layer(t, cell).is_ok()
}
