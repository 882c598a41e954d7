//! Criterion micro-benchmarks for the metro word and reservation protocol.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::{metro_profile, straight_path};
use strata_core::{RailTypeId, TileIndex, Track};
use strata_metro::{reencode, MetroTile, MetroTileMut, MetroWord};
use strata_test_utils::{random_metro_state, seeded_rng};

/// Benchmark: Decode the metro state of every tile on a 256x256 map.
fn bench_decode_metro_256(c: &mut Criterion) {
    let map = metro_profile(8, 42).unwrap();

    c.bench_function("decode_metro_256", |b| {
        b.iter(|| {
            for tile in map.tiles() {
                black_box(tile.metro_state());
            }
        });
    });
}

/// Benchmark: Encode 1000 pre-generated states.
fn bench_encode_metro_1k(c: &mut Criterion) {
    let mut rng = seeded_rng(7);
    let states: Vec<_> = (0..1000).map(|_| random_metro_state(&mut rng)).collect();

    c.bench_function("encode_metro_1k", |b| {
        b.iter(|| {
            for state in &states {
                black_box(MetroWord::encode(state, RailTypeId(3)));
            }
        });
    });
}

/// Benchmark: Switch layouts back and forth on 1000 states.
fn bench_reencode_1k(c: &mut Criterion) {
    let mut rng = seeded_rng(8);
    let states: Vec<_> = (0..1000).map(|_| random_metro_state(&mut rng)).collect();

    c.bench_function("reencode_1k", |b| {
        b.iter(|| {
            for &state in &states {
                let flipped = reencode(state, !state.has_signals());
                black_box(flipped.and_then(|s| reencode(s, state.has_signals())));
            }
        });
    });
}

/// Benchmark: Reserve then release a 256-tile straight path.
fn bench_reserve_path_256(c: &mut Criterion) {
    let mut map = metro_profile(8, 42).unwrap();
    let path = straight_path(&mut map, 100);
    for &t in &path {
        map.tile_mut(t).unreserve_metro_track(Track::X);
    }

    c.bench_function("reserve_path_256", |b| {
        b.iter(|| {
            for &t in &path {
                black_box(map.tile_mut(t).try_reserve_metro_track(Track::X));
            }
            for &t in &path {
                map.tile_mut(t).unreserve_metro_track(Track::X);
            }
        });
    });
}

/// Benchmark: Conflicting reservation attempts on a crossing.
fn bench_reserve_conflict(c: &mut Criterion) {
    let mut map = metro_profile(6, 1).unwrap();
    let t = TileIndex(0);
    {
        let mut tile = map.tile_mut(t);
        tile.set_metro_has_signals(false);
        tile.set_metro_track_bits(strata_core::TrackBits::CROSS);
        tile.unreserve_metro_track(Track::X);
        tile.unreserve_metro_track(Track::Y);
        assert!(tile.try_reserve_metro_track(Track::X));
    }

    c.bench_function("reserve_conflict", |b| {
        b.iter(|| black_box(map.tile_mut(t).try_reserve_metro_track(Track::Y)));
    });
}

criterion_group!(
    benches,
    bench_decode_metro_256,
    bench_encode_metro_1k,
    bench_reencode_1k,
    bench_reserve_path_256,
    bench_reserve_conflict
);
criterion_main!(benches);
