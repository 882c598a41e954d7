//! Whole-map persistence through the facade.

use proptest::prelude::*;
use strata::map::{load, save, CodecError};
use strata::prelude::*;
use strata_test_utils::{mixed_map, random_metro_state, seeded_rng, small_map};

fn round_trip(map: &TileMap) -> Result<TileMap, CodecError> {
    let mut buf = Vec::new();
    save(map, &mut buf)?;
    load(&mut buf.as_slice())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn mixed_maps_round_trip(seed in any::<u64>()) {
        let (map, _) = mixed_map(seed);
        let loaded = round_trip(&map).unwrap();
        prop_assert_eq!(&loaded, &map);

        for t in (0..map.len() as u32).map(TileIndex) {
            let before: Vec<_> = strata::classify_all(&map, t).collect();
            let after: Vec<_> = strata::classify_all(&loaded, t).collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(map.tile(t).metro_state(), loaded.tile(t).metro_state());
            prop_assert_eq!(map.tile(t).metro_owner(), loaded.tile(t).metro_owner());
        }
    }
}

#[test]
fn fixture_covers_every_encoder() {
    let (map, stats) = mixed_map(42);
    assert!(stats.water > 0);
    assert!(stats.roads > 0);
    assert!(stats.stations > 0);
    assert!(stats.houses > 0);
    assert!(stats.locks > 0);
    assert!(stats.road_layers > 0);
    assert!(stats.metro_tiles > 0);

    let mut kinds = std::collections::HashSet::new();
    for tile in map.tiles() {
        kinds.insert(classify(&tile));
    }
    assert!(kinds.contains(&TileKind::Road));
    assert!(kinds.contains(&TileKind::House));
    assert!(kinds.contains(&TileKind::Lock(strata::water::LockPart::Middle)));
}

#[test]
fn metro_survives_on_every_base_type() {
    let (mut map, _) = mixed_map(3);
    let mut rng = seeded_rng(99);
    let mut expected = Vec::new();
    for y in 0..8 {
        for x in 0..map.size_x() {
            let Some(t) = map.tile_xy(x, y) else { continue };
            let state = random_metro_state(&mut rng);
            map.tile_mut(t).set_metro_state(state);
            expected.push((t, state));
        }
    }
    let loaded = round_trip(&map).unwrap();
    for (t, state) in expected {
        assert_eq!(loaded.tile(t).metro_state(), state, "tile {t}");
    }
}

#[test]
fn reservation_persists_mid_path() {
    let mut map = small_map();
    let path: Vec<_> = (0..10).filter_map(|x| map.tile_xy(x, 5)).collect();
    for &t in &path {
        let mut tile = map.tile_mut(t);
        tile.set_metro_track_bits(TrackBits::X);
        tile.set_metro_has_signals(t.0 % 3 == 0);
        assert!(tile.try_reserve_metro_track(Track::X));
    }
    let loaded = round_trip(&map).unwrap();
    for &t in &path {
        let tile = loaded.tile(t);
        assert!(tile.is_metro_track_reserved(Track::X));
        assert_eq!(tile.has_metro_signals(), t.0 % 3 == 0);
    }
}
