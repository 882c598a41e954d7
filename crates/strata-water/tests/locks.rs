use proptest::prelude::*;
use strata_core::{DiagDirection, Owner};
use strata_map::{CommonTile, MapConfig, TileMap};
use strata_water::{
    make_lock, remove_lock, LockPart, LockWaterClasses, WaterClass, WaterTile, WaterTileMut,
    WaterTileType,
};

fn map() -> TileMap {
    TileMap::new(MapConfig::default()).unwrap()
}

#[test]
fn lock_with_distinct_prior_classes() {
    let mut m = map();
    let origin = m.tile_xy(4, 4).unwrap();
    let classes = LockWaterClasses {
        lower: WaterClass::Sea,
        upper: WaterClass::River,
        middle: WaterClass::Canal,
    };
    make_lock(&mut m, origin, Owner(0), DiagDirection::NorthEast, classes).unwrap();

    let lower = m.tile_xy(5, 4).unwrap();
    let upper = m.tile_xy(3, 4).unwrap();
    for (t, part) in [
        (lower, LockPart::Lower),
        (upper, LockPart::Upper),
        (origin, LockPart::Middle),
    ] {
        assert_eq!(m.tile(t).water_tile_type(), WaterTileType::Lock);
        assert_eq!(m.tile(t).lock_part(), part);
    }
}

#[test]
fn build_then_remove_restores_surroundings() {
    let mut m = map();
    let t = m.tile_xy(20, 20).unwrap();
    let lower = m.tile_xy(20, 21).unwrap();
    let upper = m.tile_xy(20, 19).unwrap();
    m.tile_mut(lower).make_sea();
    m.tile_mut(upper).make_canal(Owner(4), 0);
    m.tile_mut(t).make_river(0);

    let dir = DiagDirection::NorthWest;
    let classes = LockWaterClasses::from_surroundings(&m, t, dir).unwrap();
    make_lock(&mut m, t, Owner(1), dir, classes).unwrap();
    remove_lock(&mut m, lower).unwrap();

    assert!(m.tile(lower).is_sea());
    assert_eq!(m.tile(lower).owner(), Owner::WATER);
    assert!(m.tile(upper).is_canal());
    assert_eq!(m.tile(upper).owner(), Owner(4));
    assert!(m.tile(t).is_river());
}

proptest! {
    #[test]
    fn lock_parts_agree_on_direction(x in 1u32..63, y in 1u32..63, d in 0u8..4) {
        let mut m = map();
        let dir = DiagDirection::try_from(d).unwrap();
        let t = m.tile_xy(x, y).unwrap();
        let classes = LockWaterClasses::from_surroundings(&m, t, dir).unwrap();
        make_lock(&mut m, t, Owner(2), dir, classes).unwrap();

        let (dx, dy) = dir.offset();
        let upper = m.offset(t, dx, dy).unwrap();
        let lower = m.offset(t, -dx, -dy).unwrap();
        for i in [lower, t, upper] {
            prop_assert!(m.tile(i).is_lock_tile());
            prop_assert_eq!(m.tile(i).lock_direction(), dir);
        }
        prop_assert_eq!(m.tile(upper).lock_part(), LockPart::Upper);
        prop_assert_eq!(m.tile(lower).lock_part(), LockPart::Lower);
    }
}
