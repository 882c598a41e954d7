use proptest::prelude::*;
use strata_core::{Owner, RoadBits, RoadTramType, RoadTypeId, TileIndex, TownId};
use strata_map::{load, save, MapConfig, TileMap};
use strata_road::{Roadside, RoadsideTile, RoadsideTileMut, RoadTile, RoadTileMut};

fn tram_road(m: &mut TileMap, t: TileIndex) {
    m.tile_mut(t).make_road_normal(
        RoadBits::NONE,
        RoadTypeId(0),
        RoadTypeId(1),
        TownId(7),
        Owner(0),
        Owner(1),
    );
}

proptest! {
    #[test]
    fn layers_written_independently(road in 0u8..16, tram in 0u8..16, side in 0usize..7) {
        let sides = [
            Roadside::Barren,
            Roadside::Grass,
            Roadside::Paved,
            Roadside::StreetLights,
            Roadside::Trees,
            Roadside::GrassRoadWorks,
            Roadside::PavedRoadWorks,
        ];
        let mut m = TileMap::new(MapConfig::default()).unwrap();
        let t = TileIndex(65);
        tram_road(&mut m, t);
        let mut tile = m.tile_mut(t);
        tile.set_road_bits(RoadBits::from_bits_truncate(road), RoadTramType::Road);
        tile.set_roadside(sides[side]);
        tile.set_road_bits(RoadBits::from_bits_truncate(tram), RoadTramType::Tram);

        prop_assert_eq!(tile.road_bits(RoadTramType::Road).bits(), road);
        prop_assert_eq!(tile.road_bits(RoadTramType::Tram).bits(), tram);
        prop_assert_eq!(tile.roadside(), sides[side]);
        prop_assert_eq!(tile.road_owner(RoadTramType::Road), Owner(0));
        prop_assert_eq!(tile.road_owner(RoadTramType::Tram), Owner(1));
        prop_assert_eq!(tile.road_town(), TownId(7));
    }
}

#[test]
fn roadworks_survive_save_and_load() {
    let mut m = TileMap::new(MapConfig::default()).unwrap();
    let t = TileIndex(300);
    tram_road(&mut m, t);
    {
        let mut tile = m.tile_mut(t);
        tile.set_roadside(Roadside::Grass);
        tile.start_road_works();
        for _ in 0..5 {
            tile.increase_road_works_counter();
        }
    }

    let mut bytes = Vec::new();
    save(&m, &mut bytes).unwrap();
    let loaded = load(&mut bytes.as_slice()).unwrap();

    let tile = loaded.tile(t);
    assert_eq!(tile.roadside(), Roadside::GrassRoadWorks);
    assert_eq!(tile.roadworks_counter(), 5);
    assert_eq!(tile.road_type(RoadTramType::Tram), RoadTypeId(1));
}
