//! Depot lookup over a populated map.

use strata_core::{
    Axis, DepotId, DiagDirection, Owner, RailTypeId, RoadTypeId, StationId, TileType,
    TransportType, VehicleType, WaterClass,
};
use strata_depot::{
    depot_destination_index, depot_index, depot_owner, depot_vehicle_type, is_depot_tile,
    is_depot_type_tile, other_ship_depot_tile, DepotDestination, RailTileMut,
};
use strata_map::{AsCell, Cell, CommonTile, CommonTileMut, StationType, TileMut};
use strata_road::{RoadTileMut, RoadTypeTable};
use strata_test_utils::mixed_map;
use strata_water::{DepotPart, WaterTileMut};

#[test]
fn mixed_map_depots_match_their_cells() {
    let (map, _) = mixed_map(11);
    let mut hangars = 0;
    for tile in map.tiles() {
        let t = tile.index();
        if tile.is_hangar() {
            hangars += 1;
            assert!(is_depot_tile(&map, t));
            assert_eq!(
                depot_destination_index(&map, t),
                DepotDestination::Station(tile.station_id())
            );
        } else if !tile.has_associated_tile() {
            assert!(!is_depot_tile(&map, t), "unexpected depot on {t}");
        }
    }
    assert!(hangars > 0);
}

#[test]
fn every_depot_kind_resolves() {
    let (mut map, _) = mixed_map(5);
    let rail = map.tile_xy(10, 0).unwrap();
    let road = map.tile_xy(11, 0).unwrap();
    let ship_north = map.tile_xy(12, 0).unwrap();
    let ship_south = map.tile_xy(13, 0).unwrap();
    let hangar = map.tile_xy(14, 0).unwrap();

    map.tile_mut(rail)
        .make_rail_depot(Owner(1), DepotId(1), DiagDirection::SouthEast, RailTypeId(0));
    map.tile_mut(road)
        .make_road_depot(
            Owner(2),
            DepotId(2),
            DiagDirection::SouthEast,
            RoadTypeId(0),
            &RoadTypeTable::new(),
        )
        .unwrap();
    for (t, part) in [(ship_north, DepotPart::North), (ship_south, DepotPart::South)] {
        map.tile_mut(t)
            .make_ship_depot(Owner(3), DepotId(3), part, Axis::X, WaterClass::Sea);
    }
    {
        let mut tile = map.tile_mut(hangar);
        tile.make_station(StationType::Airport, StationId(4), Owner(4), 0, WaterClass::Invalid);
        tile.set_hangar(true);
    }

    let cases = [
        (rail, TransportType::Rail, VehicleType::Train, Owner(1)),
        (road, TransportType::Road, VehicleType::Road, Owner(2)),
        (ship_north, TransportType::Water, VehicleType::Ship, Owner(3)),
        (hangar, TransportType::Air, VehicleType::Aircraft, Owner(4)),
    ];
    for (t, transport, vehicle, owner) in cases {
        assert!(is_depot_type_tile(&map, t, transport), "{transport:?}");
        assert_eq!(depot_vehicle_type(&map, t), vehicle);
        assert_eq!(depot_owner(&map, t), owner);
    }
    assert_eq!(depot_index(&map, road), DepotId(2));
    assert_eq!(other_ship_depot_tile(&map, ship_north), ship_south);
    assert_eq!(other_ship_depot_tile(&map, ship_south), ship_north);
}

#[test]
fn rail_depot_layer_over_clear_base() {
    let (mut map, _) = mixed_map(9);
    let t = map.tile_xy(0, 5).unwrap();
    map.tile_mut(t).make_clear();
    let mut cell = Cell::new(TileType::Railway);
    TileMut::new(t, &mut cell).make_rail_depot(
        Owner(6),
        DepotId(60),
        DiagDirection::NorthWest,
        RailTypeId(3),
    );
    map.push_layer(t, cell).unwrap();

    assert!(is_depot_type_tile(&map, t, TransportType::Rail));
    assert_eq!(depot_index(&map, t), DepotId(60));
    assert_eq!(depot_destination_index(&map, t), DepotDestination::Depot(DepotId(60)));
    assert_eq!(map.tile(t).tile_type(), TileType::Clear);
}
