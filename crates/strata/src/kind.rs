//! Tile-kind classification.
//!
//! The coarse type says which encoder owns a cell; the subtype field of
//! that encoder says how the rest of the cell reads. [`classify`] folds
//! both into one [`TileKind`].

use strata_core::{TileIndex, TileType, TransportType, WaterClass};
use strata_depot::{RailTile, RailTileType};
use strata_map::{AsCell, CommonTile, StationType, Tile, TileMap};
use strata_road::{RoadTile, RoadTileType};
use strata_water::{DepotPart, LockPart, WaterTile, WaterTileType};

/// What a cell is, down to the subtype that selects its layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Bare land.
    Clear,
    /// Track without signals.
    Rail,
    /// Track with signals.
    RailWithSignals,
    /// Rail depot.
    RailDepot,
    /// Normal road.
    Road,
    /// Road depot.
    RoadDepot,
    /// House.
    House,
    /// Trees.
    Trees,
    /// Any station part except a hangar.
    Station(StationType),
    /// Airport hangar.
    Hangar,
    /// Plain water.
    Water(WaterClass),
    /// Coast.
    Coast,
    /// One of the three parts of a lock.
    Lock(LockPart),
    /// One of the two halves of a ship depot.
    ShipDepot(DepotPart),
    /// Off-map border.
    Void,
    /// Industry.
    Industry,
    /// Tunnel entrance or bridge head.
    TunnelBridge(TransportType),
    /// Object.
    Object,
}

impl TileKind {
    /// Whether vehicles can be sent here for servicing.
    pub const fn is_depot(self) -> bool {
        matches!(
            self,
            TileKind::RailDepot | TileKind::RoadDepot | TileKind::Hangar | TileKind::ShipDepot(_)
        )
    }

    /// Whether the kind is water of some sort.
    pub const fn is_water(self) -> bool {
        matches!(
            self,
            TileKind::Water(_) | TileKind::Coast | TileKind::Lock(_) | TileKind::ShipDepot(_)
        )
    }
}

/// Classify one cell.
pub fn classify<T: AsCell + ?Sized>(tile: &T) -> TileKind {
    match tile.tile_type() {
        TileType::Clear => TileKind::Clear,
        TileType::Railway => match tile.rail_tile_type() {
            RailTileType::Normal => TileKind::Rail,
            RailTileType::Signals => TileKind::RailWithSignals,
            RailTileType::Depot => TileKind::RailDepot,
        },
        TileType::Road => match tile.road_tile_type() {
            RoadTileType::Normal => TileKind::Road,
            RoadTileType::Depot => TileKind::RoadDepot,
        },
        TileType::House => TileKind::House,
        TileType::Trees => TileKind::Trees,
        TileType::Station if tile.is_hangar() => TileKind::Hangar,
        TileType::Station => TileKind::Station(tile.station_type()),
        TileType::Water => match tile.water_tile_type() {
            WaterTileType::Clear => TileKind::Water(tile.water_class()),
            WaterTileType::Coast => TileKind::Coast,
            WaterTileType::Lock => TileKind::Lock(tile.lock_part()),
            WaterTileType::Depot => TileKind::ShipDepot(tile.ship_depot_part()),
        },
        TileType::Void => TileKind::Void,
        TileType::Industry => TileKind::Industry,
        TileType::TunnelBridge => TileKind::TunnelBridge(tile.tunnel_bridge_transport_type()),
        TileType::Object => TileKind::Object,
    }
}

/// Classify the base cell of `t` and then each of its layers.
pub fn classify_all(map: &TileMap, t: TileIndex) -> impl Iterator<Item = TileKind> + '_ {
    std::iter::once(map.cell(t))
        .chain(map.layers(t))
        .map(move |cell| classify(&Tile::new(t, cell)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{Axis, DepotId, DiagDirection, Owner, RailTypeId, StationId, TrackBits};
    use strata_depot::RailTileMut;
    use strata_map::{Cell, CommonTileMut, MapConfig, TileMut};
    use strata_road::RoadTileMut;
    use strata_water::{make_lock, LockWaterClasses, WaterTileMut};

    fn map() -> TileMap {
        TileMap::new(MapConfig::default()).unwrap()
    }

    #[test]
    fn fresh_map_is_clear() {
        let m = map();
        assert_eq!(classify(&m.tile(TileIndex(0))), TileKind::Clear);
    }

    #[test]
    fn each_constructor_classifies() {
        let mut m = map();
        let t = TileIndex(200);
        let mut tile = m.tile_mut(t);

        tile.make_rail_normal(Owner(0), TrackBits::X, RailTypeId(0));
        assert_eq!(classify(&tile), TileKind::Rail);
        tile.make_rail_depot(Owner(0), DepotId(1), DiagDirection::NorthEast, RailTypeId(0));
        assert_eq!(classify(&tile), TileKind::RailDepot);

        tile.make_road_normal(
            strata_core::RoadBits::X,
            strata_core::RoadTypeId(0),
            strata_core::RoadTypeId::INVALID,
            strata_core::TownId(0),
            Owner::TOWN,
            Owner::NONE,
        );
        assert_eq!(classify(&tile), TileKind::Road);

        tile.make_river(3);
        assert_eq!(classify(&tile), TileKind::Water(WaterClass::River));
        tile.make_shore();
        assert_eq!(classify(&tile), TileKind::Coast);
        tile.make_ship_depot(Owner(1), DepotId(2), DepotPart::South, Axis::Y, WaterClass::Canal);
        assert_eq!(classify(&tile), TileKind::ShipDepot(DepotPart::South));
        assert!(classify(&tile).is_depot());

        tile.make_station(StationType::Dock, StationId(1), Owner(1), 0, WaterClass::Sea);
        assert_eq!(classify(&tile), TileKind::Station(StationType::Dock));
        tile.make_station(StationType::Airport, StationId(1), Owner(1), 0, WaterClass::Invalid);
        tile.set_hangar(true);
        assert_eq!(classify(&tile), TileKind::Hangar);

        tile.make_tunnel_bridge(TransportType::Rail, Owner(0));
        assert_eq!(classify(&tile), TileKind::TunnelBridge(TransportType::Rail));
    }

    #[test]
    fn lock_parts() {
        let mut m = map();
        let t = m.tile_xy(10, 10).unwrap();
        let dir = DiagDirection::SouthEast;
        let classes = LockWaterClasses::from_surroundings(&m, t, dir).unwrap();
        make_lock(&mut m, t, Owner(0), dir, classes).unwrap();
        assert_eq!(classify(&m.tile(t)), TileKind::Lock(LockPart::Middle));
        let upper = m.neighbour(t, dir).unwrap();
        assert_eq!(classify(&m.tile(upper)), TileKind::Lock(LockPart::Upper));
        assert!(classify(&m.tile(upper)).is_water());
    }

    #[test]
    fn layers_follow_base() {
        let mut m = map();
        let t = TileIndex(300);
        m.tile_mut(t).make_sea();
        let mut cell = Cell::new(TileType::Railway);
        TileMut::new(t, &mut cell).make_rail_normal(Owner(0), TrackBits::Y, RailTypeId(0));
        m.push_layer(t, cell).unwrap();

        let kinds: Vec<_> = classify_all(&m, t).collect();
        assert_eq!(kinds, vec![TileKind::Water(WaterClass::Sea), TileKind::Rail]);
    }
}
