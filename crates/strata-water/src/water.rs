//! Single-cell water accessors and constructors.

use strata_core::{
    Axis, DecodeError, DepotId, DiagDirection, Owner, TileIndex, TileType, WaterClass,
};
use strata_map::common::decode;
use strata_map::{layout, AsCell, AsCellMut, CommonTileMut, TileMap};

/// Subtype of a water tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WaterTileType {
    /// Plain water.
    Clear = 0,
    /// Coast.
    Coast = 1,
    /// Part of a lock.
    Lock = 2,
    /// Part of a ship depot.
    Depot = 3,
}

impl TryFrom<u8> for WaterTileType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(WaterTileType::Clear),
            1 => Ok(WaterTileType::Coast),
            2 => Ok(WaterTileType::Lock),
            3 => Ok(WaterTileType::Depot),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "WaterTileType",
                value: u32::from(v),
            }),
        }
    }
}

/// Section of a lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LockPart {
    /// The chamber.
    Middle = 0,
    /// The low end.
    Lower = 1,
    /// The high end.
    Upper = 2,
}

impl TryFrom<u8> for LockPart {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(LockPart::Middle),
            1 => Ok(LockPart::Lower),
            2 => Ok(LockPart::Upper),
            _ => Err(DecodeError::InvalidDiscriminant {
                kind: "LockPart",
                value: u32::from(v),
            }),
        }
    }
}

/// Section of a two-tile ship depot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DepotPart {
    /// The part nearer the north corner of the map.
    North = 0,
    /// The other part.
    South = 1,
}

/// Read accessors for water fields.
///
/// Methods whose name ends in `_tile` test the coarse type first and
/// may be called on any cell; the others require a water cell.
pub trait WaterTile: AsCell {
    /// Whether the coarse type stores a water class.
    fn has_water_class(&self) -> bool {
        self.tile_type().has_water_class()
    }

    /// Water class of the tile.
    fn water_class(&self) -> WaterClass {
        assert!(self.has_water_class(), "tile type has no water class");
        decode(self.cell().get(layout::WATER_CLASS))
    }

    /// Whether the tile sits in a water body.
    fn is_tile_on_water(&self) -> bool {
        self.water_class() != WaterClass::Invalid
    }

    /// Subtype of a water tile.
    fn water_tile_type(&self) -> WaterTileType {
        assert!(self.is_tile_type(TileType::Water), "not a water tile");
        decode(self.cell().get(layout::water::TILE_TYPE))
    }

    /// Plain water of any class.
    fn is_water(&self) -> bool {
        self.water_tile_type() == WaterTileType::Clear
    }

    /// Plain sea water.
    fn is_sea(&self) -> bool {
        self.is_water() && self.water_class() == WaterClass::Sea
    }

    /// Plain canal water.
    fn is_canal(&self) -> bool {
        self.is_water() && self.water_class() == WaterClass::Canal
    }

    /// Plain river water.
    fn is_river(&self) -> bool {
        self.is_water() && self.water_class() == WaterClass::River
    }

    /// A water cell of plain water.
    fn is_water_tile(&self) -> bool {
        self.is_tile_type(TileType::Water) && self.is_water()
    }

    /// Coast.
    fn is_coast(&self) -> bool {
        self.water_tile_type() == WaterTileType::Coast
    }

    /// A water cell that is coast.
    fn is_coast_tile(&self) -> bool {
        self.is_tile_type(TileType::Water) && self.is_coast()
    }

    /// Ship depot part.
    fn is_ship_depot(&self) -> bool {
        self.water_tile_type() == WaterTileType::Depot
    }

    /// A water cell that is a ship depot part.
    fn is_ship_depot_tile(&self) -> bool {
        self.is_tile_type(TileType::Water) && self.is_ship_depot()
    }

    /// Lock part.
    fn is_lock(&self) -> bool {
        self.water_tile_type() == WaterTileType::Lock
    }

    /// A water cell that is a lock part.
    fn is_lock_tile(&self) -> bool {
        self.is_tile_type(TileType::Water) && self.is_lock()
    }

    /// Axis of a ship depot.
    fn ship_depot_axis(&self) -> Axis {
        assert!(self.is_ship_depot_tile(), "not a ship depot tile");
        Axis::from_bit(self.cell().flag(layout::water::DEPOT_AXIS))
    }

    /// Which half of the depot this is.
    fn ship_depot_part(&self) -> DepotPart {
        assert!(self.is_ship_depot_tile(), "not a ship depot tile");
        if self.cell().flag(layout::water::DEPOT_PART) {
            DepotPart::South
        } else {
            DepotPart::North
        }
    }

    /// Direction from this depot part towards its partner's far side:
    /// the axis combined with the part.
    fn ship_depot_direction(&self) -> DiagDirection {
        DiagDirection::from_axis(
            self.ship_depot_axis(),
            self.ship_depot_part() == DepotPart::South,
        )
    }

    /// Ship depot id.
    fn ship_depot_id(&self) -> DepotId {
        assert!(self.is_ship_depot_tile(), "not a ship depot tile");
        DepotId(self.cell().get(layout::water::DEPOT_ID) as u16)
    }

    /// Direction the lock faces.
    fn lock_direction(&self) -> DiagDirection {
        assert!(self.is_lock_tile(), "not a lock tile");
        decode(self.cell().get(layout::water::LOCK_DIRECTION))
    }

    /// Which section of the lock this is.
    fn lock_part(&self) -> LockPart {
        assert!(self.is_lock_tile(), "not a lock tile");
        decode(self.cell().get(layout::water::LOCK_PART))
    }

    /// Animation randomness.
    fn water_tile_random_bits(&self) -> u8 {
        assert!(self.is_tile_type(TileType::Water), "not a water tile");
        self.cell().get(layout::water::RANDOM_BITS) as u8
    }

    /// Whether water covers the ground. Coast does not count.
    fn has_tile_water_ground(&self) -> bool {
        self.has_water_class() && self.is_tile_on_water() && !self.is_coast_tile()
    }

    /// Whether the tile never floods its neighbours.
    fn is_non_flooding_water_tile(&self) -> bool {
        assert!(self.is_tile_type(TileType::Water), "not a water tile");
        self.cell().flag(layout::water::NON_FLOODING)
    }
}

impl<T: AsCell + ?Sized> WaterTile for T {}

/// Write accessors and constructors for water cells.
///
/// Every constructor rewrites the whole water payload: owner, class,
/// docking flag and `m2..m7` are set from scratch. Height, tropic zone,
/// the metro word and the metro owner are kept, and so is the
/// associated-tile flag when the previous type could carry one.
pub trait WaterTileMut: AsCellMut + WaterTile + CommonTileMut {
    /// Change the water class.
    fn set_water_class(&mut self, wc: WaterClass) {
        assert!(self.has_water_class(), "tile type has no water class");
        self.cell_mut().set(layout::WATER_CLASS, wc as u32);
    }

    /// Change the water subtype without touching the subtype fields.
    fn set_water_tile_type(&mut self, ty: WaterTileType) {
        assert!(self.is_tile_type(TileType::Water), "not a water tile");
        self.cell_mut().set(layout::water::TILE_TYPE, ty as u32);
    }

    /// Change the non-flooding flag.
    fn set_non_flooding_water_tile(&mut self, value: bool) {
        assert!(self.is_tile_type(TileType::Water), "not a water tile");
        self.cell_mut().set_flag(layout::water::NON_FLOODING, value);
    }

    /// Make a coast tile.
    fn make_shore(&mut self) {
        init_water(self, Owner::WATER, WaterClass::Sea, WaterTileType::Coast);
    }

    /// Make a plain water tile.
    fn make_water(&mut self, owner: Owner, wc: WaterClass, random_bits: u8) {
        init_water(self, owner, wc, WaterTileType::Clear);
        self.cell_mut()
            .set(layout::water::RANDOM_BITS, u32::from(random_bits));
    }

    /// Make a sea tile.
    fn make_sea(&mut self) {
        self.make_water(Owner::WATER, WaterClass::Sea, 0);
    }

    /// Make a river tile.
    fn make_river(&mut self, random_bits: u8) {
        self.make_water(Owner::WATER, WaterClass::River, random_bits);
    }

    /// Make a canal tile.
    ///
    /// # Panics
    ///
    /// Canals are never owned by [`Owner::WATER`].
    fn make_canal(&mut self, owner: Owner, random_bits: u8) {
        assert!(owner != Owner::WATER, "canal owned by water");
        self.make_water(owner, WaterClass::Canal, random_bits);
    }

    /// Make one half of a ship depot.
    fn make_ship_depot(
        &mut self,
        owner: Owner,
        depot: DepotId,
        part: DepotPart,
        axis: Axis,
        original: WaterClass,
    ) {
        init_water(self, owner, original, WaterTileType::Depot);
        let cell = self.cell_mut();
        cell.set(layout::water::DEPOT_ID, u32::from(depot.0));
        cell.set_flag(layout::water::DEPOT_PART, part == DepotPart::South);
        cell.set_flag(layout::water::DEPOT_AXIS, axis == Axis::Y);
    }

    /// Make one section of a lock. See [`make_lock`](crate::make_lock)
    /// for the three-tile transaction.
    fn make_lock_tile(
        &mut self,
        owner: Owner,
        part: LockPart,
        dir: DiagDirection,
        original: WaterClass,
    ) {
        init_water(self, owner, original, WaterTileType::Lock);
        let cell = self.cell_mut();
        cell.set(layout::water::LOCK_PART, part as u32);
        cell.set(layout::water::LOCK_DIRECTION, dir as u32);
    }
}

impl<T: AsCellMut + ?Sized> WaterTileMut for T {}

fn init_water<T: WaterTileMut + ?Sized>(
    tile: &mut T,
    owner: Owner,
    wc: WaterClass,
    ty: WaterTileType,
) {
    tile.reset_to(TileType::Water);
    tile.set_owner(owner);
    let cell = tile.cell_mut();
    cell.set(layout::WATER_CLASS, wc as u32);
    cell.set_flag(layout::DOCKING, false);
    cell.set(layout::water::TILE_TYPE, ty as u32);
}

// ── Ship depot pairs ────────────────────────────────────────────

/// The other half of the two-tile ship depot on `t`.
///
/// The north part's partner is one step along the positive axis, the
/// south part's one step back.
///
/// # Panics
///
/// Panics if `t` is not a ship depot or the partner would be off the map.
pub fn other_ship_depot_tile(map: &TileMap, t: TileIndex) -> TileIndex {
    let tile = map.tile(t);
    let (dx, dy) = tile.ship_depot_axis().offset();
    let step = match tile.ship_depot_part() {
        DepotPart::North => 1,
        DepotPart::South => -1,
    };
    match map.offset(t, dx * step, dy * step) {
        Some(other) => other,
        None => panic!("ship depot on tile {t} has its partner off the map"),
    }
}

/// The north tile of the ship depot on `t`.
pub fn ship_depot_north_tile(map: &TileMap, t: TileIndex) -> TileIndex {
    let other = other_ship_depot_tile(map, t);
    t.min(other)
}
