//! Three-tile locks.
//!
//! A lock occupies a middle tile plus one tile on each side along its
//! direction. Each part stores the water class the tile had before the
//! lock was built so [`remove_lock`] can put it back.

use strata_core::{DiagDirection, Owner, TileIndex, WaterClass};
use strata_map::{CommonTile, CommonTileMut, MapError, TileMap};
use tracing::debug;

use crate::water::{LockPart, WaterTile, WaterTileMut};

/// Water classes to store in the three parts of a lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockWaterClasses {
    /// The low end, one step against the lock direction.
    pub lower: WaterClass,
    /// The high end, one step along the lock direction.
    pub upper: WaterClass,
    /// The chamber.
    pub middle: WaterClass,
}

impl LockWaterClasses {
    /// Read the classes from the tiles a lock at `t` facing `dir` would
    /// cover. Tiles without water ground count as canal.
    pub fn from_surroundings(
        map: &TileMap,
        t: TileIndex,
        dir: DiagDirection,
    ) -> Result<Self, MapError> {
        let (lower, upper) = ends(map, t, dir)?;
        let class_of = |i: TileIndex| {
            let tile = map.tile(i);
            if tile.has_tile_water_ground() {
                tile.water_class()
            } else {
                WaterClass::Canal
            }
        };
        Ok(Self {
            lower: class_of(lower),
            upper: class_of(upper),
            middle: class_of(t),
        })
    }
}

fn ends(map: &TileMap, t: TileIndex, dir: DiagDirection) -> Result<(TileIndex, TileIndex), MapError> {
    let (dx, dy) = dir.offset();
    let lower = map.checked_offset(t, -dx, -dy)?;
    let upper = map.checked_offset(t, dx, dy)?;
    Ok((lower, upper))
}

/// Build a lock with its middle on `t`, facing `dir`.
///
/// The middle part is owned by `owner`. An end keeps its current owner
/// if it is plain water already, otherwise it also takes `owner`.
/// Nothing is written when a part would fall off the map.
pub fn make_lock(
    map: &mut TileMap,
    t: TileIndex,
    owner: Owner,
    dir: DiagDirection,
    classes: LockWaterClasses,
) -> Result<(), MapError> {
    let (lower, upper) = ends(map, t, dir)?;
    let end_owner = |map: &TileMap, i: TileIndex| {
        let tile = map.tile(i);
        if tile.is_water_tile() {
            tile.owner()
        } else {
            owner
        }
    };
    let lower_owner = end_owner(map, lower);
    let upper_owner = end_owner(map, upper);

    map.tile_mut(t)
        .make_lock_tile(owner, LockPart::Middle, dir, classes.middle);
    map.tile_mut(lower)
        .make_lock_tile(lower_owner, LockPart::Lower, dir, classes.lower);
    map.tile_mut(upper)
        .make_lock_tile(upper_owner, LockPart::Upper, dir, classes.upper);

    debug!(tile = t.0, ?dir, %owner, "lock built");
    Ok(())
}

/// Remove the lock that `t` is part of.
///
/// Each part becomes plain water of its stored class again, keeping its
/// owner; a canal owned by [`Owner::WATER`] comes back as sea and a part
/// with no stored water class becomes clear land.
///
/// # Panics
///
/// Panics if `t` is not a lock tile or the other parts do not belong to
/// the same lock.
pub fn remove_lock(map: &mut TileMap, t: TileIndex) -> Result<(), MapError> {
    let tile = map.tile(t);
    let dir = tile.lock_direction();
    let (dx, dy) = dir.offset();
    let middle = match tile.lock_part() {
        LockPart::Middle => t,
        LockPart::Lower => map.checked_offset(t, dx, dy)?,
        LockPart::Upper => map.checked_offset(t, -dx, -dy)?,
    };
    let (lower, upper) = ends(map, middle, dir)?;

    for (i, part) in [
        (middle, LockPart::Middle),
        (lower, LockPart::Lower),
        (upper, LockPart::Upper),
    ] {
        let tile = map.tile(i);
        assert!(
            tile.is_lock_tile() && tile.lock_part() == part && tile.lock_direction() == dir,
            "tile {i} is not the {part:?} part of the lock on {middle}"
        );
    }

    for i in [middle, lower, upper] {
        restore_water(map, i);
    }
    debug!(tile = middle.0, ?dir, "lock removed");
    Ok(())
}

fn restore_water(map: &mut TileMap, t: TileIndex) {
    let (class, owner) = {
        let tile = map.tile(t);
        (tile.water_class(), tile.owner())
    };
    let mut tile = map.tile_mut(t);
    match class {
        WaterClass::Sea => tile.make_sea(),
        WaterClass::River => tile.make_river(0),
        WaterClass::Canal if owner == Owner::WATER => tile.make_sea(),
        WaterClass::Canal => tile.make_canal(owner, 0),
        WaterClass::Invalid => tile.make_clear(),
    }
}
