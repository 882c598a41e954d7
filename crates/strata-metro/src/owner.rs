//! Metro owner.
//!
//! Stored as owner plus one in the top nibble of `m9`, zero meaning
//! none. Houses use all of `m9` and have no metro owner. Rail stations
//! and road stops share their tile owner with the metro layer.

use strata_core::{Owner, TileType};
use strata_map::{layout, AsCell, AsCellMut, CommonTile};

use crate::metro::MetroTile;

/// Read access to the metro owner.
pub trait MetroOwnerTile: MetroTile + CommonTile {
    /// Whether the metro owner is the tile owner rather than a stored
    /// field.
    fn is_metro_owner_derived(&self) -> bool {
        self.has_station_rail() || self.is_road_stop()
    }

    /// Owner of the metro tracks. [`Owner::NONE`] on houses and when no
    /// company owns them.
    fn metro_owner(&self) -> Owner {
        if self.is_tile_type(TileType::House) {
            return Owner::NONE;
        }
        if self.is_metro_owner_derived() {
            let owner = self.owner();
            return if owner.0 >= Owner::TOWN.0 { Owner::NONE } else { owner };
        }
        match self.cell().get(layout::METRO_OWNER) as u8 {
            0 => Owner::NONE,
            stored => Owner(stored - 1),
        }
    }
}

impl<T: AsCell + ?Sized> MetroOwnerTile for T {}

/// Write access to the metro owner.
pub trait MetroOwnerTileMut: AsCellMut + MetroOwnerTile {
    /// Change the metro owner. Owners that cannot be stored, including
    /// town and the special owners, are written as none. Does nothing on
    /// houses.
    ///
    /// # Panics
    ///
    /// Rail stations and road stops take their metro owner from the tile
    /// owner.
    fn set_metro_owner(&mut self, owner: Owner) {
        if self.is_tile_type(TileType::House) {
            return;
        }
        assert!(
            !self.is_metro_owner_derived(),
            "metro owner of station tile {} follows the tile owner",
            self.index()
        );
        let stored = if owner.0 < Owner::TOWN.0 { owner.0 + 1 } else { 0 };
        self.cell_mut().set(layout::METRO_OWNER, u32::from(stored));
    }

    /// Hand the metro tracks from `old` to `new`.
    ///
    /// Does nothing when the tile has no metro tracks, when `old` does not
    /// own them, or when the owner comes from the tile.
    fn update_metro_owner(&mut self, old: Owner, new: Owner) {
        if !self.is_metro_tile()
            || !self.has_any_metro_track()
            || self.is_tile_type(TileType::House)
            || self.is_metro_owner_derived()
        {
            return;
        }
        if self.metro_owner() == old {
            self.set_metro_owner(new);
        }
    }
}

impl<T: AsCellMut + ?Sized> MetroOwnerTileMut for T {}
