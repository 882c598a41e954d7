//! Position-plus-reference handles over single cells.
//!
//! Encoder crates add their accessors as extension traits over
//! [`AsCell`] / [`AsCellMut`], so the same methods work on a base cell
//! and on an associated layer cell alike.

use strata_core::{TileIndex, TileType};

use crate::cell::Cell;

/// Read access to one cell and the tile it sits on.
pub trait AsCell {
    /// The tile this cell belongs to.
    fn index(&self) -> TileIndex;

    /// The cell.
    fn cell(&self) -> &Cell;

    /// Coarse type of the cell.
    fn tile_type(&self) -> TileType {
        self.cell().tile_type()
    }

    /// Whether the cell is of coarse type `t`.
    fn is_tile_type(&self, t: TileType) -> bool {
        self.tile_type() == t
    }
}

/// Write access to one cell.
pub trait AsCellMut: AsCell {
    /// The cell, mutably.
    fn cell_mut(&mut self) -> &mut Cell;
}

/// Shared handle to a cell.
#[derive(Clone, Copy, Debug)]
pub struct Tile<'a> {
    index: TileIndex,
    cell: &'a Cell,
}

impl<'a> Tile<'a> {
    /// Wrap `cell`, which sits on tile `index`.
    pub fn new(index: TileIndex, cell: &'a Cell) -> Self {
        Self { index, cell }
    }
}

impl AsCell for Tile<'_> {
    fn index(&self) -> TileIndex {
        self.index
    }

    fn cell(&self) -> &Cell {
        self.cell
    }
}

/// Exclusive handle to a cell.
#[derive(Debug)]
pub struct TileMut<'a> {
    index: TileIndex,
    cell: &'a mut Cell,
}

impl<'a> TileMut<'a> {
    /// Wrap `cell`, which sits on tile `index`.
    pub fn new(index: TileIndex, cell: &'a mut Cell) -> Self {
        Self { index, cell }
    }

    /// Downgrade to a shared handle for the lifetime of the borrow.
    pub fn as_tile(&self) -> Tile<'_> {
        Tile::new(self.index, self.cell)
    }
}

impl AsCell for TileMut<'_> {
    fn index(&self) -> TileIndex {
        self.index
    }

    fn cell(&self) -> &Cell {
        self.cell
    }
}

impl AsCellMut for TileMut<'_> {
    fn cell_mut(&mut self) -> &mut Cell {
        self.cell
    }
}
