//! The tile grid: dense base cells plus sparse associated layers.

use indexmap::IndexMap;
use smallvec::SmallVec;
use strata_core::{DiagDirection, TileIndex, TileType};

use crate::cell::Cell;
use crate::config::MapConfig;
use crate::error::MapError;
use crate::handle::{Tile, TileMut};
use crate::layout;

/// Layer cells stacked on one tile, in insertion order.
pub type LayerStack = SmallVec<[Cell; 2]>;

/// A rectangular grid of cells.
///
/// Tile `(x, y)` has index `y * size_x + x`. Each tile has exactly one
/// base cell; tiles whose base type allows it may additionally carry
/// layer cells of other coarse types (for example a water base with a
/// road layer on top). At most one cell of each coarse type exists per
/// tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    config: MapConfig,
    cells: Vec<Cell>,
    layers: IndexMap<TileIndex, LayerStack>,
}

impl TileMap {
    /// A map of clear land with the given dimensions.
    pub fn new(config: MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self {
            config,
            cells: vec![Cell::new(TileType::Clear); config.tile_count()],
            layers: IndexMap::new(),
        })
    }

    /// Rebuild a map from decoded base cells. Layers are added afterwards.
    pub(crate) fn from_cells(config: MapConfig, cells: Vec<Cell>) -> Result<Self, MapError> {
        config.validate()?;
        debug_assert_eq!(cells.len(), config.tile_count());
        Ok(Self {
            config,
            cells,
            layers: IndexMap::new(),
        })
    }

    /// The map dimensions.
    pub fn config(&self) -> MapConfig {
        self.config
    }

    /// Width in tiles.
    pub fn size_x(&self) -> u32 {
        self.config.size_x()
    }

    /// Height in tiles.
    pub fn size_y(&self) -> u32 {
        self.config.size_y()
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; maps have at least 64×64 tiles.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ── Coordinates ─────────────────────────────────────────────

    /// Index of tile `(x, y)`, or `None` off the map.
    pub fn tile_xy(&self, x: u32, y: u32) -> Option<TileIndex> {
        if x < self.size_x() && y < self.size_y() {
            Some(TileIndex((y << self.config.log_x) | x))
        } else {
            None
        }
    }

    /// X coordinate of `t`.
    pub fn tile_x(&self, t: TileIndex) -> u32 {
        t.0 & (self.size_x() - 1)
    }

    /// Y coordinate of `t`.
    pub fn tile_y(&self, t: TileIndex) -> u32 {
        t.0 >> self.config.log_x
    }

    /// Whether `t` is on the map.
    pub fn contains(&self, t: TileIndex) -> bool {
        (t.0 as usize) < self.cells.len()
    }

    /// The tile `(dx, dy)` away from `t`, or `None` off the map.
    pub fn offset(&self, t: TileIndex, dx: i32, dy: i32) -> Option<TileIndex> {
        let x = i64::from(self.tile_x(t)) + i64::from(dx);
        let y = i64::from(self.tile_y(t)) + i64::from(dy);
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.tile_xy(x, y)
    }

    /// Like [`offset`](Self::offset), reporting leaving the map as an error.
    pub fn checked_offset(&self, t: TileIndex, dx: i32, dy: i32) -> Result<TileIndex, MapError> {
        self.offset(t, dx, dy)
            .ok_or(MapError::OutOfBounds { index: t, dx, dy })
    }

    /// The neighbour of `t` across edge `dir`.
    pub fn neighbour(&self, t: TileIndex, dir: DiagDirection) -> Option<TileIndex> {
        let (dx, dy) = dir.offset();
        self.offset(t, dx, dy)
    }

    // ── Base cells ──────────────────────────────────────────────

    /// All base cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Base cell of `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is off the map.
    pub fn cell(&self, t: TileIndex) -> &Cell {
        assert!(self.contains(t), "tile {t} is off the map");
        &self.cells[t.0 as usize]
    }

    /// Base cell of `t`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `t` is off the map.
    pub fn cell_mut(&mut self, t: TileIndex) -> &mut Cell {
        assert!(self.contains(t), "tile {t} is off the map");
        &mut self.cells[t.0 as usize]
    }

    /// Handle on the base cell of `t`.
    pub fn tile(&self, t: TileIndex) -> Tile<'_> {
        Tile::new(t, self.cell(t))
    }

    /// Mutable handle on the base cell of `t`.
    pub fn tile_mut(&mut self, t: TileIndex) -> TileMut<'_> {
        TileMut::new(t, self.cell_mut(t))
    }

    /// Handles on every base cell in index order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile<'_>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| Tile::new(TileIndex(i as u32), c))
    }

    // ── Associated layers ───────────────────────────────────────

    /// Layer cells on `t`, excluding the base cell.
    pub fn layers(&self, t: TileIndex) -> &[Cell] {
        self.layers.get(&t).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Every tile with layers, in the order the layers were first added.
    pub fn layer_entries(&self) -> impl Iterator<Item = (TileIndex, &[Cell])> {
        self.layers.iter().map(|(t, s)| (*t, s.as_slice()))
    }

    /// The cell of coarse type `ty` on `t`: the base cell if it matches,
    /// otherwise the matching layer.
    pub fn layer(&self, t: TileIndex, ty: TileType) -> Option<&Cell> {
        let base = self.cell(t);
        if base.tile_type() == ty {
            return Some(base);
        }
        self.layers(t).iter().find(|c| c.tile_type() == ty)
    }

    /// Mutable counterpart of [`layer`](Self::layer).
    pub fn layer_mut(&mut self, t: TileIndex, ty: TileType) -> Option<&mut Cell> {
        if self.cell(t).tile_type() == ty {
            return Some(self.cell_mut(t));
        }
        self.layers
            .get_mut(&t)?
            .iter_mut()
            .find(|c| c.tile_type() == ty)
    }

    /// Handle on the cell of coarse type `ty` on `t`.
    pub fn layer_tile(&self, t: TileIndex, ty: TileType) -> Option<Tile<'_>> {
        self.layer(t, ty).map(|c| Tile::new(t, c))
    }

    /// Mutable handle on the cell of coarse type `ty` on `t`.
    pub fn layer_tile_mut(&mut self, t: TileIndex, ty: TileType) -> Option<TileMut<'_>> {
        self.layer_mut(t, ty).map(|c| TileMut::new(t, c))
    }

    /// Stack `cell` on `t` as an associated layer and set the base cell's
    /// associated-tile flag.
    pub fn push_layer(&mut self, t: TileIndex, cell: Cell) -> Result<(), MapError> {
        let base = self.cell(t).tile_type();
        if !base.may_have_associated_tile() {
            return Err(MapError::LayerNotSupported { index: t, base });
        }
        let ty = cell.tile_type();
        if ty == TileType::Void || self.layer(t, ty).is_some() {
            return Err(MapError::LayerConflict {
                index: t,
                tile_type: ty,
            });
        }
        self.layers.entry(t).or_default().push(cell);
        self.cell_mut(t).set_flag(layout::ASSOCIATED_TILE, true);
        tracing::trace!(tile = t.0, layer = ?ty, "pushed associated layer");
        Ok(())
    }

    /// Remove the layer of coarse type `ty` from `t`. Clears the base
    /// cell's associated-tile flag once no layers remain.
    pub fn remove_layer(&mut self, t: TileIndex, ty: TileType) -> Option<Cell> {
        let stack = self.layers.get_mut(&t)?;
        let pos = stack.iter().position(|c| c.tile_type() == ty)?;
        let removed = stack.remove(pos);
        if stack.is_empty() {
            self.layers.shift_remove(&t);
            self.cell_mut(t).set_flag(layout::ASSOCIATED_TILE, false);
        }
        tracing::trace!(tile = t.0, layer = ?ty, "removed associated layer");
        Some(removed)
    }
}
