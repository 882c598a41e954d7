//! One-shot translation of version 1 cells into the current layout.

use strata_core::DecodeError;

use crate::cell::{Cell, Slot};
use crate::layout;
use crate::legacy::LegacyCell;

/// Counts reported after migrating a whole map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Cells migrated (base and layer cells).
    pub cells: usize,
    /// House types moved into `m9`.
    pub house_types: usize,
    /// Rail types moved into `m9`.
    pub rail_types: usize,
    /// Tram road types moved into `m9`.
    pub tram_types: usize,
}

/// Translate one version 1 cell. The result has an empty metro word and
/// no metro owner.
pub fn migrate_cell(
    legacy: &LegacyCell,
    report: &mut MigrationReport,
) -> Result<Cell, DecodeError> {
    let mut cell = *legacy.raw();
    cell.set_slot(Slot::M8, 0);
    cell.set_slot(Slot::M9, 0);

    if let Some(house) = legacy.house_type()? {
        cell.set(layout::house::TYPE, u32::from(house.0));
        report.house_types += 1;
    }
    if let Some(rail) = legacy.rail_type()? {
        cell.set(layout::rail::RAIL_TYPE, u32::from(rail.0));
        report.rail_types += 1;
    }
    if let Some(tram) = legacy.tram_type()? {
        cell.set(layout::road::TRAM_TYPE, u32::from(tram.0));
        report.tram_types += 1;
    }
    report.cells += 1;
    Ok(cell)
}
