//! Binary save/load for tile maps.
//!
//! All integers are little-endian. Cells are written slot by slot with
//! no padding. Saving always produces [`FORMAT_VERSION`]; loading also
//! accepts [`LEGACY_FORMAT_VERSION`] and migrates it on the way in.

use std::io::{self, Read, Write};

use strata_core::{BitRange, DecodeError, TileIndex, TileType, TropicZone};

use crate::cell::Cell;
use crate::common::StationType;
use crate::config::MapConfig;
use crate::error::CodecError;
use crate::layout;
use crate::legacy::{LegacyCell, LEGACY_CELL_LEN};
use crate::map::TileMap;
use crate::migrate::{migrate_cell, MigrationReport};
use crate::{FORMAT_VERSION, LEGACY_FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn write_cell(w: &mut dyn Write, cell: &Cell) -> Result<(), CodecError> {
    w.write_all(&cell.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

fn read_exact(r: &mut dyn Read, buf: &mut [u8], what: &'static str) -> Result<(), CodecError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::Truncated { what },
        _ => CodecError::Io(e),
    })
}

fn read_u8(r: &mut dyn Read, what: &'static str) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    read_exact(r, &mut buf, what)?;
    Ok(buf[0])
}

fn read_u32_le(r: &mut dyn Read, what: &'static str) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf, what)?;
    Ok(u32::from_le_bytes(buf))
}

/// Reads cells of either format version, migrating old ones.
struct CellReader {
    version: u8,
    report: MigrationReport,
}

impl CellReader {
    fn read(&mut self, r: &mut dyn Read, index: TileIndex) -> Result<Cell, CodecError> {
        let cell = if self.version == LEGACY_FORMAT_VERSION {
            let mut buf = [0u8; LEGACY_CELL_LEN];
            read_exact(r, &mut buf, "cell")?;
            migrate_cell(&LegacyCell::from_le_bytes(buf), &mut self.report)
                .map_err(|source| CodecError::MalformedCell { index, source })?
        } else {
            let mut buf = [0u8; Cell::SERIALIZED_LEN];
            read_exact(r, &mut buf, "cell")?;
            Cell::from_le_bytes(buf)
        };
        validate_cell(&cell).map_err(|source| CodecError::MalformedCell { index, source })?;
        Ok(cell)
    }
}

/// Reject discriminants that the accessors would refuse to decode.
fn validate_cell(cell: &Cell) -> Result<(), DecodeError> {
    let invalid = |kind: &'static str, value: u32| DecodeError::InvalidDiscriminant { kind, value };

    let tile_type = TileType::try_from(cell.get(layout::TILE_TYPE) as u8)?;
    TropicZone::try_from(cell.get(layout::TROPIC_ZONE) as u8)?;
    match tile_type {
        TileType::Station => {
            StationType::try_from(cell.get(layout::station::TYPE) as u8)?;
        }
        TileType::Water => {
            let sub = cell.get(layout::water::TILE_TYPE);
            if sub > 3 {
                return Err(invalid("WaterTileType", sub));
            }
            if sub == 2 && cell.get(layout::water::LOCK_PART) > 2 {
                return Err(invalid("LockPart", cell.get(layout::water::LOCK_PART)));
            }
        }
        TileType::Road => {
            let sub = cell.get(layout::road::TILE_TYPE);
            if sub != 0 && sub != 2 {
                return Err(invalid("RoadTileType", sub));
            }
            if cell.get(layout::road::ROADSIDE) == 4 {
                return Err(invalid("Roadside", 4));
            }
        }
        TileType::Railway => {
            let sub = cell.get(layout::rail::TILE_TYPE);
            if sub == 2 {
                return Err(invalid("RailTileType", sub));
            }
        }
        _ => {}
    }
    if tile_type != TileType::Void {
        validate_metro_word(cell.get(layout::METRO_WORD))?;
    }
    Ok(())
}

/// Reject metro words whose tracks or reservation do not decode: a
/// signaled single track past the last track, or a reservation code
/// naming tracks the mask does not have.
fn validate_metro_word(w: u32) -> Result<(), DecodeError> {
    const HAS_SIGNALS: BitRange = BitRange::bit(15);
    const DOUBLE_TRACK: BitRange = BitRange::bit(14);
    const SINGLE_TRACK: BitRange = BitRange::new(3, 3);
    const TRACK_MASK: BitRange = BitRange::new(0, 6);
    const RESERVATION: BitRange = BitRange::new(12, 3);
    const HORZ: u32 = 0x0C;
    const VERT: u32 = 0x30;

    let invalid = |kind: &'static str| DecodeError::InvalidDiscriminant { kind, value: w };
    if HAS_SIGNALS.extract(w) != 0 {
        if DOUBLE_TRACK.extract(w) == 0 && SINGLE_TRACK.extract(w) >= 6 {
            return Err(invalid("MetroTrack"));
        }
        return Ok(());
    }
    let mask = TRACK_MASK.extract(w);
    let reserved_ok = match RESERVATION.extract(w) {
        0 => true,
        7 => mask & HORZ == HORZ || mask & VERT == VERT,
        code => mask & (1 << (code - 1)) != 0,
    };
    if !reserved_ok {
        return Err(invalid("MetroReservation"));
    }
    Ok(())
}

// ── Save / load ─────────────────────────────────────────────────

/// Write `map` in the current format.
pub fn save(map: &TileMap, w: &mut dyn Write) -> Result<(), CodecError> {
    let config = map.config();
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u8(w, config.log_x)?;
    write_u8(w, config.log_y)?;

    for cell in map.cells() {
        write_cell(w, cell)?;
    }

    let entries: Vec<(TileIndex, &[Cell])> = map.layer_entries().collect();
    write_u32_le(w, entries.len() as u32)?;
    for (index, stack) in &entries {
        write_u32_le(w, index.0)?;
        write_u8(w, stack.len() as u8)?;
        for cell in stack.iter() {
            write_cell(w, cell)?;
        }
    }

    tracing::debug!(
        tiles = map.len(),
        layered_tiles = entries.len(),
        "saved tile map"
    );
    Ok(())
}

/// Read a map written by [`save`] or by a version 1 writer.
pub fn load(r: &mut dyn Read) -> Result<TileMap, CodecError> {
    let mut magic = [0u8; 4];
    read_exact(r, &mut magic, "magic")?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }

    let version = read_u8(r, "version")?;
    if version != FORMAT_VERSION && version != LEGACY_FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }

    let log_x = read_u8(r, "dimensions")?;
    let log_y = read_u8(r, "dimensions")?;
    let config = MapConfig::new(log_x, log_y)?;

    let mut reader = CellReader {
        version,
        report: MigrationReport::default(),
    };

    let tile_count = config.tile_count();
    let mut cells = Vec::with_capacity(tile_count);
    for i in 0..tile_count {
        cells.push(reader.read(r, TileIndex(i as u32))?);
    }
    let mut map = TileMap::from_cells(config, cells)?;

    let layered = read_u32_le(r, "layer count")?;
    for _ in 0..layered {
        let index = TileIndex(read_u32_le(r, "layer index")?);
        if !map.contains(index) {
            return Err(CodecError::LayerIndexOutOfRange { index });
        }
        let count = read_u8(r, "layer count")?;
        for _ in 0..count {
            let cell = reader.read(r, index)?;
            map.push_layer(index, cell)?;
        }
    }

    if version == LEGACY_FORMAT_VERSION {
        let report = reader.report;
        tracing::info!(
            cells = report.cells,
            house_types = report.house_types,
            rail_types = report.rail_types,
            tram_types = report.tram_types,
            "migrated legacy map to the current format"
        );
    }
    tracing::debug!(version, tiles = map.len(), layered_tiles = layered, "loaded tile map");
    Ok(map)
}
