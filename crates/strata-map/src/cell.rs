//! The fixed-width per-tile record and its named bit fields.

use strata_core::{BitRange, TileType};

use crate::layout;

/// One of the eleven storage slots of a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Coarse tile type, associated-tile flag and tropic zone.
    Kind,
    /// Terrain height.
    Height,
    /// Owner, water class, docking flag.
    M1,
    /// 16-bit id slot (depot, station or town).
    M2,
    /// General purpose byte.
    M3,
    /// General purpose byte.
    M4,
    /// General purpose byte, usually the subtype.
    M5,
    /// General purpose byte.
    M6,
    /// General purpose byte.
    M7,
    /// The metro word.
    M8,
    /// Extended 16-bit slot.
    M9,
}

impl Slot {
    /// Every slot in serialization order.
    pub const ALL: [Slot; 11] = [
        Slot::Kind,
        Slot::Height,
        Slot::M1,
        Slot::M2,
        Slot::M3,
        Slot::M4,
        Slot::M5,
        Slot::M6,
        Slot::M7,
        Slot::M8,
        Slot::M9,
    ];

    /// Width of the slot in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Slot::M2 | Slot::M8 | Slot::M9 => 16,
            _ => 8,
        }
    }
}

/// A named bit range inside one slot of a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Slot holding the field.
    pub slot: Slot,
    /// Bits of the slot covered by the field.
    pub range: BitRange,
}

impl Field {
    /// A field of `width` bits at `start` within `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit inside the slot.
    pub const fn new(slot: Slot, start: u8, width: u8) -> Self {
        let range = BitRange::new(start, width);
        assert!(range.end() <= slot.bits(), "field exceeds its slot");
        Self { slot, range }
    }

    /// A single-bit field.
    pub const fn bit(slot: Slot, index: u8) -> Self {
        Self::new(slot, index, 1)
    }

    /// A field covering the whole slot.
    pub const fn whole(slot: Slot) -> Self {
        Self::new(slot, 0, slot.bits())
    }

    /// Whether two fields share storage bits.
    pub const fn overlaps(self, other: Field) -> bool {
        self.slot as u8 == other.slot as u8 && self.range.overlaps(other.range)
    }
}

/// One tile's packed storage.
///
/// All slots start zeroed, which reads as clear land owned by
/// company 0 with an empty metro word. Use [`Cell::new`] for anything
/// else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: u8,
    height: u8,
    m1: u8,
    m2: u16,
    m3: u8,
    m4: u8,
    m5: u8,
    m6: u8,
    m7: u8,
    m8: u16,
    m9: u16,
}

impl Cell {
    /// Size of a serialized cell in bytes.
    pub const SERIALIZED_LEN: usize = 14;

    /// A zeroed cell of the given coarse type.
    pub fn new(tile_type: TileType) -> Cell {
        let mut cell = Cell::default();
        cell.set_tile_type(tile_type);
        cell
    }

    /// Raw value of a whole slot.
    pub fn slot(&self, slot: Slot) -> u16 {
        match slot {
            Slot::Kind => u16::from(self.kind),
            Slot::Height => u16::from(self.height),
            Slot::M1 => u16::from(self.m1),
            Slot::M2 => self.m2,
            Slot::M3 => u16::from(self.m3),
            Slot::M4 => u16::from(self.m4),
            Slot::M5 => u16::from(self.m5),
            Slot::M6 => u16::from(self.m6),
            Slot::M7 => u16::from(self.m7),
            Slot::M8 => self.m8,
            Slot::M9 => self.m9,
        }
    }

    /// Overwrite a whole slot. Byte slots keep only the low 8 bits.
    pub fn set_slot(&mut self, slot: Slot, value: u16) {
        debug_assert!(
            slot.bits() == 16 || value <= 0xFF,
            "value does not fit in byte slot"
        );
        let byte = value as u8;
        match slot {
            Slot::Kind => self.kind = byte,
            Slot::Height => self.height = byte,
            Slot::M1 => self.m1 = byte,
            Slot::M2 => self.m2 = value,
            Slot::M3 => self.m3 = byte,
            Slot::M4 => self.m4 = byte,
            Slot::M5 => self.m5 = byte,
            Slot::M6 => self.m6 = byte,
            Slot::M7 => self.m7 = byte,
            Slot::M8 => self.m8 = value,
            Slot::M9 => self.m9 = value,
        }
    }

    /// Read a field.
    pub fn get(&self, field: Field) -> u32 {
        field.range.extract(u32::from(self.slot(field.slot)))
    }

    /// Write a field, leaving every other bit of its slot unchanged.
    pub fn set(&mut self, field: Field, value: u32) {
        let word = field.range.insert(u32::from(self.slot(field.slot)), value);
        self.set_slot(field.slot, word as u16);
    }

    /// Read a single-bit field.
    pub fn flag(&self, field: Field) -> bool {
        self.get(field) != 0
    }

    /// Write a single-bit field.
    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.set(field, u32::from(value));
    }

    /// The coarse tile type.
    ///
    /// # Panics
    ///
    /// Panics if the type bits do not name a [`TileType`]. Cells built
    /// through [`Cell::new`] or loaded by the codec never do.
    pub fn tile_type(&self) -> TileType {
        match TileType::try_from(self.get(layout::TILE_TYPE) as u8) {
            Ok(t) => t,
            Err(e) => panic!("corrupt cell: {e}"),
        }
    }

    /// Overwrite the coarse tile type without touching any other field.
    pub fn set_tile_type(&mut self, tile_type: TileType) {
        self.set(layout::TILE_TYPE, tile_type as u32);
    }

    /// Serialize in slot order, words little-endian.
    pub fn to_le_bytes(&self) -> [u8; Cell::SERIALIZED_LEN] {
        let mut out = [0u8; Cell::SERIALIZED_LEN];
        out[0] = self.kind;
        out[1] = self.height;
        out[2] = self.m1;
        out[3..5].copy_from_slice(&self.m2.to_le_bytes());
        out[5] = self.m3;
        out[6] = self.m4;
        out[7] = self.m5;
        out[8] = self.m6;
        out[9] = self.m7;
        out[10..12].copy_from_slice(&self.m8.to_le_bytes());
        out[12..14].copy_from_slice(&self.m9.to_le_bytes());
        out
    }

    /// Inverse of [`to_le_bytes`](Self::to_le_bytes). Performs no validation.
    pub fn from_le_bytes(b: [u8; Cell::SERIALIZED_LEN]) -> Cell {
        Cell {
            kind: b[0],
            height: b[1],
            m1: b[2],
            m2: u16::from_le_bytes([b[3], b[4]]),
            m3: b[5],
            m4: b[6],
            m5: b[7],
            m6: b[8],
            m7: b[9],
            m8: u16::from_le_bytes([b[10], b[11]]),
            m9: u16::from_le_bytes([b[12], b[13]]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_sets_only_type() {
        let cell = Cell::new(TileType::Water);
        assert_eq!(cell.tile_type(), TileType::Water);
        assert_eq!(cell.slot(Slot::Kind), 0x60);
        for slot in &Slot::ALL[1..] {
            assert_eq!(cell.slot(*slot), 0);
        }
    }

    #[test]
    fn field_writes_are_local() {
        let mut cell = Cell::new(TileType::Road);
        let a = Field::new(Slot::M5, 0, 4);
        let b = Field::new(Slot::M5, 4, 2);
        cell.set(a, 0b1010);
        cell.set(b, 0b11);
        cell.set(a, 0b0101);
        assert_eq!(cell.get(a), 0b0101);
        assert_eq!(cell.get(b), 0b11);
        assert_eq!(cell.slot(Slot::M5), 0b11_0101);
    }

    #[test]
    fn flag_round_trip() {
        let mut cell = Cell::default();
        let f = Field::bit(Slot::M1, 7);
        cell.set_flag(f, true);
        assert!(cell.flag(f));
        assert_eq!(cell.slot(Slot::M1), 0x80);
        cell.set_flag(f, false);
        assert!(!cell.flag(f));
    }

    #[test]
    fn field_overlap() {
        assert!(Field::new(Slot::M5, 0, 4).overlaps(Field::bit(Slot::M5, 3)));
        assert!(!Field::new(Slot::M5, 0, 4).overlaps(Field::new(Slot::M6, 0, 4)));
    }

    #[test]
    #[should_panic(expected = "corrupt cell")]
    fn invalid_type_bits_panic() {
        let mut cell = Cell::default();
        cell.set(layout::TILE_TYPE, 15);
        let _ = cell.tile_type();
    }

    proptest! {
        #[test]
        fn byte_image_is_lossless(bytes in proptest::array::uniform14(any::<u8>())) {
            let cell = Cell::from_le_bytes(bytes);
            prop_assert_eq!(cell.to_le_bytes(), bytes);
        }
    }
}
