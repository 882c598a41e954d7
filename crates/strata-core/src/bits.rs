//! The [`BitRange`] pack/unpack primitive.
//!
//! Every persisted layout in Strata is a set of named `BitRange`
//! constants over a storage slot. Encoders never shift or mask by hand;
//! they go through [`BitRange::extract`] and [`BitRange::insert`].

/// A contiguous run of bits inside a storage word of at most 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitRange {
    /// Index of the least significant bit of the range.
    pub start: u8,
    /// Number of bits in the range (at least 1).
    pub width: u8,
}

impl BitRange {
    /// Create a range of `width` bits starting at bit `start`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if the range is
    /// empty or extends past bit 31.
    pub const fn new(start: u8, width: u8) -> Self {
        assert!(width > 0, "bit range must be at least one bit wide");
        assert!(
            start as u32 + width as u32 <= 32,
            "bit range must fit in a 32-bit word"
        );
        Self { start, width }
    }

    /// A single-bit range at `index`.
    pub const fn bit(index: u8) -> Self {
        Self::new(index, 1)
    }

    /// One past the most significant bit of the range.
    pub const fn end(self) -> u8 {
        self.start + self.width
    }

    /// Largest value the range can hold.
    pub const fn max_value(self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// The range as a mask over the containing word.
    pub const fn mask(self) -> u32 {
        self.max_value() << self.start
    }

    /// Read the range out of `word`.
    ///
    /// ```
    /// use strata_core::BitRange;
    ///
    /// let r = BitRange::new(4, 4);
    /// assert_eq!(r.extract(0b1010_0110), 0b1010);
    /// ```
    pub const fn extract(self, word: u32) -> u32 {
        (word >> self.start) & self.max_value()
    }

    /// Return `word` with the range replaced by `value`.
    ///
    /// Bits of `value` above the range width are discarded; debug builds
    /// assert that none are set.
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        debug_assert!(value <= self.max_value(), "value does not fit in bit range");
        (word & !self.mask()) | ((value & self.max_value()) << self.start)
    }

    /// Whether two ranges share at least one bit.
    pub const fn overlaps(self, other: BitRange) -> bool {
        self.mask() & other.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mask_and_max_value() {
        let r = BitRange::new(6, 6);
        assert_eq!(r.max_value(), 0x3F);
        assert_eq!(r.mask(), 0x0FC0);
        assert_eq!(r.end(), 12);
    }

    #[test]
    fn full_word_range() {
        let r = BitRange::new(0, 32);
        assert_eq!(r.max_value(), u32::MAX);
        assert_eq!(r.extract(0xDEAD_BEEF), 0xDEAD_BEEF);
    }

    #[test]
    fn insert_leaves_neighbours_alone() {
        let r = BitRange::new(12, 3);
        let word = 0xFFFF;
        assert_eq!(r.insert(word, 0), 0x8FFF);
        assert_eq!(r.insert(0, 7), 0x7000);
    }

    #[test]
    fn overlap_detection() {
        assert!(BitRange::new(0, 6).overlaps(BitRange::new(3, 3)));
        assert!(!BitRange::new(0, 6).overlaps(BitRange::new(6, 6)));
        assert!(BitRange::bit(14).overlaps(BitRange::new(12, 3)));
    }

    proptest! {
        #[test]
        fn insert_then_extract_returns_value(
            start in 0u8..16,
            width in 1u8..16,
            word in any::<u32>(),
            value in any::<u32>(),
        ) {
            let r = BitRange::new(start, width);
            let v = value & r.max_value();
            let written = r.insert(word, v);
            prop_assert_eq!(r.extract(written), v);
            prop_assert_eq!(written & !r.mask(), word & !r.mask());
        }
    }
}
