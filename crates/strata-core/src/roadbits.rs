//! Road piece masks and the road/tram mode split.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Which of the two independent road layers a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RoadTramType {
    /// Ordinary road.
    Road = 0,
    /// Tram tracks.
    Tram = 1,
}

impl RoadTramType {
    /// Both modes, road first.
    pub const ALL: [RoadTramType; 2] = [RoadTramType::Road, RoadTramType::Tram];
}

/// The half-tile road pieces present on a tile, one bit per edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoadBits(u8);

impl RoadBits {
    /// No road.
    pub const NONE: RoadBits = RoadBits(0);
    /// North-west half.
    pub const NW: RoadBits = RoadBits(1);
    /// South-west half.
    pub const SW: RoadBits = RoadBits(2);
    /// South-east half.
    pub const SE: RoadBits = RoadBits(4);
    /// North-east half.
    pub const NE: RoadBits = RoadBits(8);
    /// Straight road along x.
    pub const X: RoadBits = RoadBits(2 | 8);
    /// Straight road along y.
    pub const Y: RoadBits = RoadBits(1 | 4);
    /// Every piece.
    pub const ALL: RoadBits = RoadBits(0x0F);

    /// Build a mask from raw bits, discarding bits above 3.
    pub const fn from_bits_truncate(bits: u8) -> RoadBits {
        RoadBits(bits & Self::ALL.0)
    }

    /// The raw mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no piece is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every piece of `other` is present.
    pub const fn contains(self, other: RoadBits) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of pieces present.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for RoadBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoadBits({:#06b})", self.0)
    }
}

impl BitOr for RoadBits {
    type Output = RoadBits;
    fn bitor(self, rhs: RoadBits) -> RoadBits {
        RoadBits(self.0 | rhs.0)
    }
}

impl BitAnd for RoadBits {
    type Output = RoadBits;
    fn bitand(self, rhs: RoadBits) -> RoadBits {
        RoadBits(self.0 & rhs.0)
    }
}

impl Not for RoadBits {
    type Output = RoadBits;
    fn not(self) -> RoadBits {
        RoadBits(!self.0 & Self::ALL.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_pieces() {
        assert_eq!(RoadBits::X | RoadBits::Y, RoadBits::ALL);
        assert_eq!(!RoadBits::X, RoadBits::Y);
        assert_eq!(RoadBits::from_bits_truncate(0b1001), RoadBits::NW | RoadBits::NE);
        assert_eq!(RoadBits::from_bits_truncate(0xF3).bits(), 0x03);
    }
}
