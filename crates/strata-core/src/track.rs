//! Rail track geometry: tracks, track masks and track directions.
//!
//! A tile carries up to six track pieces. `X` and `Y` run corner to
//! corner along the axes; `Upper`/`Lower` are the two horizontal pieces
//! and `Left`/`Right` the two vertical pieces. The parallel pairs
//! ([`TrackBits::HORZ`], [`TrackBits::VERT`]) never cross each other;
//! every other combination of two or more pieces meets at a point.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::error::DecodeError;

/// One of the six track pieces of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Track {
    /// Diagonal along the x axis.
    X = 0,
    /// Diagonal along the y axis.
    Y = 1,
    /// Horizontal piece in the upper corner.
    Upper = 2,
    /// Horizontal piece in the lower corner.
    Lower = 3,
    /// Vertical piece in the left corner.
    Left = 4,
    /// Vertical piece in the right corner.
    Right = 5,
}

impl Track {
    /// All tracks in discriminant order.
    pub const ALL: [Track; 6] = [
        Track::X,
        Track::Y,
        Track::Upper,
        Track::Lower,
        Track::Left,
        Track::Right,
    ];

    /// The single-bit mask for this track.
    pub const fn bits(self) -> TrackBits {
        TrackBits(1 << self as u8)
    }

    /// Whether this is one of the two axis-aligned diagonals.
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Track::X | Track::Y)
    }
}

impl TryFrom<u8> for Track {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Track::X),
            1 => Ok(Track::Y),
            2 => Ok(Track::Upper),
            3 => Ok(Track::Lower),
            4 => Ok(Track::Left),
            5 => Ok(Track::Right),
            _ => Err(DecodeError::new("Track", v)),
        }
    }
}

/// A set of tracks, stored as a 6-bit mask indexed by [`Track`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrackBits(u8);

impl TrackBits {
    /// No tracks.
    pub const NONE: TrackBits = TrackBits(0);
    /// [`Track::X`].
    pub const X: TrackBits = TrackBits(0x01);
    /// [`Track::Y`].
    pub const Y: TrackBits = TrackBits(0x02);
    /// [`Track::Upper`].
    pub const UPPER: TrackBits = TrackBits(0x04);
    /// [`Track::Lower`].
    pub const LOWER: TrackBits = TrackBits(0x08);
    /// [`Track::Left`].
    pub const LEFT: TrackBits = TrackBits(0x10);
    /// [`Track::Right`].
    pub const RIGHT: TrackBits = TrackBits(0x20);
    /// Both diagonals.
    pub const CROSS: TrackBits = TrackBits(0x03);
    /// Upper and lower.
    pub const HORZ: TrackBits = TrackBits(0x0C);
    /// Left and right.
    pub const VERT: TrackBits = TrackBits(0x30);
    /// Every track.
    pub const ALL: TrackBits = TrackBits(0x3F);

    /// Build a mask from raw bits, or `None` if bits above 5 are set.
    pub const fn from_bits(bits: u8) -> Option<TrackBits> {
        if bits & !Self::ALL.0 == 0 {
            Some(TrackBits(bits))
        } else {
            None
        }
    }

    /// Build a mask from raw bits, discarding bits above 5.
    pub const fn from_bits_truncate(bits: u8) -> TrackBits {
        TrackBits(bits & Self::ALL.0)
    }

    /// The raw mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `track` is in the set.
    pub const fn has(self, track: Track) -> bool {
        self.0 & track.bits().0 != 0
    }

    /// Whether every track of `other` is in the set.
    pub const fn contains(self, other: TrackBits) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the two sets share a track.
    pub const fn intersects(self, other: TrackBits) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of tracks in the set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The set with `track` added.
    pub const fn with(self, track: Track) -> TrackBits {
        TrackBits(self.0 | track.bits().0)
    }

    /// The set with `track` removed.
    pub const fn without(self, track: Track) -> TrackBits {
        TrackBits(self.0 & !track.bits().0)
    }

    /// Lowest-numbered track in the set.
    pub fn first(self) -> Option<Track> {
        if self.0 == 0 {
            return None;
        }
        Track::try_from(self.0.trailing_zeros() as u8).ok()
    }

    /// The only track in the set, if it has exactly one.
    pub fn single(self) -> Option<Track> {
        if self.count() == 1 {
            self.first()
        } else {
            None
        }
    }

    /// Iterate the tracks of the set in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = Track> {
        Track::ALL.into_iter().filter(move |t| self.has(*t))
    }

    /// Whether the tracks of the set cross each other.
    ///
    /// Zero or one track never overlaps. Two or more tracks overlap
    /// unless the set is exactly [`HORZ`](Self::HORZ) or exactly
    /// [`VERT`](Self::VERT).
    pub const fn overlaps(self) -> bool {
        if self.0 == 0 || self.0 & (self.0 - 1) == 0 {
            return false;
        }
        self.0 != Self::HORZ.0 && self.0 != Self::VERT.0
    }
}

/// Whether the tracks of `bits` cross each other. See [`TrackBits::overlaps`].
pub const fn tracks_overlap(bits: TrackBits) -> bool {
    bits.overlaps()
}

impl fmt::Debug for TrackBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackBits({:#08b})", self.0)
    }
}

impl From<Track> for TrackBits {
    fn from(t: Track) -> Self {
        t.bits()
    }
}

impl BitOr for TrackBits {
    type Output = TrackBits;
    fn bitor(self, rhs: TrackBits) -> TrackBits {
        TrackBits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TrackBits {
    fn bitor_assign(&mut self, rhs: TrackBits) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for TrackBits {
    type Output = TrackBits;
    fn bitand(self, rhs: TrackBits) -> TrackBits {
        TrackBits(self.0 & rhs.0)
    }
}

impl BitAndAssign for TrackBits {
    fn bitand_assign(&mut self, rhs: TrackBits) {
        self.0 &= rhs.0;
    }
}

impl Not for TrackBits {
    type Output = TrackBits;
    fn not(self) -> TrackBits {
        TrackBits(!self.0 & Self::ALL.0)
    }
}

/// A track together with a travel direction along it.
///
/// Forward trackdirs have discriminants `0..=5`, reverse ones `8..=13`;
/// the low three bits are always the [`Track`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Trackdir {
    /// X track towards north-east.
    XNe = 0,
    /// Y track towards south-east.
    YSe = 1,
    /// Upper track towards east.
    UpperE = 2,
    /// Lower track towards east.
    LowerE = 3,
    /// Left track towards south.
    LeftS = 4,
    /// Right track towards south.
    RightS = 5,
    /// X track, reverse.
    XSw = 8,
    /// Y track, reverse.
    YNw = 9,
    /// Upper track towards west.
    UpperW = 10,
    /// Lower track towards west.
    LowerW = 11,
    /// Left track towards north.
    LeftN = 12,
    /// Right track towards north.
    RightN = 13,
}

impl Trackdir {
    /// Forward trackdirs followed by reverse ones.
    pub const ALL: [Trackdir; 12] = [
        Trackdir::XNe,
        Trackdir::YSe,
        Trackdir::UpperE,
        Trackdir::LowerE,
        Trackdir::LeftS,
        Trackdir::RightS,
        Trackdir::XSw,
        Trackdir::YNw,
        Trackdir::UpperW,
        Trackdir::LowerW,
        Trackdir::LeftN,
        Trackdir::RightN,
    ];

    /// The trackdir on `track`, reversed when `reverse` is set.
    pub const fn new(track: Track, reverse: bool) -> Trackdir {
        match (track, reverse) {
            (Track::X, false) => Trackdir::XNe,
            (Track::Y, false) => Trackdir::YSe,
            (Track::Upper, false) => Trackdir::UpperE,
            (Track::Lower, false) => Trackdir::LowerE,
            (Track::Left, false) => Trackdir::LeftS,
            (Track::Right, false) => Trackdir::RightS,
            (Track::X, true) => Trackdir::XSw,
            (Track::Y, true) => Trackdir::YNw,
            (Track::Upper, true) => Trackdir::UpperW,
            (Track::Lower, true) => Trackdir::LowerW,
            (Track::Left, true) => Trackdir::LeftN,
            (Track::Right, true) => Trackdir::RightN,
        }
    }

    /// The underlying track.
    pub const fn track(self) -> Track {
        match self {
            Trackdir::XNe | Trackdir::XSw => Track::X,
            Trackdir::YSe | Trackdir::YNw => Track::Y,
            Trackdir::UpperE | Trackdir::UpperW => Track::Upper,
            Trackdir::LowerE | Trackdir::LowerW => Track::Lower,
            Trackdir::LeftS | Trackdir::LeftN => Track::Left,
            Trackdir::RightS | Trackdir::RightN => Track::Right,
        }
    }

    /// Whether this is the reverse direction of its track.
    pub const fn is_reverse(self) -> bool {
        self as u8 >= 8
    }

    /// The same track travelled the other way.
    pub const fn reverse(self) -> Trackdir {
        Trackdir::new(self.track(), !self.is_reverse())
    }
}

impl TryFrom<u8> for Trackdir {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        let track = Track::try_from(v & 7).map_err(|_| DecodeError::new("Trackdir", v))?;
        match v & !7 {
            0 => Ok(Trackdir::new(track, false)),
            8 => Ok(Trackdir::new(track, true)),
            _ => Err(DecodeError::new("Trackdir", v)),
        }
    }
}

/// Orientation of a parallel track pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DoubleTrackDirection {
    /// [`Track::Upper`] and [`Track::Lower`].
    Horizontal = 0,
    /// [`Track::Left`] and [`Track::Right`].
    Vertical = 1,
}

impl DoubleTrackDirection {
    /// Both tracks of the pair.
    pub const fn track_bits(self) -> TrackBits {
        match self {
            DoubleTrackDirection::Horizontal => TrackBits::HORZ,
            DoubleTrackDirection::Vertical => TrackBits::VERT,
        }
    }

    /// Upper or left track.
    pub const fn first(self) -> Track {
        match self {
            DoubleTrackDirection::Horizontal => Track::Upper,
            DoubleTrackDirection::Vertical => Track::Left,
        }
    }

    /// Lower or right track.
    pub const fn second(self) -> Track {
        match self {
            DoubleTrackDirection::Horizontal => Track::Lower,
            DoubleTrackDirection::Vertical => Track::Right,
        }
    }

    /// The pair a track belongs to, or `None` for the diagonals.
    pub const fn of_track(track: Track) -> Option<DoubleTrackDirection> {
        match track {
            Track::Upper | Track::Lower => Some(DoubleTrackDirection::Horizontal),
            Track::Left | Track::Right => Some(DoubleTrackDirection::Vertical),
            Track::X | Track::Y => None,
        }
    }

    /// The pair that is exactly `bits`, if any.
    pub const fn from_track_bits(bits: TrackBits) -> Option<DoubleTrackDirection> {
        if bits.0 == TrackBits::HORZ.0 {
            Some(DoubleTrackDirection::Horizontal)
        } else if bits.0 == TrackBits::VERT.0 {
            Some(DoubleTrackDirection::Vertical)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Track / TrackBits ───────────────────────────────────────

    #[test]
    fn track_bit_values() {
        let raw: Vec<u8> = Track::ALL.iter().map(|t| t.bits().bits()).collect();
        assert_eq!(raw, vec![1, 2, 4, 8, 16, 32]);
        assert_eq!((TrackBits::UPPER | TrackBits::LOWER), TrackBits::HORZ);
        assert_eq!((TrackBits::LEFT | TrackBits::RIGHT), TrackBits::VERT);
    }

    #[test]
    fn first_and_single() {
        assert_eq!(TrackBits::HORZ.first(), Some(Track::Upper));
        assert_eq!(TrackBits::HORZ.single(), None);
        assert_eq!(TrackBits::RIGHT.single(), Some(Track::Right));
        assert_eq!(TrackBits::NONE.first(), None);
    }

    #[test]
    fn overlap_rule() {
        assert!(!TrackBits::NONE.overlaps());
        assert!(!TrackBits::X.overlaps());
        assert!(!TrackBits::HORZ.overlaps());
        assert!(!TrackBits::VERT.overlaps());
        assert!(TrackBits::CROSS.overlaps());
        assert!((TrackBits::UPPER | TrackBits::LEFT).overlaps());
        assert!((TrackBits::HORZ | TrackBits::VERT).overlaps());
        assert!((TrackBits::X | TrackBits::UPPER).overlaps());
    }

    #[test]
    fn not_stays_within_mask() {
        assert_eq!(!TrackBits::NONE, TrackBits::ALL);
        assert_eq!(!TrackBits::HORZ, TrackBits::CROSS | TrackBits::VERT);
    }

    #[test]
    fn from_bits_rejects_high_bits() {
        assert_eq!(TrackBits::from_bits(0x3F), Some(TrackBits::ALL));
        assert_eq!(TrackBits::from_bits(0x40), None);
        assert_eq!(TrackBits::from_bits_truncate(0xFF), TrackBits::ALL);
    }

    // ── Trackdir ────────────────────────────────────────────────

    #[test]
    fn trackdir_discriminants() {
        for td in Trackdir::ALL {
            assert_eq!(td.track() as u8, td as u8 & 7);
            assert_eq!(Trackdir::try_from(td as u8), Ok(td));
            assert_eq!(td.reverse().reverse(), td);
            assert_ne!(td.reverse().is_reverse(), td.is_reverse());
        }
        assert!(Trackdir::try_from(6).is_err());
        assert!(Trackdir::try_from(14).is_err());
        assert!(Trackdir::try_from(16).is_err());
    }

    // ── DoubleTrackDirection ────────────────────────────────────

    #[test]
    fn double_track_pairs() {
        for dir in [DoubleTrackDirection::Horizontal, DoubleTrackDirection::Vertical] {
            let bits = dir.track_bits();
            assert_eq!(bits, dir.first().bits() | dir.second().bits());
            assert_eq!(DoubleTrackDirection::from_track_bits(bits), Some(dir));
            assert_eq!(DoubleTrackDirection::of_track(dir.first()), Some(dir));
            assert_eq!(DoubleTrackDirection::of_track(dir.second()), Some(dir));
        }
        assert_eq!(DoubleTrackDirection::of_track(Track::X), None);
        assert_eq!(DoubleTrackDirection::from_track_bits(TrackBits::CROSS), None);
    }

    proptest! {
        #[test]
        fn iter_reassembles_mask(raw in 0u8..64) {
            let bits = TrackBits::from_bits_truncate(raw);
            let rebuilt = bits.iter().fold(TrackBits::NONE, |acc, t| acc.with(t));
            prop_assert_eq!(rebuilt, bits);
            prop_assert_eq!(bits.iter().count() as u32, bits.count());
        }
    }
}
