//! Strongly-typed identifiers.
//!
//! Every id is a transparent newtype over the width it is persisted in.
//! Encoders accept and return these types so that, for example, a depot
//! id can never be written into a town id slot by accident.

use std::fmt;

/// Linear index of a tile in a tile map.
///
/// `index = y * size_x + x`. The map owns the conversion in both
/// directions; this type only carries the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex(pub u32);

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Owner of a tile or of a piece of infrastructure on it.
///
/// Values `0..=14` are companies. The remaining values are the fixed
/// pseudo-owners below. Persisted in 5 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Owner(pub u8);

impl Owner {
    /// Number of company slots.
    pub const MAX_COMPANIES: u8 = 15;
    /// Owned by the local town.
    pub const TOWN: Owner = Owner(0x0F);
    /// Not owned by anyone.
    pub const NONE: Owner = Owner(0x10);
    /// Owned by the sea (used for flooded tiles).
    pub const WATER: Owner = Owner(0x11);
    /// Owned by a scripted game authority.
    pub const DEITY: Owner = Owner(0x12);

    /// Company number `n`.
    pub const fn company(n: u8) -> Owner {
        assert!(n < Self::MAX_COMPANIES, "company index out of range");
        Owner(n)
    }

    /// Whether this owner is a company rather than a pseudo-owner.
    pub const fn is_company(self) -> bool {
        self.0 < Self::MAX_COMPANIES
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Owner::TOWN => f.write_str("town"),
            Owner::NONE => f.write_str("none"),
            Owner::WATER => f.write_str("water"),
            Owner::DEITY => f.write_str("deity"),
            Owner(n) => write!(f, "company {n}"),
        }
    }
}

/// Identifies a depot record (rail, road or ship depot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepotId(pub u16);

impl fmt::Display for DepotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a station record. Hangars resolve to their airport's station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u16);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the town a road tile belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TownId(pub u16);

impl TownId {
    /// No town.
    pub const INVALID: TownId = TownId(u16::MAX);
}

impl fmt::Display for TownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Road or tram type. Persisted in 6 bits; [`RoadTypeId::INVALID`] marks
/// an absent road or tram layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoadTypeId(pub u8);

impl RoadTypeId {
    /// Sentinel for "no road type present".
    pub const INVALID: RoadTypeId = RoadTypeId(63);

    /// Whether this is a real road type.
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Display for RoadTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rail type, shared by surface rail and metro. Persisted in 6 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RailTypeId(pub u8);

impl RailTypeId {
    /// Sentinel for "no rail type present".
    pub const INVALID: RailTypeId = RailTypeId(63);
}

impl fmt::Display for RailTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// House type. Persisted in 16 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HouseId(pub u16);

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
