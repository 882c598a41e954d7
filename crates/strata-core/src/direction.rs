//! Diagonal directions and map axes.
//!
//! The map's x axis runs towards the south-west, the y axis towards the
//! south-east. A [`DiagDirection`] names one of the four tile edges.

use crate::error::DecodeError;

/// One of the four edges of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DiagDirection {
    /// Towards decreasing x.
    NorthEast = 0,
    /// Towards increasing y.
    SouthEast = 1,
    /// Towards increasing x.
    SouthWest = 2,
    /// Towards decreasing y.
    NorthWest = 3,
}

impl DiagDirection {
    /// All directions in discriminant order.
    pub const ALL: [DiagDirection; 4] = [
        DiagDirection::NorthEast,
        DiagDirection::SouthEast,
        DiagDirection::SouthWest,
        DiagDirection::NorthWest,
    ];

    /// The opposite edge.
    pub const fn reverse(self) -> DiagDirection {
        match self {
            DiagDirection::NorthEast => DiagDirection::SouthWest,
            DiagDirection::SouthEast => DiagDirection::NorthWest,
            DiagDirection::SouthWest => DiagDirection::NorthEast,
            DiagDirection::NorthWest => DiagDirection::SouthEast,
        }
    }

    /// Axis a vehicle moving in this direction travels along.
    pub const fn axis(self) -> Axis {
        match self {
            DiagDirection::NorthEast | DiagDirection::SouthWest => Axis::X,
            DiagDirection::SouthEast | DiagDirection::NorthWest => Axis::Y,
        }
    }

    /// Unit step `(dx, dy)` towards the neighbouring tile on this edge.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            DiagDirection::NorthEast => (-1, 0),
            DiagDirection::SouthEast => (0, 1),
            DiagDirection::SouthWest => (1, 0),
            DiagDirection::NorthWest => (0, -1),
        }
    }

    /// Direction along `axis`, towards the north end when `south` is false.
    pub const fn from_axis(axis: Axis, south: bool) -> DiagDirection {
        match (axis, south) {
            (Axis::X, false) => DiagDirection::NorthEast,
            (Axis::X, true) => DiagDirection::SouthWest,
            (Axis::Y, false) => DiagDirection::NorthWest,
            (Axis::Y, true) => DiagDirection::SouthEast,
        }
    }
}

impl TryFrom<u8> for DiagDirection {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DiagDirection::NorthEast),
            1 => Ok(DiagDirection::SouthEast),
            2 => Ok(DiagDirection::SouthWest),
            3 => Ok(DiagDirection::NorthWest),
            _ => Err(DecodeError::new("DiagDirection", v)),
        }
    }
}

/// One of the two map axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// Along x (north-east to south-west).
    X = 0,
    /// Along y (north-west to south-east).
    Y = 1,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Unit step `(dx, dy)` in the positive direction of this axis.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Axis::X => (1, 0),
            Axis::Y => (0, 1),
        }
    }

    /// Decode from a single bit.
    pub const fn from_bit(bit: bool) -> Axis {
        if bit {
            Axis::Y
        } else {
            Axis::X
        }
    }
}
