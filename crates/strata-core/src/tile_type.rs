//! The coarse per-cell discriminant.

use crate::error::DecodeError;

/// Top-level classification of a cell. Selects how every other slot of
/// the cell is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileType {
    /// Bare land, grass, rocks, fields.
    Clear = 0,
    /// Surface rail, including signals and rail depots.
    Railway = 1,
    /// Roads, level crossings and road depots.
    Road = 2,
    /// Town buildings.
    House = 3,
    /// Trees.
    Trees = 4,
    /// Any station part, including airports and docks.
    Station = 5,
    /// Sea, canals, rivers, coasts, locks and ship depots.
    Water = 6,
    /// The off-map border.
    Void = 7,
    /// Industry buildings.
    Industry = 8,
    /// Tunnel entrances and bridge heads.
    TunnelBridge = 9,
    /// Miscellaneous objects (lighthouses, company HQs, ...).
    Object = 10,
}

impl TileType {
    /// All coarse types in discriminant order.
    pub const ALL: [TileType; 11] = [
        TileType::Clear,
        TileType::Railway,
        TileType::Road,
        TileType::House,
        TileType::Trees,
        TileType::Station,
        TileType::Water,
        TileType::Void,
        TileType::Industry,
        TileType::TunnelBridge,
        TileType::Object,
    ];

    /// Whether a cell of this type may carry associated layer cells.
    pub const fn may_have_associated_tile(self) -> bool {
        matches!(
            self,
            TileType::Clear
                | TileType::Railway
                | TileType::Road
                | TileType::Water
                | TileType::TunnelBridge
        )
    }

    /// Whether a cell of this type stores a water class in `m1`.
    pub const fn has_water_class(self) -> bool {
        matches!(
            self,
            TileType::Water | TileType::Station | TileType::Industry | TileType::Object
        )
    }
}

impl TryFrom<u8> for TileType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        TileType::ALL
            .get(usize::from(v))
            .copied()
            .ok_or(DecodeError::new("TileType", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_table() {
        for (i, t) in TileType::ALL.iter().enumerate() {
            assert_eq!(*t as usize, i);
            assert_eq!(TileType::try_from(i as u8), Ok(*t));
        }
        assert!(TileType::try_from(11).is_err());
    }

    #[test]
    fn associated_tile_support() {
        let allowed: Vec<TileType> = TileType::ALL
            .into_iter()
            .filter(|t| t.may_have_associated_tile())
            .collect();
        assert_eq!(
            allowed,
            vec![
                TileType::Clear,
                TileType::Railway,
                TileType::Road,
                TileType::Water,
                TileType::TunnelBridge
            ]
        );
    }
}
