//! Road type configuration.
//!
//! The cell only stores a 6-bit road type id per layer. Whether an id
//! names a road or a tram type is game data; [`RoadTypeTable`] carries
//! it so constructors can route an id to the right layer.

use strata_core::{RoadTramType, RoadTypeId};

use crate::error::RoadTypeError;

/// Which road type ids are tram types.
///
/// Every id is a road type unless marked otherwise. Default: no tram
/// types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoadTypeTable {
    trams: u64,
}

impl RoadTypeTable {
    /// A table in which every id is a road type.
    pub const fn new() -> Self {
        Self { trams: 0 }
    }

    /// Build a table marking each of `ids` as a tram type.
    pub fn with_tram_types(
        ids: impl IntoIterator<Item = RoadTypeId>,
    ) -> Result<Self, RoadTypeError> {
        let mut table = Self::new();
        for id in ids {
            table.set_mode(id, RoadTramType::Tram)?;
        }
        Ok(table)
    }

    /// Assign `id` to a layer.
    pub fn set_mode(&mut self, id: RoadTypeId, mode: RoadTramType) -> Result<(), RoadTypeError> {
        Self::validate(id)?;
        match mode {
            RoadTramType::Road => self.trams &= !(1u64 << id.0),
            RoadTramType::Tram => self.trams |= 1u64 << id.0,
        }
        Ok(())
    }

    /// The layer `id` belongs to.
    pub fn mode(&self, id: RoadTypeId) -> Result<RoadTramType, RoadTypeError> {
        Self::validate(id)?;
        Ok(if self.trams & (1u64 << id.0) != 0 {
            RoadTramType::Tram
        } else {
            RoadTramType::Road
        })
    }

    /// Whether `id` is a valid tram type.
    pub fn is_tram(&self, id: RoadTypeId) -> bool {
        self.mode(id) == Ok(RoadTramType::Tram)
    }

    /// Check that `id` may be written to the `expected` layer. The
    /// sentinel is accepted for either layer.
    pub fn check(&self, id: RoadTypeId, expected: RoadTramType) -> Result<(), RoadTypeError> {
        if id == RoadTypeId::INVALID {
            return Ok(());
        }
        let found = self.mode(id)?;
        if found != expected {
            return Err(RoadTypeError::WrongMode { id, expected, found });
        }
        Ok(())
    }

    fn validate(id: RoadTypeId) -> Result<(), RoadTypeError> {
        if id.0 < RoadTypeId::INVALID.0 {
            Ok(())
        } else {
            Err(RoadTypeError::InvalidId { id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_road() {
        let table = RoadTypeTable::default();
        assert_eq!(table.mode(RoadTypeId(0)), Ok(RoadTramType::Road));
        assert_eq!(table.mode(RoadTypeId(62)), Ok(RoadTramType::Road));
        assert!(!table.is_tram(RoadTypeId(5)));
    }

    #[test]
    fn tram_types_marked() {
        let table = RoadTypeTable::with_tram_types([RoadTypeId(2), RoadTypeId(40)]).unwrap();
        assert!(table.is_tram(RoadTypeId(2)));
        assert!(table.is_tram(RoadTypeId(40)));
        assert!(!table.is_tram(RoadTypeId(3)));
    }

    #[test]
    fn set_mode_back_to_road() {
        let mut table = RoadTypeTable::with_tram_types([RoadTypeId(7)]).unwrap();
        table.set_mode(RoadTypeId(7), RoadTramType::Road).unwrap();
        assert!(!table.is_tram(RoadTypeId(7)));
    }

    #[test]
    fn sentinel_and_wide_ids_rejected() {
        let mut table = RoadTypeTable::new();
        assert_eq!(
            table.set_mode(RoadTypeId::INVALID, RoadTramType::Tram),
            Err(RoadTypeError::InvalidId { id: RoadTypeId::INVALID })
        );
        assert!(table.mode(RoadTypeId(64)).is_err());
        assert!(!table.is_tram(RoadTypeId(200)));
    }

    #[test]
    fn check_by_layer() {
        let table = RoadTypeTable::with_tram_types([RoadTypeId(1)]).unwrap();
        assert!(table.check(RoadTypeId(0), RoadTramType::Road).is_ok());
        assert!(table.check(RoadTypeId::INVALID, RoadTramType::Tram).is_ok());
        assert_eq!(
            table.check(RoadTypeId(1), RoadTramType::Road),
            Err(RoadTypeError::WrongMode {
                id: RoadTypeId(1),
                expected: RoadTramType::Road,
                found: RoadTramType::Tram,
            })
        );
    }
}
