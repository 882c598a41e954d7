//! Error types for road type configuration.

use strata_core::{RoadTramType, RoadTypeId};
use thiserror::Error;

/// A road type id was rejected by a [`RoadTypeTable`](crate::RoadTypeTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RoadTypeError {
    /// The id is the "no road type" sentinel or does not fit in 6 bits.
    #[error("road type {id} is not a real road type")]
    InvalidId {
        /// The rejected id.
        id: RoadTypeId,
    },
    /// The id belongs to the other layer.
    #[error("road type {id} is a {found:?} type, expected {expected:?}")]
    WrongMode {
        /// The rejected id.
        id: RoadTypeId,
        /// The layer the caller tried to write.
        expected: RoadTramType,
        /// The layer the table assigns the id to.
        found: RoadTramType,
    },
}
