//! Transport modes and vehicle kinds.

use crate::error::DecodeError;

/// Transport mode carried by infrastructure such as a tunnel or a depot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TransportType {
    /// Rail (and metro).
    Rail = 0,
    /// Road and tram.
    Road = 1,
    /// Ships.
    Water = 2,
    /// Aircraft.
    Air = 3,
}

impl TryFrom<u8> for TransportType {
    type Error = DecodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TransportType::Rail),
            1 => Ok(TransportType::Road),
            2 => Ok(TransportType::Water),
            3 => Ok(TransportType::Air),
            _ => Err(DecodeError::new("TransportType", v)),
        }
    }
}

/// Kind of vehicle a depot services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleType {
    /// Trains.
    Train,
    /// Road vehicles and trams.
    Road,
    /// Ships.
    Ship,
    /// Aircraft.
    Aircraft,
}

impl From<TransportType> for VehicleType {
    fn from(t: TransportType) -> Self {
        match t {
            TransportType::Rail => VehicleType::Train,
            TransportType::Road => VehicleType::Road,
            TransportType::Water => VehicleType::Ship,
            TransportType::Air => VehicleType::Aircraft,
        }
    }
}
