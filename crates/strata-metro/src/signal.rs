//! Metro signal metadata.

/// Signalling behaviour. Both kinds are path signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignalType {
    /// Path signal passable from either side.
    #[default]
    Pbs = 0,
    /// Path signal that cannot be passed from behind.
    PbsOneWay = 1,
}

impl SignalType {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit {
            SignalType::PbsOneWay
        } else {
            SignalType::Pbs
        }
    }
}

/// Visual variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignalVariant {
    /// Light signal.
    #[default]
    Electric = 0,
    /// Semaphore.
    Semaphore = 1,
}

impl SignalVariant {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit {
            SignalVariant::Semaphore
        } else {
            SignalVariant::Electric
        }
    }
}

/// Aspect shown by the signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignalState {
    /// Stop.
    #[default]
    Red = 0,
    /// Proceed.
    Green = 1,
}

impl SignalState {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit {
            SignalState::Green
        } else {
            SignalState::Red
        }
    }
}

/// The one signal of a signaled metro tile.
///
/// On a double-track tile the signal guards both tracks of the pair
/// with the same type, state and side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signal {
    /// Behaviour.
    pub signal_type: SignalType,
    /// Visual variant.
    pub variant: SignalVariant,
    /// Current aspect.
    pub state: SignalState,
    /// Facing: `false` guards the forward trackdirs of its tracks, `true`
    /// the reverse ones.
    pub side: bool,
}
