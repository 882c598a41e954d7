//! The metro word codec.
//!
//! [`MetroWord`] is the raw 16-bit value persisted in the cell.
//! [`MetroState`] is its layout-aware decoded form. All bit positions
//! live in this module. The `strata-map` loader keeps its own copy of the
//! track and reservation fields to reject words [`MetroWord::state`]
//! would panic on.

use strata_core::{BitRange, DecodeError, DoubleTrackDirection, RailTypeId, Track, TrackBits};

use crate::signal::{Signal, SignalState, SignalType, SignalVariant};

// ── Bit positions ───────────────────────────────────────────────

const HAS_SIGNALS: BitRange = BitRange::bit(15);
const RAIL_TYPE: BitRange = BitRange::new(6, 6);

// NoSignal layout.
const TRACK_MASK: BitRange = BitRange::new(0, 6);
const RESERVATION: BitRange = BitRange::new(12, 3);
/// Reservation code for "both tracks of a parallel pair".
const RESERVATION_PAIR: u32 = 7;

// Signaled layout.
const DOUBLE_TRACK: BitRange = BitRange::bit(14);
const SINGLE_TRACK: BitRange = BitRange::new(3, 3);
const DOUBLE_DIRECTION: BitRange = BitRange::bit(3);
const RESERVED_FIRST: BitRange = BitRange::bit(2);
const RESERVED_SECOND: BitRange = BitRange::bit(5);
const SIGNAL_TYPE: BitRange = BitRange::bit(0);
const SIGNAL_VARIANT: BitRange = BitRange::bit(1);
const SIGNAL_STATE: BitRange = BitRange::bit(12);
const SIGNAL_SIDE: BitRange = BitRange::bit(13);

// ── Decoded state ───────────────────────────────────────────────

/// Tracks a signaled tile can carry: one track or one parallel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignaledTracks {
    /// A single track.
    Single(Track),
    /// Both tracks of a horizontal or vertical pair.
    Double(DoubleTrackDirection),
}

impl SignaledTracks {
    /// The signaled form of `bits`, if it has one.
    pub fn from_track_bits(bits: TrackBits) -> Option<Self> {
        if let Some(track) = bits.single() {
            return Some(SignaledTracks::Single(track));
        }
        DoubleTrackDirection::from_track_bits(bits).map(SignaledTracks::Double)
    }

    /// The tracks as a mask.
    pub const fn track_bits(self) -> TrackBits {
        match self {
            SignaledTracks::Single(track) => track.bits(),
            SignaledTracks::Double(dir) => dir.track_bits(),
        }
    }
}

/// Layout-aware contents of a metro word, without the rail type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetroState {
    /// Any set of tracks, no signal.
    NoSignal {
        /// Tracks present.
        tracks: TrackBits,
        /// Reserved tracks.
        reserved: TrackBits,
    },
    /// One track or one parallel pair guarded by a signal.
    Signaled {
        /// Tracks present.
        tracks: SignaledTracks,
        /// Reserved tracks, a subset of `tracks`.
        reserved: TrackBits,
        /// The signal.
        signal: Signal,
    },
}

impl Default for MetroState {
    fn default() -> Self {
        MetroState::NoSignal {
            tracks: TrackBits::NONE,
            reserved: TrackBits::NONE,
        }
    }
}

impl MetroState {
    /// Whether this is the signaled layout.
    pub const fn has_signals(&self) -> bool {
        matches!(self, MetroState::Signaled { .. })
    }

    /// Tracks present.
    pub const fn track_bits(&self) -> TrackBits {
        match *self {
            MetroState::NoSignal { tracks, .. } => tracks,
            MetroState::Signaled { tracks, .. } => tracks.track_bits(),
        }
    }

    /// Reserved tracks.
    pub const fn reserved(&self) -> TrackBits {
        match *self {
            MetroState::NoSignal { reserved, .. } | MetroState::Signaled { reserved, .. } => {
                reserved
            }
        }
    }

    /// The signal, on the signaled layout.
    pub const fn signal(&self) -> Option<Signal> {
        match *self {
            MetroState::NoSignal { .. } => None,
            MetroState::Signaled { signal, .. } => Some(signal),
        }
    }

    /// Replace the tracks. Reservations of removed tracks are dropped. A
    /// signaled state whose new tracks cannot carry a signal falls back
    /// to the no-signal layout.
    pub fn with_track_bits(self, bits: TrackBits) -> MetroState {
        let four = TrackBits::HORZ | TrackBits::VERT;
        let mut reserved = self.reserved() & bits;
        if reserved.overlaps() && reserved != four {
            // What is left of an ambiguous pair reservation keeps the
            // pair that survived whole.
            reserved = if reserved.contains(TrackBits::HORZ) {
                TrackBits::HORZ
            } else if reserved.contains(TrackBits::VERT) {
                TrackBits::VERT
            } else {
                TrackBits::NONE
            };
        }
        match self {
            MetroState::Signaled { signal, .. } => match SignaledTracks::from_track_bits(bits) {
                Some(tracks) => MetroState::Signaled {
                    tracks,
                    reserved,
                    signal,
                },
                None => MetroState::NoSignal {
                    tracks: bits,
                    reserved,
                },
            },
            MetroState::NoSignal { .. } => MetroState::NoSignal {
                tracks: bits,
                reserved,
            },
        }
    }

    /// Replace the reservation.
    ///
    /// # Panics
    ///
    /// The reservation must be a subset of the tracks and must not
    /// contain crossing tracks.
    pub fn with_reserved(self, bits: TrackBits) -> MetroState {
        assert!(
            self.track_bits().contains(bits),
            "reserving {bits:?} outside tracks {:?}",
            self.track_bits()
        );
        assert!(!bits.overlaps(), "reservation {bits:?} has crossing tracks");
        match self {
            MetroState::NoSignal { tracks, .. } => MetroState::NoSignal {
                tracks,
                reserved: bits,
            },
            MetroState::Signaled { tracks, signal, .. } => MetroState::Signaled {
                tracks,
                reserved: bits,
                signal,
            },
        }
    }

    /// Replace the signal.
    ///
    /// # Panics
    ///
    /// Only the signaled layout has a signal.
    pub fn with_signal(self, signal: Signal) -> MetroState {
        match self {
            MetroState::Signaled {
                tracks, reserved, ..
            } => MetroState::Signaled {
                tracks,
                reserved,
                signal,
            },
            MetroState::NoSignal { .. } => panic!("signal on a metro tile without signals"),
        }
    }
}

/// Move `state` to the layout selected by `has_signals`, keeping its
/// tracks and reservation.
///
/// Entering the signaled layout starts from [`Signal::default`]; leaving
/// it drops the signal. Returns `None` when the tracks cannot carry a
/// signal: anything but a single track or one parallel pair.
pub fn reencode(state: MetroState, has_signals: bool) -> Option<MetroState> {
    if state.has_signals() == has_signals {
        return Some(state);
    }
    match state {
        MetroState::NoSignal { tracks, reserved } => {
            SignaledTracks::from_track_bits(tracks).map(|signaled| MetroState::Signaled {
                tracks: signaled,
                reserved: reserved & tracks,
                signal: Signal::default(),
            })
        }
        MetroState::Signaled {
            tracks, reserved, ..
        } => Some(MetroState::NoSignal {
            tracks: tracks.track_bits(),
            reserved,
        }),
    }
}

// ── Raw word ────────────────────────────────────────────────────

/// The raw metro word of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MetroWord(u16);

impl MetroWord {
    /// No tracks, no signal, rail type 0.
    pub const EMPTY: MetroWord = MetroWord(0);

    /// Wrap a raw word.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw word.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Whether the word uses the signaled layout.
    pub const fn has_signals(self) -> bool {
        HAS_SIGNALS.extract(self.0 as u32) != 0
    }

    /// Metro rail type. Shared by both layouts.
    pub const fn rail_type(self) -> RailTypeId {
        RailTypeId(RAIL_TYPE.extract(self.0 as u32) as u8)
    }

    /// Replace the rail type.
    pub const fn with_rail_type(self, rail_type: RailTypeId) -> Self {
        Self(RAIL_TYPE.insert(self.0 as u32, rail_type.0 as u32) as u16)
    }

    /// Decode the layout-dependent part.
    ///
    /// # Panics
    ///
    /// Panics on a signaled word whose single track is out of range.
    pub fn state(self) -> MetroState {
        match self.try_state() {
            Ok(state) => state,
            Err(e) => panic!("corrupt metro word {:#06x}: {e}", self.0),
        }
    }

    /// Decode the layout-dependent part, reporting an out-of-range single
    /// track.
    pub fn try_state(self) -> Result<MetroState, DecodeError> {
        let w = u32::from(self.0);
        if !self.has_signals() {
            let tracks = TrackBits::from_bits_truncate(TRACK_MASK.extract(w) as u8);
            let reserved = match RESERVATION.extract(w) {
                0 => TrackBits::NONE,
                RESERVATION_PAIR => pair_reservation(tracks),
                code => Track::try_from((code - 1) as u8)?.bits(),
            };
            return Ok(MetroState::NoSignal { tracks, reserved });
        }

        let (tracks, reserved) = if DOUBLE_TRACK.extract(w) != 0 {
            let dir = if DOUBLE_DIRECTION.extract(w) != 0 {
                DoubleTrackDirection::Vertical
            } else {
                DoubleTrackDirection::Horizontal
            };
            let mut reserved = TrackBits::NONE;
            if RESERVED_FIRST.extract(w) != 0 {
                reserved |= dir.first().bits();
            }
            if RESERVED_SECOND.extract(w) != 0 {
                reserved |= dir.second().bits();
            }
            (SignaledTracks::Double(dir), reserved)
        } else {
            let track = Track::try_from(SINGLE_TRACK.extract(w) as u8)?;
            let reserved = if RESERVED_FIRST.extract(w) != 0 {
                track.bits()
            } else {
                TrackBits::NONE
            };
            (SignaledTracks::Single(track), reserved)
        };
        let signal = Signal {
            signal_type: SignalType::from_bit(SIGNAL_TYPE.extract(w) != 0),
            variant: SignalVariant::from_bit(SIGNAL_VARIANT.extract(w) != 0),
            state: SignalState::from_bit(SIGNAL_STATE.extract(w) != 0),
            side: SIGNAL_SIDE.extract(w) != 0,
        };
        Ok(MetroState::Signaled {
            tracks,
            reserved,
            signal,
        })
    }

    /// Encode `state` with `rail_type`.
    ///
    /// # Panics
    ///
    /// A no-signal reservation of more than one track must be a parallel
    /// pair (or both pairs); a signaled reservation must lie within the
    /// signaled tracks.
    pub fn encode(state: &MetroState, rail_type: RailTypeId) -> Self {
        let mut w = RAIL_TYPE.insert(0, u32::from(rail_type.0));
        match *state {
            MetroState::NoSignal { tracks, reserved } => {
                let code = match reserved.single() {
                    Some(track) => track as u32 + 1,
                    None if reserved.is_empty() => 0,
                    None => {
                        assert!(
                            reserved == TrackBits::HORZ
                                || reserved == TrackBits::VERT
                                || reserved == (TrackBits::HORZ | TrackBits::VERT),
                            "reservation {reserved:?} cannot be stored without signals"
                        );
                        RESERVATION_PAIR
                    }
                };
                w = TRACK_MASK.insert(w, u32::from(tracks.bits()));
                w = RESERVATION.insert(w, code);
            }
            MetroState::Signaled {
                tracks,
                reserved,
                signal,
            } => {
                assert!(
                    tracks.track_bits().contains(reserved),
                    "reservation {reserved:?} outside signaled tracks {tracks:?}"
                );
                w = HAS_SIGNALS.insert(w, 1);
                match tracks {
                    SignaledTracks::Single(track) => {
                        w = SINGLE_TRACK.insert(w, track as u32);
                        w = RESERVED_FIRST.insert(w, u32::from(reserved.has(track)));
                    }
                    SignaledTracks::Double(dir) => {
                        w = DOUBLE_TRACK.insert(w, 1);
                        w = DOUBLE_DIRECTION.insert(w, dir as u32);
                        w = RESERVED_FIRST.insert(w, u32::from(reserved.has(dir.first())));
                        w = RESERVED_SECOND.insert(w, u32::from(reserved.has(dir.second())));
                    }
                }
                w = SIGNAL_TYPE.insert(w, signal.signal_type as u32);
                w = SIGNAL_VARIANT.insert(w, signal.variant as u32);
                w = SIGNAL_STATE.insert(w, signal.state as u32);
                w = SIGNAL_SIDE.insert(w, u32::from(signal.side));
            }
        }
        Self(w as u16)
    }

    /// Re-encode `state` keeping this word's rail type.
    pub fn with_state(self, state: &MetroState) -> Self {
        Self::encode(state, self.rail_type())
    }
}

/// Resolve the pair code against the tracks present: both pairs when the
/// tile has all four straight tracks, otherwise the pair it has.
fn pair_reservation(tracks: TrackBits) -> TrackBits {
    let both = TrackBits::HORZ | TrackBits::VERT;
    if tracks.contains(both) {
        both
    } else if tracks.contains(TrackBits::HORZ) {
        TrackBits::HORZ
    } else {
        TrackBits::VERT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signaled(tracks: SignaledTracks, reserved: TrackBits) -> MetroState {
        MetroState::Signaled {
            tracks,
            reserved,
            signal: Signal::default(),
        }
    }

    // ── Exact bit positions ─────────────────────────────────────

    #[test]
    fn no_signal_single_reservation_bits() {
        let state = MetroState::NoSignal {
            tracks: TrackBits::X | TrackBits::UPPER,
            reserved: TrackBits::UPPER,
        };
        let word = MetroWord::encode(&state, RailTypeId(0));
        assert_eq!(word.raw(), 0x3005);
        assert_eq!(word.state(), state);
    }

    #[test]
    fn rail_type_bits() {
        let word = MetroWord::EMPTY.with_rail_type(RailTypeId(0x2A));
        assert_eq!(word.raw(), 0x2A << 6);
        assert_eq!(word.rail_type(), RailTypeId(0x2A));
        assert_eq!(word.state(), MetroState::default());
    }

    #[test]
    fn signaled_single_bits() {
        let state = MetroState::Signaled {
            tracks: SignaledTracks::Single(Track::Y),
            reserved: TrackBits::Y,
            signal: Signal {
                signal_type: SignalType::Pbs,
                variant: SignalVariant::Semaphore,
                state: SignalState::Green,
                side: true,
            },
        };
        let word = MetroWord::encode(&state, RailTypeId(0));
        assert_eq!(word.raw(), 0xB00E);
        assert_eq!(word.state(), state);
    }

    #[test]
    fn signaled_double_bits() {
        let state = MetroState::Signaled {
            tracks: SignaledTracks::Double(DoubleTrackDirection::Vertical),
            reserved: TrackBits::RIGHT,
            signal: Signal {
                signal_type: SignalType::PbsOneWay,
                ..Signal::default()
            },
        };
        let word = MetroWord::encode(&state, RailTypeId(0));
        assert_eq!(word.raw(), 0xC029);
        assert_eq!(word.state(), state);
    }

    #[test]
    fn double_reservation_uses_both_bits() {
        let dir = SignaledTracks::Double(DoubleTrackDirection::Horizontal);
        for reserved in [
            TrackBits::NONE,
            TrackBits::UPPER,
            TrackBits::LOWER,
            TrackBits::HORZ,
        ] {
            let word = MetroWord::encode(&signaled(dir, reserved), RailTypeId(1));
            assert_eq!(word.state().reserved(), reserved);
        }
        let cleared = MetroWord::encode(&signaled(dir, TrackBits::NONE), RailTypeId(1));
        assert_eq!(cleared.raw() & 0x24, 0);
    }

    // ── Pair code ───────────────────────────────────────────────

    #[test]
    fn pair_code_resolves_against_tracks() {
        let pair = |mask: u8| {
            MetroWord::from_raw(0x7000 | u16::from(mask))
                .state()
                .reserved()
        };
        assert_eq!(pair(TrackBits::HORZ.bits()), TrackBits::HORZ);
        assert_eq!(pair((TrackBits::HORZ | TrackBits::X).bits()), TrackBits::HORZ);
        assert_eq!(pair(TrackBits::VERT.bits()), TrackBits::VERT);
        assert_eq!(
            pair(TrackBits::ALL.bits()),
            TrackBits::HORZ | TrackBits::VERT
        );
    }

    #[test]
    fn corrupt_single_track_reported() {
        let word = MetroWord::from_raw(0x8000 | (6 << 3));
        assert!(word.try_state().is_err());
    }

    #[test]
    #[should_panic(expected = "cannot be stored without signals")]
    fn crossing_pair_not_storable() {
        let state = MetroState::NoSignal {
            tracks: TrackBits::CROSS,
            reserved: TrackBits::CROSS,
        };
        let _ = MetroWord::encode(&state, RailTypeId(0));
    }

    // ── State transforms ────────────────────────────────────────

    #[test]
    fn illegal_tracks_demote() {
        let state = signaled(SignaledTracks::Single(Track::Left), TrackBits::LEFT);
        let next = state.with_track_bits(TrackBits::LEFT | TrackBits::X);
        assert_eq!(
            next,
            MetroState::NoSignal {
                tracks: TrackBits::LEFT | TrackBits::X,
                reserved: TrackBits::LEFT,
            }
        );
    }

    #[test]
    fn legal_tracks_keep_signal() {
        let signal = Signal {
            state: SignalState::Green,
            ..Signal::default()
        };
        let state = MetroState::Signaled {
            tracks: SignaledTracks::Single(Track::Upper),
            reserved: TrackBits::UPPER,
            signal,
        };
        let next = state.with_track_bits(TrackBits::HORZ);
        assert_eq!(next.signal(), Some(signal));
        assert_eq!(next.reserved(), TrackBits::UPPER);
        assert_eq!(next.track_bits(), TrackBits::HORZ);
    }

    #[test]
    fn removed_track_loses_reservation() {
        let state = MetroState::NoSignal {
            tracks: TrackBits::HORZ,
            reserved: TrackBits::HORZ,
        };
        assert_eq!(
            state.with_track_bits(TrackBits::LOWER).reserved(),
            TrackBits::LOWER
        );
    }

    #[test]
    fn ambiguous_pair_narrows_to_surviving_pair() {
        let four = TrackBits::HORZ | TrackBits::VERT;
        let state = MetroState::NoSignal {
            tracks: four,
            reserved: four,
        };
        let next = state.with_track_bits(four.without(Track::Left));
        assert_eq!(next.reserved(), TrackBits::HORZ);
        let word = MetroWord::encode(&next, RailTypeId(0));
        assert_eq!(word.state(), next);
    }

    #[test]
    fn reencode_rejects_unsignalable_tracks() {
        for tracks in [TrackBits::NONE, TrackBits::CROSS, TrackBits::ALL] {
            let state = MetroState::NoSignal {
                tracks,
                reserved: TrackBits::NONE,
            };
            assert_eq!(reencode(state, true), None);
            assert_eq!(reencode(state, false), Some(state));
        }
    }

    #[test]
    fn reencode_resets_signal() {
        let state = MetroState::Signaled {
            tracks: SignaledTracks::Single(Track::X),
            reserved: TrackBits::NONE,
            signal: Signal {
                state: SignalState::Green,
                side: true,
                ..Signal::default()
            },
        };
        let back = reencode(reencode(state, false).unwrap(), true).unwrap();
        assert_eq!(back.signal(), Some(Signal::default()));
    }

    // ── Properties ──────────────────────────────────────────────

    fn signalable() -> impl Strategy<Value = TrackBits> {
        prop_oneof![
            (0u8..6).prop_map(|t| Track::try_from(t).unwrap().bits()),
            Just(TrackBits::HORZ),
            Just(TrackBits::VERT),
        ]
    }

    proptest! {
        #[test]
        fn no_signal_track_mask_round_trip(mask in 0u8..64, rt in 0u8..64) {
            let tracks = TrackBits::from_bits_truncate(mask);
            let state = MetroState::NoSignal { tracks, reserved: TrackBits::NONE };
            let word = MetroWord::encode(&state, RailTypeId(rt));
            prop_assert_eq!(word.state().track_bits(), tracks);
            prop_assert_eq!(word.rail_type(), RailTypeId(rt));
        }

        #[test]
        fn layout_switch_round_trip(tracks in signalable(), pick in 0u8..64) {
            let reserved = tracks & TrackBits::from_bits_truncate(pick);
            let start = signaled(SignaledTracks::from_track_bits(tracks).unwrap(), reserved);
            let word = MetroWord::encode(&start, RailTypeId(3));

            let down = reencode(word.state(), false).unwrap();
            let down_word = word.with_state(&down);
            prop_assert!(!down_word.has_signals());
            prop_assert_eq!(down_word.state().track_bits(), tracks);
            prop_assert_eq!(down_word.state().reserved(), reserved);

            let up = reencode(down_word.state(), true).unwrap();
            let up_word = down_word.with_state(&up);
            prop_assert_eq!(up_word, word);
        }
    }
}
