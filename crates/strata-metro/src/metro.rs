//! Metro accessors on cell handles.
//!
//! Every read goes through [`MetroWord::state`] and every write rebuilds
//! the word with [`MetroWord::with_state`]; the layout bit is never
//! flipped on its own.

use strata_core::{DoubleTrackDirection, RailTypeId, TileType, Track, TrackBits, Trackdir};
use strata_map::{layout, AsCell, AsCellMut};
use tracing::trace;

use crate::signal::{Signal, SignalState, SignalType, SignalVariant};
use crate::word::{reencode, MetroState, MetroWord};

/// Read accessors for the metro layer.
pub trait MetroTile: AsCell {
    /// Whether the cell can host metro tracks. Everything but void does.
    fn is_metro_tile(&self) -> bool {
        !self.is_tile_type(TileType::Void)
    }

    /// The raw metro word.
    fn metro_word(&self) -> MetroWord {
        assert!(self.is_metro_tile(), "void tiles have no metro layer");
        MetroWord::from_raw(self.cell().get(layout::METRO_WORD) as u16)
    }

    /// Decoded tracks, reservation and signal.
    fn metro_state(&self) -> MetroState {
        self.metro_word().state()
    }

    /// Whether the metro word uses the signaled layout.
    fn has_metro_signals(&self) -> bool {
        self.metro_word().has_signals()
    }

    /// Metro rail type.
    fn metro_rail_type(&self) -> RailTypeId {
        self.metro_word().rail_type()
    }

    /// Metro tracks present.
    fn metro_track_bits(&self) -> TrackBits {
        self.metro_state().track_bits()
    }

    /// Whether `track` is present.
    fn has_metro_track(&self, track: Track) -> bool {
        self.metro_track_bits().has(track)
    }

    /// Whether any metro track is present.
    fn has_any_metro_track(&self) -> bool {
        !self.metro_track_bits().is_empty()
    }

    /// Reserved metro tracks.
    fn metro_reservation(&self) -> TrackBits {
        self.metro_state().reserved()
    }

    /// Whether `track` is reserved.
    fn is_metro_track_reserved(&self, track: Track) -> bool {
        self.metro_reservation().has(track)
    }

    // ── Signal metadata ─────────────────────────────────────────

    /// The signal of a signaled tile.
    ///
    /// # Panics
    ///
    /// The tile must use the signaled layout.
    fn metro_signal(&self) -> Signal {
        match self.metro_state().signal() {
            Some(signal) => signal,
            None => panic!("metro tile {} has no signals", self.index()),
        }
    }

    /// Signal behaviour.
    fn metro_signal_type(&self) -> SignalType {
        self.metro_signal().signal_type
    }

    /// Signal variant.
    fn metro_signal_variant(&self) -> SignalVariant {
        self.metro_signal().variant
    }

    /// Signal aspect.
    fn metro_signal_state(&self) -> SignalState {
        self.metro_signal().state
    }

    /// Signal facing bit.
    fn metro_signal_side(&self) -> bool {
        self.metro_signal().side
    }

    // ── Signal queries ──────────────────────────────────────────

    /// Whether a signal guards `track`. A double-track signal guards
    /// both tracks of its pair.
    fn has_signal_on_metro_track(&self, track: Track) -> bool {
        let state = self.metro_state();
        state.has_signals() && state.track_bits().has(track)
    }

    /// Whether a signal faces travel along `td`.
    fn has_signal_on_metro_trackdir(&self, td: Trackdir) -> bool {
        let state = self.metro_state();
        match state.signal() {
            Some(signal) => state.track_bits().has(td.track()) && td.is_reverse() == signal.side,
            None => false,
        }
    }

    /// Whether a signal faces travel against `td`.
    fn has_signal_against_metro_trackdir(&self, td: Trackdir) -> bool {
        self.has_signal_on_metro_trackdir(td.reverse())
    }

    /// Whether a path signal faces travel along `td`. Every metro
    /// signal is a path signal.
    fn has_pbs_signal_on_trackdir(&self, td: Trackdir) -> bool {
        self.has_signal_on_metro_trackdir(td)
    }

    /// Whether a one-way signal on `td`'s track faces the other way,
    /// so travel along `td` may not pass it.
    fn has_oneway_signal_blocking_trackdir(&self, td: Trackdir) -> bool {
        self.has_signal_against_metro_trackdir(td)
            && !self.has_signal_on_metro_trackdir(td)
            && self.metro_signal_type() == SignalType::PbsOneWay
    }

    /// Aspect of the signal facing `td`.
    ///
    /// # Panics
    ///
    /// A signal must face `td`.
    fn metro_signal_state_by_trackdir(&self, td: Trackdir) -> SignalState {
        assert!(
            self.has_signal_on_metro_trackdir(td),
            "no metro signal on trackdir {td:?}"
        );
        self.metro_signal_state()
    }
}

impl<T: AsCell + ?Sized> MetroTile for T {}

/// Write accessors and the reservation protocol.
pub trait MetroTileMut: AsCellMut + MetroTile {
    /// Store `state`, keeping the rail type.
    fn set_metro_state(&mut self, state: MetroState) {
        let word = self.metro_word().with_state(&state);
        self.cell_mut()
            .set(layout::METRO_WORD, u32::from(word.raw()));
    }

    /// Change the metro rail type.
    fn set_metro_rail_type(&mut self, rail_type: RailTypeId) {
        let word = self.metro_word().with_rail_type(rail_type);
        self.cell_mut()
            .set(layout::METRO_WORD, u32::from(word.raw()));
    }

    /// Replace the metro tracks.
    ///
    /// A signaled tile keeps its signal only if `bits` is a single track
    /// or a parallel pair; anything else moves it to the no-signal
    /// layout. Reservations of removed tracks are dropped.
    fn set_metro_track_bits(&mut self, bits: TrackBits) {
        let state = self.metro_state();
        let next = state.with_track_bits(bits);
        if state.has_signals() && !next.has_signals() {
            trace!(tile = self.index().0, ?bits, "metro signal removed by track change");
        }
        self.set_metro_state(next);
    }

    /// Switch layouts, keeping tracks and reservation.
    ///
    /// # Panics
    ///
    /// Enabling signals needs a single track or a parallel pair.
    fn set_metro_has_signals(&mut self, enabled: bool) {
        let state = self.metro_state();
        match reencode(state, enabled) {
            Some(next) => self.set_metro_state(next),
            None => panic!(
                "metro tracks {:?} on tile {} cannot carry a signal",
                state.track_bits(),
                self.index()
            ),
        }
    }

    /// Replace the reservation. See [`MetroState::with_reserved`].
    fn set_metro_reservation(&mut self, bits: TrackBits) {
        let next = self.metro_state().with_reserved(bits);
        self.set_metro_state(next);
    }

    /// Reserve `track` for a path.
    ///
    /// Fails without writing if the track is already reserved or the new
    /// reservation would contain crossing tracks.
    ///
    /// # Panics
    ///
    /// The track must be present.
    fn try_reserve_metro_track(&mut self, track: Track) -> bool {
        assert!(self.has_metro_track(track), "no metro track {track:?} to reserve");
        let state = self.metro_state();
        let reserved = state.reserved();
        if reserved.has(track) {
            trace!(tile = self.index().0, ?track, "metro track already reserved");
            return false;
        }
        let candidate = reserved.with(track);
        if candidate.overlaps() {
            trace!(tile = self.index().0, ?track, ?reserved, "metro reservation would cross");
            return false;
        }
        self.set_metro_state(state.with_reserved(candidate));
        true
    }

    /// Release `track`. Releasing a free track does nothing.
    ///
    /// On a no-signal tile with all four straight tracks the stored pair
    /// code reads back as all four reserved; releasing one of them keeps
    /// only the other track of its pair.
    ///
    /// # Panics
    ///
    /// The track must be present.
    fn unreserve_metro_track(&mut self, track: Track) {
        assert!(self.has_metro_track(track), "no metro track {track:?} to release");
        let state = self.metro_state();
        let reserved = state.reserved();
        if !reserved.has(track) {
            return;
        }
        let mut rest = reserved.without(track);
        if rest.overlaps() {
            rest = DoubleTrackDirection::of_track(track)
                .map_or(TrackBits::NONE, |dir| dir.track_bits().without(track));
        }
        self.set_metro_state(state.with_reserved(rest));
    }

    // ── Signal metadata ─────────────────────────────────────────

    /// Replace the whole signal.
    fn set_metro_signal(&mut self, signal: Signal) {
        let next = self.metro_state().with_signal(signal);
        self.set_metro_state(next);
    }

    /// Change the signal behaviour.
    fn set_metro_signal_type(&mut self, signal_type: SignalType) {
        let signal = Signal {
            signal_type,
            ..self.metro_signal()
        };
        self.set_metro_signal(signal);
    }

    /// Change the signal variant.
    fn set_metro_signal_variant(&mut self, variant: SignalVariant) {
        let signal = Signal {
            variant,
            ..self.metro_signal()
        };
        self.set_metro_signal(signal);
    }

    /// Change the signal aspect.
    fn set_metro_signal_state(&mut self, state: SignalState) {
        let signal = Signal {
            state,
            ..self.metro_signal()
        };
        self.set_metro_signal(signal);
    }

    /// Change the signal facing bit.
    fn set_metro_signal_side(&mut self, side: bool) {
        let signal = Signal {
            side,
            ..self.metro_signal()
        };
        self.set_metro_signal(signal);
    }

    /// Change the aspect of the signal facing `td`.
    ///
    /// # Panics
    ///
    /// A signal must face `td`.
    fn set_metro_signal_state_by_trackdir(&mut self, td: Trackdir, state: SignalState) {
        assert!(
            self.has_signal_on_metro_trackdir(td),
            "no metro signal on trackdir {td:?}"
        );
        self.set_metro_signal_state(state);
    }
}

impl<T: AsCellMut + ?Sized> MetroTileMut for T {}
