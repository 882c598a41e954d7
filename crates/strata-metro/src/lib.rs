//! Metro layer encoding for Strata.
//!
//! Every non-void cell carries a 16-bit metro word: a dense secondary
//! rail layer independent of the cell's coarse type. The word has two
//! layouts selected by its top bit.
//!
//! ```text
//!   bit       15  14   13    12   11..6   5    4    3    2    1    0
//!   NoSignal   0  [reservation]   type   [-------- track mask -------]
//!   single     1   0  side  state  type   [--- track ---]  res  var  sig
//!   double     1   1  side  state  type  res2   -   dir   res  var  sig
//! ```
//!
//! [`MetroWord`] is the pure codec between the raw word and the
//! layout-independent [`MetroState`]; switching layouts goes through
//! [`reencode`]. The tile traits in [`metro`] and [`owner`] are the only
//! writers of the word.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metro;
pub mod owner;
pub mod signal;
pub mod word;

pub use metro::{MetroTile, MetroTileMut};
pub use owner::{MetroOwnerTile, MetroOwnerTileMut};
pub use signal::{Signal, SignalState, SignalType, SignalVariant};
pub use word::{reencode, MetroState, MetroWord, SignaledTracks};
