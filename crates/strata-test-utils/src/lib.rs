//! Seeded map fixtures for Strata development.
//!
//! Every fixture takes a seed and builds the same map for the same seed,
//! so property tests, integration tests and benchmarks can share
//! reproducible inputs without checking binary files in.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    mixed_map, random_metro_state, random_signalable_tracks, random_track_bits, seeded_rng,
    small_map, MixedMapStats,
};
