//! Error types for raw-value decoding.

use thiserror::Error;

/// A raw packed value does not name a valid enum variant.
///
/// Returned by the `TryFrom<u8>` conversions in this crate. Accessors
/// over live cells treat an undecodable value as a broken invariant and
/// panic; the codec surfaces it to the caller instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The value is outside the discriminant range of `kind`.
    #[error("invalid {kind} value {value}")]
    InvalidDiscriminant {
        /// Name of the type being decoded.
        kind: &'static str,
        /// The offending raw value.
        value: u32,
    },
}

impl DecodeError {
    pub(crate) fn new(kind: &'static str, value: impl Into<u32>) -> Self {
        Self::InvalidDiscriminant {
            kind,
            value: value.into(),
        }
    }
}
