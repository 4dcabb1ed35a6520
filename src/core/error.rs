//! Error types for the puzzle engine.
//!
//! Failures fall into three groups:
//! - Caller errors (`InvalidSegment`, `InvalidNotation`): bad input at the
//!   API boundary. Nothing is mutated when these are returned.
//! - Engine errors (`CorruptedState`): a relabel step broke the sticker
//!   count invariant. This means the rotation tables are wrong and the cube
//!   must not be used further.
//! - `Encoding`: the bincode snapshot failed.

use thiserror::Error;

/// Errors returned by cube operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Segment name outside the nine canonical names.
    #[error("invalid segment `{0}`: expected one of front, back, left, right, up, down, mid-height, mid-width, mid-depth")]
    InvalidSegment(String),

    /// Move token that is not valid Singmaster notation.
    #[error("invalid move notation `{0}`")]
    InvalidNotation(String),

    /// A cubie's sticker count changed during a relabel.
    #[error("corrupted cube state: cubie expected {expected} stickers, found {found}")]
    CorruptedState {
        /// Sticker count fixed at construction.
        expected: u8,
        /// Sticker count observed after the relabel.
        found: u8,
    },

    /// The state snapshot could not be encoded.
    #[error("failed to encode cube state: {0}")]
    Encoding(String),
}

impl CubeError {
    /// Whether the caller can recover by fixing its input.
    ///
    /// `CorruptedState` is never recoverable in place.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CubeError::InvalidSegment(_) | CubeError::InvalidNotation(_))
    }
}

/// Result alias for cube operations.
pub type Result<T> = std::result::Result<T, CubeError>;
