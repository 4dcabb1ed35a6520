//! Seeded scramble generation.
//!
//! - `rng`: `ScrambleRng`, a ChaCha8 RNG with restorable state
//! - `config`: `ScrambleConfig`, seed, length and segment pool
//! - `sequencer`: `Scramble`, the generated move list and its notation

pub mod rng;
pub mod config;
pub mod sequencer;

pub use rng::{ScrambleRng, ScrambleRngState};
pub use config::{ScrambleConfig, DEFAULT_ROTATIONS};
pub use sequencer::Scramble;
