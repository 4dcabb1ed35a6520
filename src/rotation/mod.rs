//! The rotation engine: moves, layer geometry, and move application.
//!
//! - `moves`: `Segment`, `Direction`, `Move`, Singmaster notation
//! - `selector`: `LayerSelector`, the table of rotation geometry
//! - `engine`: `RotationEngine`, which permutes positions and relabels stickers

pub mod moves;
pub mod selector;
pub mod engine;

pub use moves::{
    format_sequence, inverse_sequence, parse_sequence, Direction, Move, MoveSequence, Segment,
};
pub use selector::{LayerSelector, LayerSpec};
pub use engine::RotationEngine;
