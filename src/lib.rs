//! # rubik-engine
//!
//! A 3x3x3 twisty puzzle model built around a verified rotation engine.
//!
//! ## Design Principles
//!
//! 1. **One Geometry Table**: `LayerSelector` is the only place that knows
//!    which layer a move turns and in which sense. Position permutation and
//!    sticker relabeling both read from it.
//!
//! 2. **Identity-Preserving**: the 27 cubies are created once and never
//!    replaced. Moves permute grid slots and relabel sticker maps.
//!
//! 3. **Deterministic**: the same start state and move list always yield
//!    the same result. Scrambles come from a seeded ChaCha8 RNG.
//!
//! ## Conventions
//!
//! - Grid index `(d, h, w)`: depth 0 = front, height 0 = up, width 0 = left.
//! - Clockwise is seen from outside the turned face.
//! - Middle slices turn like front (mid-depth), down (mid-height) and
//!   left (mid-width), matching Singmaster S, E and M.
//!
//! ## Modules
//!
//! - `core`: faces, colors, cubies, the grid, errors
//! - `rotation`: moves, notation, `LayerSelector`, `RotationEngine`
//! - `cube`: the `Cube` facade, solved-state checks, rendering
//! - `scramble`: seeded scramble generation

pub mod core;
pub mod rotation;
pub mod cube;
pub mod scramble;

// Re-export commonly used types
pub use crate::core::{
    Axis, Color, CubeError, CubeGrid, Cubie, CubieId, Face, Pos, Result, Sense,
};

pub use crate::rotation::{
    Direction, LayerSelector, LayerSpec, Move, MoveSequence, RotationEngine, Segment,
};

pub use crate::cube::{Cube, StateValidator};

pub use crate::scramble::{Scramble, ScrambleConfig, ScrambleRng};
