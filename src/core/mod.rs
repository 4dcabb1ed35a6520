//! Core puzzle types: faces, colors, cubies, the grid, errors.
//!
//! These are the building blocks the rotation engine moves around.
//! Nothing here knows about notation or scrambles.

pub mod error;
pub mod face;
pub mod cubie;
pub mod grid;

pub use error::{CubeError, Result};
pub use face::{Axis, Color, Face, Sense};
pub use cubie::Cubie;
pub use grid::{CubeGrid, CubieId, Layer, Pos, CUBIE_COUNT, SIZE};
