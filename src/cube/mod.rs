//! The cube: an owned grid plus the public move and query API.
//!
//! ```
//! use rubik_engine::{Cube, Direction};
//!
//! let mut cube = Cube::new();
//! cube.rotate("front", Direction::Clockwise).unwrap();
//! assert!(!cube.is_solved());
//!
//! cube.rotate("front", Direction::CounterClockwise).unwrap();
//! assert!(cube.is_solved());
//!
//! assert!(cube.rotate("top", Direction::Clockwise).is_err());
//! ```
//!
//! A `Cube` is a plain value. Separate cubes share nothing; a single cube
//! needs `&mut` for every move.

pub mod render;
pub mod validator;

pub use render::{face_view, render, view_pos, RENDER_ORDER};
pub use validator::StateValidator;

use serde::{Deserialize, Serialize};

use crate::core::error::{CubeError, Result};
use crate::core::face::{Color, Face};
use crate::core::grid::{CubeGrid, Layer, Pos};
use crate::core::Cubie;
use crate::rotation::{parse_sequence, Direction, Move, MoveSequence, RotationEngine, Segment};
use crate::scramble::{Scramble, ScrambleConfig};

/// A 3x3x3 puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    grid: CubeGrid,
    history: Vec<Move>,
}

impl Cube {
    /// Create a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: CubeGrid::solved(),
            history: Vec::new(),
        }
    }

    /// Turn the segment named `segment`.
    ///
    /// Fails with `InvalidSegment` for unknown names without touching the
    /// cube.
    pub fn rotate(&mut self, segment: &str, direction: Direction) -> Result<()> {
        let segment: Segment = segment.parse()?;
        self.apply(Move::new(segment, direction))
    }

    /// Apply one move.
    ///
    /// An error here is always `CorruptedState`.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        RotationEngine::apply(&mut self.grid, mv)?;
        self.history.push(mv);
        Ok(())
    }

    /// Apply moves in order.
    pub fn apply_sequence(&mut self, moves: &[Move]) -> Result<()> {
        moves.iter().try_for_each(|&mv| self.apply(mv))
    }

    /// Parse and apply a Singmaster algorithm such as `"R U R' U'"`.
    ///
    /// Nothing is applied if any token fails to parse.
    pub fn apply_notation(&mut self, notation: &str) -> Result<MoveSequence> {
        let moves = parse_sequence(notation)?;
        self.apply_sequence(&moves)?;
        Ok(moves)
    }

    /// Generate a scramble from `config` and apply it.
    pub fn scramble(&mut self, config: &ScrambleConfig) -> Result<Scramble> {
        let scramble = Scramble::generate(config);
        self.apply_sequence(&scramble.moves)?;
        Ok(scramble)
    }

    /// Undo the most recent move. Returns the move undone.
    pub fn undo(&mut self) -> Result<Option<Move>> {
        let Some(mv) = self.history.pop() else {
            return Ok(None);
        };
        RotationEngine::apply(&mut self.grid, mv.inverse())?;
        Ok(Some(mv))
    }

    /// Check if every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        StateValidator::is_solved(&self.grid)
    }

    /// Six labeled 3x3 blocks of color codes.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.grid)
    }

    /// Stickers of `face` in rendered orientation.
    #[must_use]
    pub fn face(&self, face: Face) -> Layer<Option<Color>> {
        face_view(&self.grid, face)
    }

    /// The cubie at `pos`.
    #[must_use]
    pub fn cubie(&self, pos: Pos) -> &Cubie {
        self.grid.at(pos)
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// Moves applied since construction, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Canonical byte encoding of the grid.
    ///
    /// Two cubes encode equally exactly when every cubie sits in the same
    /// slot with the same stickers. History is not included.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(&self.grid)
            .map_err(|e| CubeError::Encoding(e.to_string()))
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
