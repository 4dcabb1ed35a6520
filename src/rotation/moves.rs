//! Move representation: segment + direction.
//!
//! A move names the layer being turned and the direction of the quarter
//! turn, with clockwise defined as seen from outside the cube looking at the
//! segment's outward face. Middle slices borrow the viewpoint of a parallel
//! outer layer (see `LayerSelector`).
//!
//! ## Notation
//!
//! Moves print and parse in Singmaster notation:
//!
//! | segment    | letter |
//! |------------|--------|
//! | front      | F      |
//! | back       | B      |
//! | left       | L      |
//! | right      | R      |
//! | up         | U      |
//! | down       | D      |
//! | mid-depth  | S      |
//! | mid-height | E      |
//! | mid-width  | M      |
//!
//! A trailing `'` marks counter-clockwise. In sequences, a trailing `2`
//! expands to two clockwise quarter turns.
//!
//! ```
//! use rubik_engine::rotation::{Direction, Move, Segment};
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv, Move::new(Segment::Right, Direction::CounterClockwise));
//! assert_eq!(mv.to_string(), "R'");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::error::{CubeError, Result};
use crate::core::face::Face;

/// Inline storage for typical scramble and algorithm lengths.
pub type MoveSequence = SmallVec<[Move; 32]>;

/// A rotatable layer: six outer faces plus three middle slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
    /// Slice between up and down.
    MidHeight,
    /// Slice between left and right.
    MidWidth,
    /// Slice between front and back.
    MidDepth,
}

impl Segment {
    /// All nine segments.
    pub const ALL: [Segment; 9] = [
        Segment::Front,
        Segment::Back,
        Segment::Left,
        Segment::Right,
        Segment::Up,
        Segment::Down,
        Segment::MidHeight,
        Segment::MidWidth,
        Segment::MidDepth,
    ];

    /// The six outer layers.
    pub const OUTER: [Segment; 6] = [
        Segment::Front,
        Segment::Back,
        Segment::Left,
        Segment::Right,
        Segment::Up,
        Segment::Down,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Segment::Front => "front",
            Segment::Back => "back",
            Segment::Left => "left",
            Segment::Right => "right",
            Segment::Up => "up",
            Segment::Down => "down",
            Segment::MidHeight => "mid-height",
            Segment::MidWidth => "mid-width",
            Segment::MidDepth => "mid-depth",
        }
    }

    /// Singmaster letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Segment::Front => 'F',
            Segment::Back => 'B',
            Segment::Left => 'L',
            Segment::Right => 'R',
            Segment::Up => 'U',
            Segment::Down => 'D',
            Segment::MidDepth => 'S',
            Segment::MidHeight => 'E',
            Segment::MidWidth => 'M',
        }
    }

    /// Segment for a Singmaster letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Segment::ALL.into_iter().find(|s| s.letter() == letter)
    }

    /// The outer face of this segment, `None` for middle slices.
    #[must_use]
    pub const fn face(self) -> Option<Face> {
        match self {
            Segment::Front => Some(Face::Front),
            Segment::Back => Some(Face::Back),
            Segment::Left => Some(Face::Left),
            Segment::Right => Some(Face::Right),
            Segment::Up => Some(Face::Up),
            Segment::Down => Some(Face::Down),
            Segment::MidHeight | Segment::MidWidth | Segment::MidDepth => None,
        }
    }

    /// Check if this is a middle slice.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        self.face().is_none()
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Segment {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        Segment::ALL
            .into_iter()
            .find(|seg| seg.name() == s)
            .ok_or_else(|| CubeError::InvalidSegment(s.to_string()))
    }
}

/// Direction of a quarter turn, seen from outside the segment's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Both directions.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Check if clockwise.
    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Direction::Clockwise)
    }
}

/// A single quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Layer being turned.
    pub segment: Segment,
    /// Direction of the turn.
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(segment: Segment, direction: Direction) -> Self {
        Self { segment, direction }
    }

    /// Clockwise quarter turn of `segment`.
    #[must_use]
    pub const fn cw(segment: Segment) -> Self {
        Self::new(segment, Direction::Clockwise)
    }

    /// Counter-clockwise quarter turn of `segment`.
    #[must_use]
    pub const fn ccw(segment: Segment) -> Self {
        Self::new(segment, Direction::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.segment, self.direction.inverse())
    }

    /// All 18 quarter turns.
    pub fn all() -> impl Iterator<Item = Move> {
        Segment::ALL
            .into_iter()
            .flat_map(|s| Direction::ALL.into_iter().map(move |d| Move::new(s, d)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segment.letter())?;
        if !self.direction.is_clockwise() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CubeError::InvalidNotation(s.to_string());

        let mut chars = s.chars();
        let segment = chars.next().and_then(Segment::from_letter).ok_or_else(invalid)?;
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(invalid()),
        };

        Ok(Move::new(segment, direction))
    }
}

/// Parse a whitespace-separated algorithm such as `"R U R' U'"`.
///
/// `X2` expands to two clockwise turns of `X`.
pub fn parse_sequence(text: &str) -> Result<MoveSequence> {
    let mut moves = MoveSequence::new();

    for token in text.split_whitespace() {
        if let Some(base) = token.strip_suffix('2') {
            let mv: Move = base
                .parse()
                .map_err(|_| CubeError::InvalidNotation(token.to_string()))?;
            if !mv.direction.is_clockwise() {
                return Err(CubeError::InvalidNotation(token.to_string()));
            }
            moves.push(mv);
            moves.push(mv);
        } else {
            moves.push(token.parse()?);
        }
    }

    Ok(moves)
}

/// Space-separated Singmaster string for a move list.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
#[must_use]
pub fn inverse_sequence(moves: &[Move]) -> MoveSequence {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
