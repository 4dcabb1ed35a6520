//! Face labels, grid axes, and sticker colors.
//!
//! ## Orientation
//!
//! The grid is indexed `(d, h, w)`:
//! - `d` depth: 0 = front, 2 = back
//! - `h` height: 0 = up, 2 = down
//! - `w` width: 0 = left, 2 = right
//!
//! Each axis also has a physical direction used for the right-hand rule:
//! +depth points out of the front face, +height out of the up face,
//! +width out of the right face. A "positive" quarter turn is a
//! counter-clockwise turn seen from the tip of the positive direction.

use serde::{Deserialize, Serialize};

/// One of the six face slots of a cubie (and of the cube).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
    ];

    /// Storage index into a sticker array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used by the segment names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Up => "up",
            Face::Down => "down",
        }
    }

    /// Capitalized name for display headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Up => "Up",
            Face::Down => "Down",
        }
    }

    /// The axis this face is perpendicular to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::Depth,
            Face::Up | Face::Down => Axis::Height,
            Face::Left | Face::Right => Axis::Width,
        }
    }

    /// Grid index along `axis()` of the layer that carries this face.
    #[must_use]
    pub const fn boundary_index(self) -> usize {
        match self {
            Face::Front | Face::Up | Face::Left => 0,
            Face::Back | Face::Down | Face::Right => 2,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Front to back (`d`).
    Depth,
    /// Up to down (`h`).
    Height,
    /// Left to right (`w`).
    Width,
}

impl Axis {
    /// Position of this axis in a `(d, h, w)` coordinate.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::Depth => 0,
            Axis::Height => 1,
            Axis::Width => 2,
        }
    }

    /// Faces visited by a sticker under a positive quarter turn.
    ///
    /// A sticker on `cycle[i]` moves to `cycle[(i + 1) % 4]`. The two faces
    /// perpendicular to the axis are absent and never move.
    #[must_use]
    pub const fn cycle(self) -> [Face; 4] {
        match self {
            Axis::Depth => [Face::Up, Face::Left, Face::Down, Face::Right],
            Axis::Height => [Face::Front, Face::Right, Face::Back, Face::Left],
            Axis::Width => [Face::Up, Face::Front, Face::Down, Face::Back],
        }
    }
}

/// Rotational sense of a quarter turn about the positive end of an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sense {
    /// Counter-clockwise seen from the positive end (right-hand rule).
    Positive,
    /// Clockwise seen from the positive end.
    Negative,
}

impl Sense {
    /// The opposite sense.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Sense::Positive => Sense::Negative,
            Sense::Negative => Sense::Positive,
        }
    }
}

/// Sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
}

impl Color {
    /// Single-character code used by the renderer.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
        }
    }

    /// Color of `face` on a solved cube.
    #[must_use]
    pub const fn solved(face: Face) -> Self {
        match face {
            Face::Front => Color::White,
            Face::Left => Color::Blue,
            Face::Right => Color::Green,
            Face::Up => Color::Red,
            Face::Back => Color::Yellow,
            Face::Down => Color::Orange,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
