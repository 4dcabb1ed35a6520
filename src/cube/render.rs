//! Text rendering of the six faces.
//!
//! Each face is read as seen from outside the cube, oriented as in the
//! unfolded cross below, so adjacent faces share edges in the picture:
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```
//!
//! Up has back at its top edge and down has front at its top edge; the four
//! side faces have up at their top edge. With `(d, h, w)` grid coordinates
//! and `(r, c)` the row and column of the rendered block:
//!
//! | face  | cell         |
//! |-------|--------------|
//! | front | `(0, r, c)`  |
//! | back  | `(2, r, 2-c)`|
//! | left  | `(2-c, r, 0)`|
//! | right | `(c, r, 2)`  |
//! | up    | `(2-r, 0, c)`|
//! | down  | `(r, 2, c)`  |

use crate::core::face::{Color, Face};
use crate::core::grid::{CubeGrid, Layer, Pos, SIZE};

/// Order in which faces are rendered.
pub const RENDER_ORDER: [Face; 6] = [
    Face::Front,
    Face::Left,
    Face::Right,
    Face::Up,
    Face::Back,
    Face::Down,
];

/// Grid position shown at `(row, col)` of `face`'s rendered block.
#[must_use]
pub fn view_pos(face: Face, row: usize, col: usize) -> Pos {
    let last = SIZE - 1;
    match face {
        Face::Front => Pos::new(0, row, col),
        Face::Back => Pos::new(last, row, last - col),
        Face::Left => Pos::new(last - col, row, 0),
        Face::Right => Pos::new(col, row, last),
        Face::Up => Pos::new(last - row, 0, col),
        Face::Down => Pos::new(row, last, col),
    }
}

/// Stickers of `face` in rendered orientation.
#[must_use]
pub fn face_view(grid: &CubeGrid, face: Face) -> Layer<Option<Color>> {
    std::array::from_fn(|row| std::array::from_fn(|col| grid.sticker(view_pos(face, row, col), face)))
}

/// Render all six faces as labeled 3x3 blocks of color codes.
///
/// Missing stickers print as a space.
#[must_use]
pub fn render(grid: &CubeGrid) -> String {
    let mut out = String::new();

    for face in RENDER_ORDER {
        out.push_str(face.title());
        out.push_str(" Side:\n");
        for row in face_view(grid, face) {
            out.extend(row.iter().map(|c| c.map_or(' ', Color::code)));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
