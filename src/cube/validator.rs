//! Solved-state detection.

use crate::core::face::{Color, Face};
use crate::core::grid::{CubeGrid, Pos};

/// Read-only checks over a grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateValidator;

impl StateValidator {
    /// Check if every outer face shows a single color.
    #[must_use]
    pub fn is_solved(grid: &CubeGrid) -> bool {
        Face::ALL.into_iter().all(|face| Self::face_color(grid, face).is_some())
    }

    /// The uniform color of `face`, or `None` if its nine stickers differ
    /// or any is missing.
    #[must_use]
    pub fn face_color(grid: &CubeGrid, face: Face) -> Option<Color> {
        let mut stickers = Pos::all()
            .filter(|pos| pos.touches(face))
            .map(|pos| grid.sticker(pos, face));

        let first = stickers.next().flatten()?;
        stickers.all(|s| s == Some(first)).then_some(first)
    }

    /// Number of faces showing a single color.
    #[must_use]
    pub fn solved_faces(grid: &CubeGrid) -> usize {
        Face::ALL
            .into_iter()
            .filter(|&face| Self::face_color(grid, face).is_some())
            .count()
    }
}
