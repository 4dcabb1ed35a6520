//! Rotation engine: applies one quarter turn to a grid.
//!
//! A move is applied in two steps that must describe the same physical
//! rotation:
//!
//! 1. **Permute positions**: read the layer's slot ids, transpose if the
//!    selector asks for it, turn the array, undo the transpose, write back.
//! 2. **Relabel stickers**: every cubie now in the layer relabels its
//!    sticker map for the same segment and direction.
//!
//! Both steps take their geometry from `LayerSelector`.

use crate::core::error::Result;
use crate::core::grid::{rotate_quarter, transpose, CubeGrid};

use super::moves::Move;
use super::selector::LayerSelector;

/// Applies moves to a `CubeGrid`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationEngine;

impl RotationEngine {
    /// Apply `mv` to `grid` in place.
    ///
    /// Fails only with `CorruptedState`, which means the rotation tables are
    /// wrong; the grid must not be used afterwards.
    pub fn apply(grid: &mut CubeGrid, mv: Move) -> Result<()> {
        let spec = LayerSelector::select(mv.segment);

        let mut layer = grid.layer(spec.axis, spec.index);
        if spec.transpose {
            layer = transpose(&layer);
        }
        for _ in 0..spec.turns(mv.direction) {
            layer = rotate_quarter(&layer);
        }
        if spec.transpose {
            layer = transpose(&layer);
        }
        grid.set_layer(spec.axis, spec.index, &layer);

        for pos in CubeGrid::layer_positions(spec.axis, spec.index) {
            grid.at_mut(pos).rotate(mv.segment, mv.direction)?;
        }

        Ok(())
    }

    /// Apply each move in order, stopping at the first error.
    pub fn apply_all(grid: &mut CubeGrid, moves: &[Move]) -> Result<()> {
        moves.iter().try_for_each(|&mv| Self::apply(grid, mv))
    }
}
