//! A single sub-cube and its sticker relabeling.
//!
//! A cubie never changes identity. Turning a layer moves cubies between
//! grid slots (see `CubeGrid`) and relabels which face slot each sticker
//! occupies (this module). The number of stickers is fixed at construction
//! and checked after every relabel.

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};
use super::face::{Axis, Color, Face, Sense};
use crate::rotation::{Direction, LayerSelector, Segment};

/// One of the 27 sub-cubes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cubie {
    face_count: u8,
    stickers: [Option<Color>; 6],
}

impl Cubie {
    /// Create a cubie from its sticker map.
    ///
    /// Panics if `face_count` disagrees with the number of stickers.
    #[must_use]
    pub fn new(face_count: u8, stickers: [Option<Color>; 6]) -> Self {
        let cubie = Self {
            face_count,
            stickers,
        };
        assert!(face_count <= 3, "A cubie shows at most 3 stickers");
        assert_eq!(
            cubie.sticker_count(),
            face_count,
            "Sticker map must hold exactly face_count colors"
        );
        cubie
    }

    /// Create a cubie whose face count is taken from its stickers.
    #[must_use]
    pub fn from_stickers(stickers: [Option<Color>; 6]) -> Self {
        let count = stickers.iter().filter(|s| s.is_some()).count() as u8;
        Self::new(count, stickers)
    }

    /// Number of stickers, fixed for the cubie's lifetime.
    #[must_use]
    pub const fn face_count(&self) -> u8 {
        self.face_count
    }

    /// Sticker currently on `face`.
    #[must_use]
    pub const fn sticker(&self, face: Face) -> Option<Color> {
        self.stickers[face.index()]
    }

    /// The full sticker map, indexed by `Face::index`.
    #[must_use]
    pub const fn stickers(&self) -> &[Option<Color>; 6] {
        &self.stickers
    }

    /// Faces that currently carry a sticker.
    pub fn colored_faces(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL.into_iter().filter(|&f| self.sticker(f).is_some())
    }

    /// Count the non-empty sticker slots.
    #[must_use]
    pub fn sticker_count(&self) -> u8 {
        self.stickers.iter().filter(|s| s.is_some()).count() as u8
    }

    /// Relabel stickers for a turn of `segment` in `direction`.
    ///
    /// The axis and sense come from `LayerSelector`, the same table that
    /// drives the position permutation.
    pub fn rotate(&mut self, segment: Segment, direction: Direction) -> Result<()> {
        let spec = LayerSelector::select(segment);
        self.turn(spec.axis, spec.sense(direction))
    }

    /// Relabel stickers for a quarter turn about `axis`.
    ///
    /// All four destinations are written from a snapshot of the prior map.
    pub fn turn(&mut self, axis: Axis, sense: Sense) -> Result<()> {
        let before = self.stickers;
        let cycle = axis.cycle();

        for i in 0..4 {
            let (src, dest) = match sense {
                Sense::Positive => (cycle[i], cycle[(i + 1) % 4]),
                Sense::Negative => (cycle[(i + 1) % 4], cycle[i]),
            };
            self.stickers[dest.index()] = before[src.index()];
        }

        self.check()
    }

    /// Verify the sticker count still matches `face_count`.
    pub fn check(&self) -> Result<()> {
        let found = self.sticker_count();
        if found != self.face_count {
            return Err(CubeError::CorruptedState {
                expected: self.face_count,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
impl Cubie {
    /// Remove the sticker on `face` while keeping `face_count`.
    pub(crate) fn peel(&mut self, face: Face) {
        self.stickers[face.index()] = None;
    }
}

impl std::fmt::Display for Cubie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, face) in self.colored_faces().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if let Some(color) = self.sticker(face) {
                write!(f, "{face}: {color}")?;
            }
        }
        write!(f, "}}")
    }
}
