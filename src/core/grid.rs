//! The 3x3x3 arrangement of cubies.
//!
//! ## Storage
//!
//! The grid is an arena of 27 cubies plus a slot table mapping each grid
//! position to the arena index of the cubie currently there. Turning a
//! layer permutes slot entries; cubies themselves are never replaced, only
//! their sticker maps change.
//!
//! All access goes through `Pos`, so every read and write is an owned,
//! bounds-checked index rather than an overlapping view.

use serde::{Deserialize, Serialize};

use super::cubie::Cubie;
use super::face::{Axis, Color, Face};

/// Grid side length.
pub const SIZE: usize = 3;

/// Number of cubies in the grid.
pub const CUBIE_COUNT: usize = SIZE * SIZE * SIZE;

/// A 3x3 layer of values laid out `[row][col]`.
pub type Layer<T> = [[T; SIZE]; SIZE];

/// Grid position `(d, h, w)`, always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    d: usize,
    h: usize,
    w: usize,
}

impl Pos {
    /// Create a position. Panics if any coordinate is out of range.
    #[must_use]
    pub fn new(d: usize, h: usize, w: usize) -> Self {
        assert!(d < SIZE && h < SIZE && w < SIZE, "Position out of range");
        Self { d, h, w }
    }

    /// Depth: 0 = front, 2 = back.
    #[must_use]
    pub const fn d(self) -> usize {
        self.d
    }

    /// Height: 0 = up, 2 = down.
    #[must_use]
    pub const fn h(self) -> usize {
        self.h
    }

    /// Width: 0 = left, 2 = right.
    #[must_use]
    pub const fn w(self) -> usize {
        self.w
    }

    /// Position from its linear arena index.
    #[must_use]
    pub fn from_linear(index: usize) -> Self {
        Self::new(index / (SIZE * SIZE), (index / SIZE) % SIZE, index % SIZE)
    }

    /// Linear index into the slot table.
    #[must_use]
    pub const fn linear(self) -> usize {
        self.d * SIZE * SIZE + self.h * SIZE + self.w
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Depth => self.d,
            Axis::Height => self.h,
            Axis::Width => self.w,
        }
    }

    /// Position at `[row][col]` of the layer `axis = index`.
    ///
    /// Rows are the lower-numbered free axis.
    #[must_use]
    pub fn in_layer(axis: Axis, index: usize, row: usize, col: usize) -> Self {
        match axis {
            Axis::Depth => Self::new(index, row, col),
            Axis::Height => Self::new(row, index, col),
            Axis::Width => Self::new(row, col, index),
        }
    }

    /// Check if this position lies on the outer layer of `face`.
    #[must_use]
    pub const fn touches(self, face: Face) -> bool {
        self.along(face.axis()) == face.boundary_index()
    }

    /// Iterate over all 27 positions in linear order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CUBIE_COUNT).map(Pos::from_linear)
    }
}

/// Arena index of a cubie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CubieId(u8);

impl CubieId {
    /// Create an id. Panics if `index` is not below `CUBIE_COUNT`.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!((index as usize) < CUBIE_COUNT, "Cubie index out of range");
        Self(index)
    }

    /// Iterate over all 27 ids.
    pub fn all() -> impl Iterator<Item = CubieId> {
        (0..CUBIE_COUNT as u8).map(CubieId)
    }

    /// Raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for CubieId {
    type Error = String;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        if (index as usize) < CUBIE_COUNT {
            Ok(Self(index))
        } else {
            Err(format!("cubie index {index} out of range"))
        }
    }
}

impl From<CubieId> for u8 {
    fn from(id: CubieId) -> Self {
        id.0
    }
}

/// The 27 cubies and their current positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeGrid {
    cubies: [Cubie; CUBIE_COUNT],
    slots: [CubieId; CUBIE_COUNT],
}

impl CubeGrid {
    /// Create the solved arrangement.
    ///
    /// A cubie gets a face's color exactly when its position touches that
    /// face. Cubie `i` starts at linear position `i`.
    #[must_use]
    pub fn solved() -> Self {
        let cubies = std::array::from_fn(|i| {
            let pos = Pos::from_linear(i);
            let stickers = Face::ALL.map(|face| pos.touches(face).then(|| Color::solved(face)));
            Cubie::from_stickers(stickers)
        });
        let slots = std::array::from_fn(|i| CubieId(i as u8));

        Self { cubies, slots }
    }

    /// Arena index of the cubie at `pos`.
    #[must_use]
    pub fn id_at(&self, pos: Pos) -> CubieId {
        self.slots[pos.linear()]
    }

    /// The cubie at `pos`.
    #[must_use]
    pub fn at(&self, pos: Pos) -> &Cubie {
        &self.cubies[self.id_at(pos).index()]
    }

    /// Mutable access to the cubie at `pos`.
    pub fn at_mut(&mut self, pos: Pos) -> &mut Cubie {
        let id = self.id_at(pos);
        &mut self.cubies[id.index()]
    }

    /// The cubie with arena index `id`, wherever it sits.
    #[must_use]
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.index()]
    }

    /// Current position of cubie `id`.
    ///
    /// `None` only if the slot table has lost the id, which a grid built by
    /// this crate never does.
    #[must_use]
    pub fn position_of(&self, id: CubieId) -> Option<Pos> {
        self.slots
            .iter()
            .position(|&slot| slot == id)
            .map(Pos::from_linear)
    }

    /// Sticker on `face` of the cubie at `pos`.
    #[must_use]
    pub fn sticker(&self, pos: Pos, face: Face) -> Option<Color> {
        self.at(pos).sticker(face)
    }

    /// Read the slot ids of layer `axis = index`.
    #[must_use]
    pub fn layer(&self, axis: Axis, index: usize) -> Layer<CubieId> {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.id_at(Pos::in_layer(axis, index, row, col)))
        })
    }

    /// Write slot ids back into layer `axis = index`.
    pub fn set_layer(&mut self, axis: Axis, index: usize, layer: &Layer<CubieId>) {
        for (row, ids) in layer.iter().enumerate() {
            for (col, &id) in ids.iter().enumerate() {
                self.slots[Pos::in_layer(axis, index, row, col).linear()] = id;
            }
        }
    }

    /// Positions of layer `axis = index`, in layer order.
    pub fn layer_positions(axis: Axis, index: usize) -> impl Iterator<Item = Pos> {
        (0..SIZE).flat_map(move |row| (0..SIZE).map(move |col| Pos::in_layer(axis, index, row, col)))
    }

    /// Iterate over `(position, cubie)` in linear order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cubie)> + '_ {
        Pos::all().map(move |pos| (pos, self.at(pos)))
    }
}

impl Default for CubeGrid {
    fn default() -> Self {
        Self::solved()
    }
}

/// Transpose a 3x3 layer.
#[must_use]
pub fn transpose<T: Copy>(layer: &Layer<T>) -> Layer<T> {
    std::array::from_fn(|row| std::array::from_fn(|col| layer[col][row]))
}

/// Turn a 3x3 layer one quarter counter-clockwise (row 0 on top).
///
/// `out[i][j] = in[j][2 - i]`.
#[must_use]
pub fn rotate_quarter<T: Copy>(layer: &Layer<T>) -> Layer<T> {
    std::array::from_fn(|row| std::array::from_fn(|col| layer[col][SIZE - 1 - row]))
}
