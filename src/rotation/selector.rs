//! Layer selection: the single table of rotation geometry.
//!
//! Every segment maps to a `LayerSpec` describing which 3x3 layer it turns
//! and how a generic array quarter turn realizes each direction. Both the
//! position permutation and the sticker relabel read from this table.
//!
//! ## Layer Layout
//!
//! A layer is laid out with its lower-numbered free axis as rows:
//! depth layers are `[h][w]`, height layers are `[d][w]`, width layers
//! are `[d][h]`. Width layers are transposed to `[h][d]` before turning.
//!
//! The array primitive is one counter-clockwise quarter turn of that
//! layout (row 0 on top, column 0 on the left). A layer whose layout reads
//! the same as the view from outside needs 3 primitive turns for a
//! clockwise move; a mirrored layout needs 1.
//!
//! ## Table
//!
//! | segment    | axis   | index | transpose | cw | ccw | cw sense |
//! |------------|--------|-------|-----------|----|-----|----------|
//! | front      | depth  | 0     | no        | 3  | 1   | negative |
//! | back       | depth  | 2     | no        | 1  | 3   | positive |
//! | mid-depth  | depth  | 1     | no        | 3  | 1   | negative |
//! | up         | height | 0     | no        | 1  | 3   | negative |
//! | down       | height | 2     | no        | 3  | 1   | positive |
//! | mid-height | height | 1     | no        | 3  | 1   | positive |
//! | left       | width  | 0     | yes       | 1  | 3   | positive |
//! | right      | width  | 2     | yes       | 3  | 1   | negative |
//! | mid-width  | width  | 1     | yes       | 1  | 3   | positive |
//!
//! Middle slices turn like front (mid-depth), down (mid-height) and
//! left (mid-width).

use crate::core::error::Result;
use crate::core::face::{Axis, Sense};

use super::moves::{Direction, Segment};

/// Geometry of one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSpec {
    /// Axis held constant to carve out the layer.
    pub axis: Axis,
    /// Grid index along `axis`.
    pub index: usize,
    /// Transpose the layer before applying the array primitive.
    pub transpose: bool,
    /// Primitive quarter turns for a clockwise move.
    pub cw_turns: u8,
    /// Primitive quarter turns for a counter-clockwise move.
    pub ccw_turns: u8,
    /// Rotational sense about the positive axis of a clockwise move.
    pub cw_sense: Sense,
}

impl LayerSpec {
    /// Primitive quarter turns for `direction`.
    #[must_use]
    pub const fn turns(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Clockwise => self.cw_turns,
            Direction::CounterClockwise => self.ccw_turns,
        }
    }

    /// Rotational sense about the positive axis for `direction`.
    #[must_use]
    pub const fn sense(&self, direction: Direction) -> Sense {
        match direction {
            Direction::Clockwise => self.cw_sense,
            Direction::CounterClockwise => self.cw_sense.flip(),
        }
    }
}

const fn spec(axis: Axis, index: usize, transpose: bool, cw_turns: u8, cw_sense: Sense) -> LayerSpec {
    LayerSpec {
        axis,
        index,
        transpose,
        cw_turns,
        ccw_turns: 4 - cw_turns,
        cw_sense,
    }
}

/// Lookup from segment to layer geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerSelector;

impl LayerSelector {
    /// Geometry for `segment`.
    #[must_use]
    pub const fn select(segment: Segment) -> LayerSpec {
        use Axis::{Depth, Height, Width};
        use Sense::{Negative, Positive};

        match segment {
            Segment::Front => spec(Depth, 0, false, 3, Negative),
            Segment::Back => spec(Depth, 2, false, 1, Positive),
            Segment::MidDepth => spec(Depth, 1, false, 3, Negative),
            Segment::Up => spec(Height, 0, false, 1, Negative),
            Segment::Down => spec(Height, 2, false, 3, Positive),
            Segment::MidHeight => spec(Height, 1, false, 3, Positive),
            Segment::Left => spec(Width, 0, true, 1, Positive),
            Segment::Right => spec(Width, 2, true, 3, Negative),
            Segment::MidWidth => spec(Width, 1, true, 1, Positive),
        }
    }

    /// Geometry for a segment given by name.
    ///
    /// Fails with `InvalidSegment` for names outside the canonical nine.
    pub fn select_named(name: &str) -> Result<LayerSpec> {
        Ok(Self::select(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CubeError;

    #[test]
    fn test_turn_counts_complement() {
        for seg in Segment::ALL {
            let spec = LayerSelector::select(seg);
            assert_eq!(spec.cw_turns + spec.ccw_turns, 4);
            assert!(spec.cw_turns == 1 || spec.cw_turns == 3);
        }
    }

    #[test]
    fn test_only_width_layers_transpose() {
        for seg in Segment::ALL {
            let spec = LayerSelector::select(seg);
            assert_eq!(spec.transpose, spec.axis == Axis::Width, "{seg}");
        }
    }

    #[test]
    fn test_opposite_faces_mirror() {
        let pairs = [
            (Segment::Front, Segment::Back),
            (Segment::Up, Segment::Down),
            (Segment::Left, Segment::Right),
        ];
        for (a, b) in pairs {
            let sa = LayerSelector::select(a);
            let sb = LayerSelector::select(b);
            assert_eq!(sa.axis, sb.axis);
            assert_eq!(sa.index + sb.index, 2);
            assert_eq!(sa.cw_turns, sb.ccw_turns);
            assert_eq!(sa.cw_sense, sb.cw_sense.flip());
        }
    }

    #[test]
    fn test_outer_faces_sit_on_their_boundary() {
        for seg in Segment::OUTER {
            let face = seg.face().unwrap();
            let spec = LayerSelector::select(seg);
            assert_eq!(spec.axis, face.axis());
            assert_eq!(spec.index, face.boundary_index());
        }
    }

    #[test]
    fn test_slices_follow_parallel_layer() {
        let follows = [
            (Segment::MidDepth, Segment::Front),
            (Segment::MidHeight, Segment::Down),
            (Segment::MidWidth, Segment::Left),
        ];
        for (slice, outer) in follows {
            let s = LayerSelector::select(slice);
            let o = LayerSelector::select(outer);
            assert_eq!(s.index, 1);
            assert_eq!(s.axis, o.axis);
            assert_eq!(s.cw_turns, o.cw_turns);
            assert_eq!(s.cw_sense, o.cw_sense);
        }
    }

    #[test]
    fn test_sense_by_direction() {
        let spec = LayerSelector::select(Segment::Front);
        assert_eq!(spec.sense(Direction::Clockwise), Sense::Negative);
        assert_eq!(spec.sense(Direction::CounterClockwise), Sense::Positive);
        assert_eq!(spec.turns(Direction::CounterClockwise), 1);
    }

    #[test]
    fn test_select_named() {
        let spec = LayerSelector::select_named("mid-width").unwrap();
        assert_eq!(spec.axis, Axis::Width);
        assert_eq!(spec.index, 1);

        assert_eq!(
            LayerSelector::select_named("c_vertical").unwrap_err(),
            CubeError::InvalidSegment("c_vertical".into())
        );
    }
}
