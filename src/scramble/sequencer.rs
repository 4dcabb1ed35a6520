//! Scramble generation.
//!
//! A scramble is an ordered list of quarter turns drawn uniformly from the
//! configured segments and both directions. Generation only produces moves;
//! applying them is the cube's job.
//!
//! Each scramble keeps the RNG position it stopped at, so a set of scrambles
//! can be drawn one after another from a single seed.

use serde::{Deserialize, Serialize};

use crate::rotation::{format_sequence, inverse_sequence, Direction, Move, MoveSequence};

use super::config::ScrambleConfig;
use super::rng::{ScrambleRng, ScrambleRngState};

/// A generated scramble.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    /// Seed the moves were generated from.
    pub seed: u64,
    /// Moves in application order.
    pub moves: MoveSequence,
    /// RNG position after the last move was drawn.
    pub end_state: ScrambleRngState,
}

impl Scramble {
    /// Generate the scramble described by `config`.
    #[must_use]
    pub fn generate(config: &ScrambleConfig) -> Self {
        Self::draw(ScrambleRng::new(config.seed), config)
    }

    /// Draw the next scramble from the stream this one ended on.
    ///
    /// Length and segment pool come from `config`; its seed is ignored.
    #[must_use]
    pub fn follow(&self, config: &ScrambleConfig) -> Self {
        Self::draw(ScrambleRng::from_state(&self.end_state), config)
    }

    fn draw(mut rng: ScrambleRng, config: &ScrambleConfig) -> Self {
        let segments = config.segments();

        let moves = (0..config.rotations)
            .map(|_| {
                let segment = segments[rng.gen_index(segments.len())];
                let direction = Direction::ALL[rng.gen_index(Direction::ALL.len())];
                Move::new(segment, direction)
            })
            .collect();

        Self {
            seed: rng.seed(),
            moves,
            end_state: rng.state(),
        }
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the scramble has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Singmaster notation, space separated.
    #[must_use]
    pub fn notation(&self) -> String {
        format_sequence(&self.moves)
    }

    /// Moves that undo this scramble.
    #[must_use]
    pub fn inverse(&self) -> MoveSequence {
        inverse_sequence(&self.moves)
    }
}

impl std::fmt::Display for Scramble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Segment;

    #[test]
    fn test_same_seed_same_moves() {
        let config = ScrambleConfig::new(42).with_rotations(20);
        assert_eq!(Scramble::generate(&config), Scramble::generate(&config));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Scramble::generate(&ScrambleConfig::new(1).with_rotations(30));
        let b = Scramble::generate(&ScrambleConfig::new(2).with_rotations(30));
        assert_ne!(a.moves, b.moves);
    }

    #[test]
    fn test_length_and_pool() {
        let scramble = Scramble::generate(&ScrambleConfig::new(5).with_rotations(200));
        assert_eq!(scramble.len(), 200);
        assert!(scramble.moves.iter().all(|mv| !mv.segment.is_slice()));

        // 200 draws over 12 outcomes should cover both directions.
        assert!(scramble.moves.iter().any(|mv| mv.direction == Direction::Clockwise));
        assert!(scramble.moves.iter().any(|mv| mv.direction == Direction::CounterClockwise));
    }

    #[test]
    fn test_slices_included_when_configured() {
        let scramble = Scramble::generate(&ScrambleConfig::new(5).with_rotations(200).with_slices());
        assert!(scramble.moves.iter().any(|mv| mv.segment.is_slice()));
    }

    #[test]
    fn test_empty() {
        let scramble = Scramble::generate(&ScrambleConfig::new(5).with_rotations(0));
        assert!(scramble.is_empty());
        assert_eq!(scramble.notation(), "");
    }

    #[test]
    fn test_notation_tokens() {
        let scramble = Scramble::generate(&ScrambleConfig::new(11).with_rotations(10));
        let notation = scramble.notation();
        let tokens: Vec<_> = notation.split(' ').collect();
        assert_eq!(tokens.len(), 10);
        for (token, mv) in tokens.iter().zip(scramble.moves.iter()) {
            assert!(token.starts_with(mv.segment.letter()));
            assert_eq!(token.ends_with('\''), !mv.direction.is_clockwise());
        }
    }

    #[test]
    fn test_inverse() {
        let scramble = Scramble {
            seed: 0,
            moves: [Move::cw(Segment::Front), Move::ccw(Segment::Up)].into_iter().collect(),
            end_state: ScrambleRng::new(0).state(),
        };
        assert_eq!(
            scramble.inverse().as_slice(),
            &[Move::cw(Segment::Up), Move::ccw(Segment::Front)]
        );
    }

    #[test]
    fn test_follow_continues_the_stream() {
        let long = Scramble::generate(&ScrambleConfig::new(8).with_rotations(30));
        let first = Scramble::generate(&ScrambleConfig::new(8).with_rotations(12));
        let second = first.follow(&ScrambleConfig::new(8).with_rotations(18));

        assert_eq!(first.moves.as_slice(), &long.moves[..12]);
        assert_eq!(second.moves.as_slice(), &long.moves[12..]);
        assert_eq!(second.seed, 8);
        assert_eq!(second.end_state, long.end_state);
    }

    #[test]
    fn test_follow_ignores_config_seed() {
        let first = Scramble::generate(&ScrambleConfig::new(3).with_rotations(5));
        let a = first.follow(&ScrambleConfig::new(100).with_rotations(10));
        let b = first.follow(&ScrambleConfig::new(200).with_rotations(10));
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }
}
