//! Scramble configuration.
//!
//! ```
//! use rubik_engine::scramble::ScrambleConfig;
//!
//! let config = ScrambleConfig::new(42).with_rotations(20);
//! assert_eq!(config.seed, 42);
//! assert_eq!(config.rotations, 20);
//! assert!(!config.include_slices);
//! ```

use serde::{Deserialize, Serialize};

use crate::rotation::Segment;

/// Default number of quarter turns in a scramble.
pub const DEFAULT_ROTATIONS: usize = 25;

/// Parameters for generating a scramble.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// RNG seed. Equal seeds give equal scrambles.
    pub seed: u64,

    /// Number of quarter turns to generate.
    pub rotations: usize,

    /// Draw from all nine segments instead of only the six outer faces.
    pub include_slices: bool,
}

impl ScrambleConfig {
    /// Create a configuration with the given seed and default length.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rotations: DEFAULT_ROTATIONS,
            include_slices: false,
        }
    }

    /// Set the number of quarter turns.
    #[must_use]
    pub fn with_rotations(mut self, rotations: usize) -> Self {
        self.rotations = rotations;
        self
    }

    /// Include middle-slice turns.
    #[must_use]
    pub fn with_slices(mut self) -> Self {
        self.include_slices = true;
        self
    }

    /// Segments the scramble draws from.
    #[must_use]
    pub fn segments(&self) -> &'static [Segment] {
        if self.include_slices {
            &Segment::ALL
        } else {
            &Segment::OUTER
        }
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
