//! RNG module - seeded shape and color selection
//!
//! Shapes and colors are drawn independently and uniformly. There is no bag:
//! the same shape may come up any number of times in a row.
//!
//! Seeding with the same value reproduces the same sequence, which keeps sessions
//! deterministic under test.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{PieceColor, ShapeId};

#[derive(Debug, Clone)]
pub struct PieceRng {
    seed: u64,
    rng: Pcg32,
}

impl PieceRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_shape(&mut self) -> ShapeId {
        ShapeId::ALL[self.rng.random_range(0..ShapeId::ALL.len())]
    }

    pub fn next_color(&mut self) -> PieceColor {
        PieceColor::ALL[self.rng.random_range(0..PieceColor::ALL.len())]
    }
}
