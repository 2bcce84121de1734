//! RNG module - deterministic shape selection
//!
//! A small LCG drives uniform draws from the shape catalog (no bag
//! randomizer; every draw is independent). The generator lives inside the
//! game state so cloned states replay identically: the binary seeds it from
//! the system clock, tests pass explicit seeds.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRng {
    state: u32,
}

impl ShapeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniformly-random shape kind
    pub fn next_shape(&mut self) -> ShapeKind {
        let index = self.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[index]
    }
}
