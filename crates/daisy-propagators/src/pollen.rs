//! Pollen conversion stage.
//!
//! Every daisy may convert each adjacent antagonist to its own colour.
//! Reads see only the stage-start grid and writes land only in the
//! scratch grid, so a daisy converted during the sweep cannot itself
//! convert anything until the next tick, whatever the traversal order.
//!
//! # Competing conversions
//!
//! When two sources both convert the same target, the later write in
//! traversal order wins. Traversal is column-major (`x` outer, `y`
//! inner) with neighbours in the grid's `OFFSETS_8` order.
//! For a target only two outcomes exist (it either stays or flips to the
//! single antagonist colour), so the race decides which source gets
//! credit, never the resulting kind.

use daisy_propagator::{Stage, StepContext};

/// Converts antagonist neighbours with a fixed per-pair probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollenConversion {
    chance: f64,
}

impl PollenConversion {
    /// Per-tick chance a daisy converts a given adjacent antagonist.
    pub const DEFAULT_CHANCE: f64 = 0.05;

    /// Create a pollen stage with conversion probability `chance`.
    ///
    /// The engine validates `chance` to lie in `[0, 1]`.
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }

    /// Conversion probability.
    pub fn chance(&self) -> f64 {
        self.chance
    }
}

impl Default for PollenConversion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHANCE)
    }
}

impl Stage for PollenConversion {
    fn name(&self) -> &str {
        "pollen_conversion"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let current = ctx.current();
        let (width, height) = current.shape();
        let mut conversions = 0u64;

        for x in 0..width as i32 {
            for y in 0..height as i32 {
                let source = current.get(x, y);
                let Some(enemy) = source.enemy() else {
                    continue;
                };
                for (nx, ny) in current.neighbours(x, y) {
                    // One draw per antagonist neighbour, none otherwise.
                    if current.get(nx, ny) == enemy && ctx.draw() < self.chance {
                        ctx.next().set(nx, ny, source);
                        conversions += 1;
                    }
                }
            }
        }

        ctx.tally_mut().pollen_conversions += conversions;
    }
}
