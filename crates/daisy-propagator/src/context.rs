//! Execution context passed to stages during tick execution.
//!
//! [`StepContext`] provides split-borrow grid access (frozen current grid,
//! mutable scratch grid) plus the engine's random source, the climate
//! reading for this tick, and the counters a stage may refresh.

use daisy_core::{PopulationCounts, TickId};
use daisy_space::Grid;
use rand::{Rng, RngCore};

/// Climate state a stage sees for the whole tick.
///
/// Temperature is global: every cell reads the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClimateReading {
    /// Solar luminosity after this tick's advance.
    pub luminosity: f64,
    /// Planetary temperature derived from the previous counters.
    pub temperature: f64,
}

/// Cell transitions recorded by stages during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageTally {
    /// Successful pollen conversions (a later conversion of the same
    /// target cell still counts as a separate success).
    pub pollen_conversions: u64,
    /// Empty cells seeded with a black daisy.
    pub black_seeded: u64,
    /// Empty cells seeded with a white daisy.
    pub white_seeded: u64,
    /// Daisies that died and left empty ground.
    pub deaths: u64,
}

/// Execution context passed to each stage's `step()` method.
///
/// # Split-borrow semantics
///
/// - **`current()`** is the grid as it stood when the stage began. It is
///   never modified during the stage, so a cell changed earlier in the
///   sweep cannot influence cells visited later.
/// - **`next()`** is the scratch grid, seeded as a copy of `current()`.
///   The engine publishes it once the stage returns.
pub struct StepContext<'a> {
    current: &'a Grid,
    next: &'a mut Grid,
    rng: &'a mut dyn RngCore,
    counts: &'a mut PopulationCounts,
    tally: &'a mut StageTally,
    climate: ClimateReading,
    tick_id: TickId,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the engine, not by stages directly. Tests may
    /// build one around hand-made grids and a mock random source.
    pub fn new(
        current: &'a Grid,
        next: &'a mut Grid,
        rng: &'a mut dyn RngCore,
        counts: &'a mut PopulationCounts,
        tally: &'a mut StageTally,
        climate: ClimateReading,
        tick_id: TickId,
    ) -> Self {
        Self {
            current,
            next,
            rng,
            counts,
            tally,
            climate,
            tick_id,
        }
    }

    /// Frozen stage-start grid.
    ///
    /// The returned reference outlives the borrow of `self`, so a stage
    /// can hold it while drawing randomness or writing `next()`.
    pub fn current(&self) -> &'a Grid {
        self.current
    }

    /// Scratch grid receiving this stage's output.
    pub fn next(&mut self) -> &mut Grid {
        self.next
    }

    /// The engine's shared random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng
    }

    /// One uniform draw from `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Population counters, for stages that recompute them.
    pub fn counts_mut(&mut self) -> &mut PopulationCounts {
        self.counts
    }

    /// Transition tally for this tick.
    pub fn tally_mut(&mut self) -> &mut StageTally {
        self.tally
    }

    /// Climate for this tick.
    pub fn climate(&self) -> ClimateReading {
        self.climate
    }

    /// Global temperature for this tick.
    pub fn temperature(&self) -> f64 {
        self.climate.temperature
    }

    /// The tick being computed.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }
}
