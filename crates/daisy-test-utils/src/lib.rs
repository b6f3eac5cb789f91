//! Test fixtures and helpers for Daisyworld development.
//!
//! Provides grid builders, forced-outcome random sources, and
//! [`run_stage`], which drives a single [`Stage`] through one
//! double-buffered pass outside the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{always_draw_high, always_draw_zero, checkerboard, grid_with};

use daisy_core::{PopulationCounts, TickId};
use daisy_propagator::{ClimateReading, Stage, StageTally, StepContext};
use daisy_space::Grid;
use rand::RngCore;

/// Output of one isolated stage pass.
#[derive(Debug)]
pub struct StageRun {
    /// The scratch grid after the stage returned.
    pub next: Grid,
    /// Transitions the stage recorded.
    pub tally: StageTally,
    /// Counters after the stage (unchanged unless the stage rebuilds them).
    pub counts: PopulationCounts,
}

/// Run `stage` once against `grid` at a fixed global temperature.
///
/// `grid` is never modified; the scratch grid starts as its copy, exactly
/// as the engine seeds it.
pub fn run_stage(
    stage: &dyn Stage,
    grid: &Grid,
    temperature: f64,
    rng: &mut dyn RngCore,
) -> StageRun {
    let mut next = grid.snapshot();
    let mut counts = grid.population();
    let mut tally = StageTally::default();
    {
        let mut ctx = StepContext::new(
            grid,
            &mut next,
            rng,
            &mut counts,
            &mut tally,
            ClimateReading {
                luminosity: 1.0,
                temperature,
            },
            TickId(1),
        );
        stage.step(&mut ctx);
    }
    StageRun {
        next,
        tally,
        counts,
    }
}
