//! Benchmark profiles for the Daisyworld simulation.
//!
//! - [`reference_profile`]: the classic 100x100 planet (10K cells)
//! - [`stress_profile`]: 316x316 (~100K cells)
//! - [`mixed_grid`]: a deterministic, fully mixed grid for stage benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use daisy_core::Patch;
use daisy_engine::DaisyConfig;
use daisy_space::Grid;

/// Default parameters on a 100x100 planet.
pub fn reference_profile(seed: u64) -> DaisyConfig {
    DaisyConfig {
        width: 100,
        height: 100,
        seed,
        ..DaisyConfig::default()
    }
}

/// Same physics as [`reference_profile`] at ten times the cell count.
pub fn stress_profile(seed: u64) -> DaisyConfig {
    DaisyConfig {
        width: 316,
        height: 316,
        seed,
        ..DaisyConfig::default()
    }
}

/// Roughly one third of each kind, arranged so most daisies border an
/// antagonist. Panics on a zero dimension.
pub fn mixed_grid(width: u32, height: u32) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        Patch::ALL[((x * 5 + y * 3) % 3) as usize]
    })
    .unwrap()
}
