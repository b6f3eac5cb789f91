//! Daisyworld: a cellular-automaton model of planetary climate
//! self-regulation.
//!
//! Black and white daisies compete on a toroidal grid under a slowly
//! brightening sun. Dark daisies warm the planet, pale ones cool it, and
//! their growth depends on the global temperature they jointly set.
//!
//! This is the facade crate that re-exports the public API from all
//! Daisyworld sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use daisy::prelude::*;
//!
//! let config = DaisyConfig {
//!     width: 32,
//!     height: 32,
//!     seed: 42,
//!     ..DaisyConfig::default()
//! };
//! let mut engine = SimulationEngine::new(config).unwrap();
//! engine.run(10);
//! assert_eq!(engine.current_tick(), TickId(10));
//! assert_eq!(engine.counts().total(), 32 * 32);
//! println!("{}", engine.telemetry());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `daisy-core` | `Patch`, albedo table, population counters, tick ids |
//! | [`space`] | `daisy-space` | Toroidal grid, neighbourhoods, fingerprints |
//! | [`propagator`] | `daisy-propagator` | `Stage` trait and `StepContext` |
//! | [`propagators`] | `daisy-propagators` | Climate and growth models, reference stages |
//! | [`engine`] | `daisy-engine` | Configuration and the simulation engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod render;

/// Core types (`daisy-core`).
pub use daisy_core as types;

/// Toroidal grid and neighbour lookup (`daisy-space`).
pub use daisy_space as space;

/// Stage trait and execution context (`daisy-propagator`).
///
/// Implement [`propagator::Stage`] to add a phase of your own.
pub use daisy_propagator as propagator;

/// Reference models and stages (`daisy-propagators`).
pub use daisy_propagators as propagators;

/// Configuration and the simulation engine (`daisy-engine`).
pub use daisy_engine as engine;

/// Common imports for typical Daisyworld usage.
pub mod prelude {
    pub use daisy_core::{AlbedoTable, Patch, PopulationCounts, TickId};
    pub use daisy_space::{Grid, SpaceError};
    pub use daisy_propagator::{Stage, StepContext};
    pub use daisy_propagators::{DeathRule, GrowthCurve, LuminositySchedule};
    pub use daisy_engine::{
        ConfigError, DaisyConfig, GenesisMix, SimulationEngine, StepMetrics, Telemetry,
    };
}
