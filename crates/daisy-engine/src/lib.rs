//! Simulation engine orchestrating Daisyworld.
//!
//! [`SimulationEngine`] owns the grid, the climate state and the seeded
//! random source, and runs the stage pipeline once per
//! [`step`](SimulationEngine::step). [`DaisyConfig`] carries every tunable
//! constant and is validated before any engine state is touched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod tick;

pub use config::{ConfigError, DaisyConfig, GenesisMix};
pub use metrics::{StepMetrics, Telemetry};
pub use tick::SimulationEngine;
