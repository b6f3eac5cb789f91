//! Reference models and stages for Daisyworld.
//!
//! Two pure models and two grid stages:
//!
//! - [`climate`]: planetary albedo, temperature, and the brightening sun.
//! - [`growth`]: the parabolic temperature-suitability curve per species.
//! - [`PollenConversion`]: daisies convert adjacent antagonists.
//! - [`ReproductionDeath`]: empty ground is seeded, stressed daisies die.
//!
//! # Pipeline order (each tick)
//!
//! 1. [`PollenConversion`] reads the stage-start grid and writes conversions.
//! 2. [`ReproductionDeath`] reads the pollen output, writes births and
//!    deaths, and recomputes the population counters.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod climate;
pub mod growth;
pub mod pollen;
pub mod reproduction;

pub use climate::{ClimateModel, LuminositySchedule, ABSOLUTE_ZERO};
pub use growth::{growth_probability, GrowthCurve};
pub use pollen::PollenConversion;
pub use reproduction::{DeathRule, ReproductionDeath};
