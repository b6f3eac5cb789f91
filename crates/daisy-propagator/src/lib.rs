//! Stage trait and step context for Daisyworld simulations.
//!
//! A tick is a fixed sequence of [`Stage`]s. Each stage reads the grid as
//! it stood when the stage began and writes a scratch grid through its
//! [`StepContext`]; the engine swaps the two afterwards, so every cell
//! update within a stage is simultaneous.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod stage;

pub use context::{ClimateReading, StageTally, StepContext};
pub use stage::Stage;
