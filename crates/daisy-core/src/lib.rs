//! Core types for the Daisyworld simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell occupant kind ([`Patch`]), the reflectivity table mapping
//! each kind to an albedo ([`AlbedoTable`]), the population counters
//! recomputed after every tick ([`PopulationCounts`]), and the
//! monotonic tick counter ([`TickId`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod patch;
pub mod population;

pub use id::TickId;
pub use patch::{AlbedoTable, Patch};
pub use population::PopulationCounts;
