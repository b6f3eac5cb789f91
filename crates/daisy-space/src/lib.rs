//! Spatial storage for Daisyworld simulations.
//!
//! This crate defines [`Grid`], a fixed-size toroidal lattice of
//! [`Patch`](daisy_core::Patch) cells with 8-connected neighbourhoods.
//! Every coordinate is wrapped before use, so addressing is total: no
//! lookup can fail once a grid has been constructed.
//!
//! Grids are plain owned values. Stages read one grid and write another,
//! and the engine swaps them afterwards (double buffering); see
//! [`Grid::copy_from`] and [`Grid::snapshot`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod torus;

pub use error::SpaceError;
pub use torus::{validate_shape, wrap, Grid, OFFSETS_8};
