//! Population counters derived from grid state.

use crate::patch::{AlbedoTable, Patch};
use serde::{Deserialize, Serialize};

/// Number of cells holding each occupant kind.
///
/// Counters are recomputed from the grid at the end of every tick rather
/// than patched incrementally, so they are a pure function of grid state.
/// After a completed tick `black + white + empty` equals the grid area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationCounts {
    /// Cells holding a black daisy.
    pub black: u64,
    /// Cells holding a white daisy.
    pub white: u64,
    /// Bare cells.
    pub empty: u64,
}

impl PopulationCounts {
    /// All-empty counters for a grid of `area` cells.
    pub fn barren(area: u64) -> Self {
        Self {
            black: 0,
            white: 0,
            empty: area,
        }
    }

    /// Add one cell of the given kind.
    pub fn record(&mut self, patch: Patch) {
        match patch {
            Patch::Empty => self.empty += 1,
            Patch::BlackDaisy => self.black += 1,
            Patch::WhiteDaisy => self.white += 1,
        }
    }

    /// Count for a single kind.
    pub fn of(&self, patch: Patch) -> u64 {
        match patch {
            Patch::Empty => self.empty,
            Patch::BlackDaisy => self.black,
            Patch::WhiteDaisy => self.white,
        }
    }

    /// Sum over all kinds.
    pub fn total(&self) -> u64 {
        self.black + self.white + self.empty
    }

    /// Number of cells holding a daisy of either colour.
    pub fn daisies(&self) -> u64 {
        self.black + self.white
    }

    /// Area-weighted mean reflectivity.
    ///
    /// Returns `NaN` for zero-area counters; callers hold a validated
    /// non-empty grid.
    pub fn average_albedo(&self, albedo: &AlbedoTable) -> f64 {
        let reflected = self.white as f64 * albedo.white
            + self.black as f64 * albedo.black
            + self.empty as f64 * albedo.empty;
        reflected / self.total() as f64
    }
}

impl FromIterator<Patch> for PopulationCounts {
    fn from_iter<I: IntoIterator<Item = Patch>>(iter: I) -> Self {
        let mut counts = Self::default();
        for patch in iter {
            counts.record(patch);
        }
        counts
    }
}
