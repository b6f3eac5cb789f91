//! Per-tick metrics and the scalar telemetry read by display collaborators.

use std::fmt;

use daisy_core::{PopulationCounts, TickId};
use daisy_propagator::StageTally;

/// Timing and transition counts collected during a single tick.
///
/// All durations are in microseconds. The engine replaces this value at
/// the end of every `step()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Per-stage execution times: `(name, microseconds)`, in pipeline order.
    pub stage_us: Vec<(String, u64)>,
    /// Successful pollen conversions.
    pub pollen_conversions: u64,
    /// Empty cells seeded with a black daisy.
    pub black_seeded: u64,
    /// Empty cells seeded with a white daisy.
    pub white_seeded: u64,
    /// Daisies that died.
    pub deaths: u64,
}

impl StepMetrics {
    pub(crate) fn record_tally(&mut self, tally: &StageTally) {
        self.pollen_conversions = tally.pollen_conversions;
        self.black_seeded = tally.black_seeded;
        self.white_seeded = tally.white_seeded;
        self.deaths = tally.deaths;
    }
}

/// Scalar state of the planet after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Telemetry {
    /// Completed tick count.
    pub tick: TickId,
    /// Global temperature in degrees Celsius.
    pub temperature: f64,
    /// Solar luminosity.
    pub luminosity: f64,
    /// Population counters.
    pub counts: PopulationCounts,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tick: {} | Global Temp: {:.2} °C | Luminosity: {:.2} | Black Daisies: {} | White Daisies: {}",
            self.tick, self.temperature, self.luminosity, self.counts.black, self.counts.white
        )
    }
}
