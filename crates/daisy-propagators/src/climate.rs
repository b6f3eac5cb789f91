//! Planetary climate: albedo, temperature, and solar forcing.
//!
//! All functions here are pure. The engine owns the luminosity and the
//! counters and passes them in; nothing is cached between ticks.

use daisy_core::{AlbedoTable, PopulationCounts};
use serde::{Deserialize, Serialize};

/// Temperature reported when no energy is absorbed.
pub const ABSOLUTE_ZERO: f64 = -273.0;

/// Area-weighted mean albedo of the planet.
pub fn average_albedo(counts: &PopulationCounts, albedo: &AlbedoTable) -> f64 {
    counts.average_albedo(albedo)
}

/// Planetary temperature in approximate degrees Celsius.
///
/// `absorbed = luminosity * (1 - average_albedo)`; for positive absorbed
/// energy the result is `absorbed^0.25 * 50 - 25`, otherwise
/// [`ABSOLUTE_ZERO`] (the fractional power is undefined there).
pub fn temperature(luminosity: f64, average_albedo: f64) -> f64 {
    let absorbed = luminosity * (1.0 - average_albedo);
    if absorbed > 0.0 {
        absorbed.powf(0.25) * 50.0 - 25.0
    } else {
        ABSOLUTE_ZERO
    }
}

/// Brighten the sun by one step, saturating at `max`.
pub fn advance_luminosity(current: f64, increase: f64, max: f64) -> f64 {
    (current + increase).min(max)
}

/// Solar forcing schedule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuminositySchedule {
    /// Luminosity at initialization.
    pub start: f64,
    /// Saturation ceiling.
    pub max: f64,
    /// Added once per tick.
    pub increase: f64,
}

impl LuminositySchedule {
    /// Luminosity for the tick after one at `current`.
    pub fn advance(&self, current: f64) -> f64 {
        advance_luminosity(current, self.increase, self.max)
    }
}

impl Default for LuminositySchedule {
    fn default() -> Self {
        Self {
            start: 0.8,
            max: 1.6,
            increase: 0.0001,
        }
    }
}

/// Albedo table plus solar schedule: everything needed to turn population
/// counters into a temperature.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClimateModel {
    /// Reflectivity per occupant kind.
    pub albedo: AlbedoTable,
    /// Solar forcing.
    pub luminosity: LuminositySchedule,
}

impl ClimateModel {
    /// Create a climate model.
    pub fn new(albedo: AlbedoTable, luminosity: LuminositySchedule) -> Self {
        Self { albedo, luminosity }
    }

    /// Temperature of a planet with `counts` under `luminosity`.
    pub fn temperature(&self, counts: &PopulationCounts, luminosity: f64) -> f64 {
        temperature(luminosity, average_albedo(counts, &self.albedo))
    }

    /// See [`LuminositySchedule::advance`].
    pub fn advance_luminosity(&self, current: f64) -> f64 {
        self.luminosity.advance(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn barren_planet_at_start_luminosity() {
        let t = temperature(0.8, 0.4);
        let expected = (0.8f64 * 0.6).powf(0.25) * 50.0 - 25.0;
        assert_eq!(t, expected);
        assert!((t - 16.62).abs() < 0.01, "got {t}");
    }

    #[test]
    fn fully_reflective_planet_is_absolute_zero() {
        assert_eq!(temperature(1.0, 1.0), -273.0);
        assert_eq!(temperature(0.0, 0.4), ABSOLUTE_ZERO);
        assert_eq!(temperature(1.2, 1.5), ABSOLUTE_ZERO);
    }

    #[test]
    fn advance_saturates_at_max() {
        assert_eq!(advance_luminosity(1.0, 0.25, 2.0), 1.25);
        assert_eq!(advance_luminosity(1.9, 0.25, 2.0), 2.0);
        assert_eq!(advance_luminosity(2.0, 0.25, 2.0), 2.0);
    }

    #[test]
    fn schedule_defaults() {
        let s = LuminositySchedule::default();
        assert_eq!((s.start, s.max, s.increase), (0.8, 1.6, 0.0001));
        assert_eq!(s.advance(1.6), 1.6);
    }

    #[test]
    fn model_uses_its_albedo_table() {
        let counts = PopulationCounts {
            black: 10,
            white: 0,
            empty: 0,
        };
        let dark = ClimateModel::default();
        let pale = ClimateModel::new(
            AlbedoTable {
                black: 0.9,
                ..AlbedoTable::default()
            },
            LuminositySchedule::default(),
        );
        assert!(dark.temperature(&counts, 1.0) > pale.temperature(&counts, 1.0));
    }

    proptest! {
        #[test]
        fn luminosity_never_decreases_or_exceeds_max(
            start in 0.0f64..2.0,
            increase in 0.0f64..0.5,
            steps in 1usize..200,
        ) {
            let max = 2.0;
            let mut lum = start;
            for _ in 0..steps {
                let next = advance_luminosity(lum, increase, max);
                prop_assert!(next >= lum);
                prop_assert!(next <= max);
                lum = next;
            }
        }

        #[test]
        fn darker_planet_is_warmer(lum in 0.1f64..2.0, a in 0.0f64..0.95, delta in 0.01f64..0.05) {
            prop_assert!(temperature(lum, a) > temperature(lum, a + delta));
        }
    }
}
