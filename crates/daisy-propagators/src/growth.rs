//! Temperature suitability curve.
//!
//! Growth probability is a downward parabola over the survivable range:
//! `1 - k * (temp - optimal)^2` with `k = 4 / (max - min)^2`, clamped at 0
//! and zero outside `[min, max]`. The curve reaches 0 at both range ends
//! only when `optimal` is the midpoint; an off-centre optimum (as for both
//! built-in species) leaves a step down to 0 at the nearer boundary.

use serde::{Deserialize, Serialize};

/// Probability that a species grows at `temp`.
pub fn growth_probability(temp: f64, optimal: f64, min_temp: f64, max_temp: f64) -> f64 {
    if temp < min_temp || temp > max_temp {
        return 0.0;
    }
    let range = max_temp - min_temp;
    let k = 4.0 / (range * range);
    let d = temp - optimal;
    (1.0 - k * (d * d)).max(0.0)
}

/// Suitability parameters for one species.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// Temperature of peak growth.
    pub optimal: f64,
    /// Coldest survivable temperature.
    pub min_temp: f64,
    /// Hottest survivable temperature.
    pub max_temp: f64,
}

impl GrowthCurve {
    /// Black daisies prefer cool planets.
    pub const BLACK: GrowthCurve = GrowthCurve {
        optimal: 10.0,
        min_temp: 5.0,
        max_temp: 40.0,
    };

    /// White daisies prefer warm planets.
    pub const WHITE: GrowthCurve = GrowthCurve {
        optimal: 30.0,
        min_temp: 5.0,
        max_temp: 40.0,
    };

    /// Growth probability at `temp`.
    pub fn probability(&self, temp: f64) -> f64 {
        growth_probability(temp, self.optimal, self.min_temp, self.max_temp)
    }
}
