//! Reproduction and death stage.
//!
//! Classic Daisyworld seeding and die-off under the single global
//! temperature. Growth probabilities are evaluated once per species per
//! tick; there is no local temperature. After the sweep the population
//! counters are rebuilt from the scratch grid.

use daisy_core::{Patch, PopulationCounts};
use daisy_propagator::{Stage, StepContext};
use serde::{Deserialize, Serialize};

use crate::growth::GrowthCurve;

/// When a daisy is at risk of dying and how likely that is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathRule {
    /// Growth probability at or below which a daisy is at risk.
    pub threshold: f64,
    /// Death probability for an at-risk daisy. Healthy daisies never die.
    pub chance: f64,
}

impl DeathRule {
    /// Death probability for a daisy whose species grows with `growth`.
    pub fn chance_for(&self, growth: f64) -> f64 {
        if growth <= self.threshold {
            self.chance
        } else {
            0.0
        }
    }
}

impl Default for DeathRule {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            chance: 0.3,
        }
    }
}

/// Seeds empty ground and kills stressed daisies.
///
/// For an empty cell one draw `r` decides: `r < black` seeds black,
/// `r < black + white` seeds white, otherwise the ground stays bare. Ties
/// therefore favour black. Each daisy draws once against its species'
/// death chance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReproductionDeath {
    black: GrowthCurve,
    white: GrowthCurve,
    death: DeathRule,
}

impl ReproductionDeath {
    /// Create the stage from species curves and a death rule.
    pub fn new(black: GrowthCurve, white: GrowthCurve, death: DeathRule) -> Self {
        Self {
            black,
            white,
            death,
        }
    }

    /// Black daisy growth curve.
    pub fn black(&self) -> &GrowthCurve {
        &self.black
    }

    /// White daisy growth curve.
    pub fn white(&self) -> &GrowthCurve {
        &self.white
    }

    /// Death rule.
    pub fn death(&self) -> &DeathRule {
        &self.death
    }
}

impl Default for ReproductionDeath {
    fn default() -> Self {
        Self::new(GrowthCurve::BLACK, GrowthCurve::WHITE, DeathRule::default())
    }
}

impl Stage for ReproductionDeath {
    fn name(&self) -> &str {
        "reproduction_death"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let current = ctx.current();
        let temperature = ctx.temperature();
        let black_p = self.black.probability(temperature);
        let white_p = self.white.probability(temperature);
        let black_death = self.death.chance_for(black_p);
        let white_death = self.death.chance_for(white_p);

        let (width, height) = current.shape();
        let mut counts = PopulationCounts::default();

        for x in 0..width as i32 {
            for y in 0..height as i32 {
                let here = current.get(x, y);
                let after = match here {
                    Patch::Empty => {
                        let r = ctx.draw();
                        if r < black_p {
                            ctx.tally_mut().black_seeded += 1;
                            Patch::BlackDaisy
                        } else if r < black_p + white_p {
                            ctx.tally_mut().white_seeded += 1;
                            Patch::WhiteDaisy
                        } else {
                            Patch::Empty
                        }
                    }
                    Patch::BlackDaisy | Patch::WhiteDaisy => {
                        let chance = if here == Patch::BlackDaisy {
                            black_death
                        } else {
                            white_death
                        };
                        if ctx.draw() < chance {
                            ctx.tally_mut().deaths += 1;
                            Patch::Empty
                        } else {
                            here
                        }
                    }
                };
                if after != here {
                    ctx.next().set(x, y, after);
                }
                counts.record(ctx.next().get(x, y));
            }
        }

        *ctx.counts_mut() = counts;
    }
}
