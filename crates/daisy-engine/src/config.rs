//! Engine configuration, validation, and error types.
//!
//! [`DaisyConfig`] is the input for constructing a
//! [`SimulationEngine`](crate::SimulationEngine). Every field has a default
//! reproducing the classic model, and `#[serde(default)]` lets a TOML file
//! override only the values it names. [`validate()`](DaisyConfig::validate)
//! checks every parameter before the engine touches its state.

use daisy_core::AlbedoTable;
use daisy_propagators::{DeathRule, GrowthCurve, LuminositySchedule, PollenConversion};
use daisy_space::{validate_shape, SpaceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── GenesisMix ─────────────────────────────────────────────────────

/// Probabilities used to populate the planet at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisMix {
    /// Chance a cell starts as a black daisy.
    pub black: f64,
    /// Chance a cell starts as a white daisy.
    pub white: f64,
}

impl GenesisMix {
    /// Chance a cell starts empty.
    pub fn empty(&self) -> f64 {
        1.0 - self.black - self.white
    }
}

impl Default for GenesisMix {
    fn default() -> Self {
        Self {
            black: 0.2,
            white: 0.2,
        }
    }
}

// ── DaisyConfig ────────────────────────────────────────────────────

/// Complete parameter set for one Daisyworld run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaisyConfig {
    /// Grid width in cells. Default: 100.
    pub width: u32,
    /// Grid height in cells. Default: 100.
    pub height: u32,
    /// Seed for the engine's random source. Default: 0.
    pub seed: u64,
    /// Chance a daisy converts one adjacent antagonist per tick. Default: 0.05.
    pub pollen_conversion_chance: f64,
    /// Reflectivity per occupant kind.
    pub albedo: AlbedoTable,
    /// Solar forcing schedule.
    pub luminosity: LuminositySchedule,
    /// Black daisy growth curve.
    pub black: GrowthCurve,
    /// White daisy growth curve.
    pub white: GrowthCurve,
    /// Death threshold and chance.
    pub death: DeathRule,
    /// Initial population mix.
    pub genesis: GenesisMix,
}

impl Default for DaisyConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: 0,
            pollen_conversion_chance: PollenConversion::DEFAULT_CHANCE,
            albedo: AlbedoTable::default(),
            luminosity: LuminositySchedule::default(),
            black: GrowthCurve::BLACK,
            white: GrowthCurve::WHITE,
            death: DeathRule::default(),
            genesis: GenesisMix::default(),
        }
    }
}

impl DaisyConfig {
    /// Largest accepted `width * height`.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Parse a TOML document and validate the result.
    ///
    /// Keys missing from the document keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DaisyConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Number of cells on the configured grid.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check every parameter.
    ///
    /// Returns the first violation found. Grid shape is checked first so a
    /// degenerate planet is reported before its physics.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_shape(self.width, self.height)?;
        if self.area() > Self::MAX_CELLS {
            return Err(ConfigError::CellCountOverflow { value: self.area() });
        }

        check_probability("albedo.empty", self.albedo.empty)?;
        check_probability("albedo.black", self.albedo.black)?;
        check_probability("albedo.white", self.albedo.white)?;

        let lum = &self.luminosity;
        if !(lum.start.is_finite() && lum.max.is_finite() && lum.increase.is_finite()) {
            return Err(ConfigError::InvalidLuminosity {
                reason: format!(
                    "values must be finite (start={}, max={}, increase={})",
                    lum.start, lum.max, lum.increase
                ),
            });
        }
        if lum.start < 0.0 {
            return Err(ConfigError::InvalidLuminosity {
                reason: format!("start must be >= 0, got {}", lum.start),
            });
        }
        if lum.increase < 0.0 {
            return Err(ConfigError::InvalidLuminosity {
                reason: format!("increase must be >= 0, got {}", lum.increase),
            });
        }
        if lum.max < lum.start {
            return Err(ConfigError::InvalidLuminosity {
                reason: format!("max ({}) must be >= start ({})", lum.max, lum.start),
            });
        }

        check_probability("pollen_conversion_chance", self.pollen_conversion_chance)?;
        check_curve("black", &self.black)?;
        check_curve("white", &self.white)?;
        check_probability("death.threshold", self.death.threshold)?;
        check_probability("death.chance", self.death.chance)?;

        check_probability("genesis.black", self.genesis.black)?;
        check_probability("genesis.white", self.genesis.white)?;
        if self.genesis.black + self.genesis.white > 1.0 {
            return Err(ConfigError::GenesisOverflow {
                black: self.genesis.black,
                white: self.genesis.white,
            });
        }

        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

fn check_curve(species: &'static str, curve: &GrowthCurve) -> Result<(), ConfigError> {
    let finite =
        curve.optimal.is_finite() && curve.min_temp.is_finite() && curve.max_temp.is_finite();
    if finite && curve.min_temp < curve.max_temp {
        Ok(())
    } else {
        Err(ConfigError::InvalidGrowthCurve {
            species,
            optimal: curve.optimal,
            min: curve.min_temp,
            max: curve.max_temp,
        })
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`DaisyConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Grid dimensions are unusable.
    #[error("invalid grid: {0}")]
    Space(#[from] SpaceError),
    /// A probability-like parameter is NaN or outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Dotted parameter path.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A growth curve has non-finite values or an empty range.
    #[error("{species} growth curve needs finite values and min < max (optimal={optimal}, min={min}, max={max})")]
    InvalidGrowthCurve {
        /// `"black"` or `"white"`.
        species: &'static str,
        /// Configured optimum.
        optimal: f64,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// Luminosity schedule is unusable.
    #[error("invalid luminosity schedule: {reason}")]
    InvalidLuminosity {
        /// Which constraint failed.
        reason: String,
    },
    /// `width * height` exceeds [`DaisyConfig::MAX_CELLS`].
    #[error("grid of {value} cells exceeds the maximum of {max}", max = DaisyConfig::MAX_CELLS)]
    CellCountOverflow {
        /// The requested cell count.
        value: u64,
    },
    /// Genesis probabilities leave no valid share for empty ground.
    #[error("genesis probabilities sum above 1 (black={black}, white={white})")]
    GenesisOverflow {
        /// Configured black share.
        black: f64,
        /// Configured white share.
        white: f64,
    },
    /// A seed grid does not match the configured dimensions.
    #[error("seed grid is {actual:?} but the configuration expects {expected:?}")]
    GridShapeMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// Seed grid `(width, height)`.
        actual: (u32, u32),
    },
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}
