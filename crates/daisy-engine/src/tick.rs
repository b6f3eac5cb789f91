//! Simulation engine: the single-threaded Daisyworld loop.
//!
//! [`SimulationEngine`] owns the live grid, a scratch grid of the same
//! shape, the population counters, the climate state and a seeded
//! [`ChaCha8Rng`]. Each [`step`](SimulationEngine::step) brightens the sun,
//! derives the global temperature from the previous tick's counters, then
//! runs the stage pipeline. Every stage reads the live grid and writes the
//! scratch grid; the two are swapped once the stage returns.

use std::time::Instant;

use daisy_core::{Patch, PopulationCounts, TickId};
use daisy_propagator::{ClimateReading, Stage, StageTally, StepContext};
use daisy_propagators::{ClimateModel, PollenConversion, ReproductionDeath};
use daisy_space::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, DaisyConfig};
use crate::metrics::{StepMetrics, Telemetry};

// ── SimulationEngine ─────────────────────────────────────────────

/// Owns all simulation state and advances it one tick at a time.
///
/// Queries between ticks always observe a fully completed tick: `step()`
/// takes `&mut self`, so no reader can see a half-written grid.
pub struct SimulationEngine {
    config: DaisyConfig,
    climate: ClimateModel,
    stages: Vec<Box<dyn Stage>>,
    grid: Grid,
    scratch: Grid,
    rng: ChaCha8Rng,
    counts: PopulationCounts,
    luminosity: f64,
    temperature: f64,
    current_tick: TickId,
    last_metrics: StepMetrics,
}

impl SimulationEngine {
    /// Build an engine and populate the planet by random genesis.
    ///
    /// Each cell draws once, in column-major order: below
    /// `genesis.black` it starts black, below `genesis.black +
    /// genesis.white` white, otherwise empty.
    pub fn new(config: DaisyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let (grid, counts) = genesis(&config, &mut rng)?;
        Ok(Self::assemble(config, grid, counts, rng))
    }

    /// Build an engine around an explicit starting grid.
    ///
    /// The grid must match the configured dimensions. The random source is
    /// still seeded from `config.seed`; no genesis draws are taken.
    pub fn from_grid(config: DaisyConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let expected = (config.width, config.height);
        if grid.shape() != expected {
            return Err(ConfigError::GridShapeMismatch {
                expected,
                actual: grid.shape(),
            });
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let counts = grid.population();
        Ok(Self::assemble(config, grid, counts, rng))
    }

    /// Discard all state and start over from `config`.
    ///
    /// On error the engine is left exactly as it was.
    pub fn initialize(&mut self, config: DaisyConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Discard all state and start over from `config` and `grid`.
    ///
    /// On error the engine is left exactly as it was.
    pub fn initialize_with_grid(
        &mut self,
        config: DaisyConfig,
        grid: Grid,
    ) -> Result<(), ConfigError> {
        *self = Self::from_grid(config, grid)?;
        Ok(())
    }

    fn assemble(
        config: DaisyConfig,
        grid: Grid,
        counts: PopulationCounts,
        rng: ChaCha8Rng,
    ) -> Self {
        let climate = ClimateModel::new(config.albedo, config.luminosity);
        let luminosity = config.luminosity.start;
        let temperature = climate.temperature(&counts, luminosity);
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(PollenConversion::new(config.pollen_conversion_chance)),
            Box::new(ReproductionDeath::new(config.black, config.white, config.death)),
        ];
        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            black = counts.black,
            white = counts.white,
            empty = counts.empty,
            temperature,
            "daisyworld initialized"
        );
        let scratch = grid.snapshot();
        debug_assert_eq!(scratch.shape(), grid.shape());
        Self {
            scratch,
            config,
            climate,
            stages,
            grid,
            rng,
            counts,
            luminosity,
            temperature,
            current_tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// 1. Luminosity advances by its increment, saturating at the maximum.
    /// 2. Temperature is computed from the counters left by the previous
    ///    tick under the new luminosity.
    /// 3. Pollen conversion, then reproduction and death, each run against
    ///    a frozen copy of the grid and publish their result wholesale.
    ///
    /// # Panics
    ///
    /// Panics if the population counters fail to cover the grid after the
    /// pipeline; that is a stage bug, not a recoverable condition.
    pub fn step(&mut self) {
        let tick_start = Instant::now();
        let tick_id = self.current_tick.next();

        self.luminosity = self.climate.advance_luminosity(self.luminosity);
        self.temperature = self.climate.temperature(&self.counts, self.luminosity);
        let climate = ClimateReading {
            luminosity: self.luminosity,
            temperature: self.temperature,
        };

        let mut tally = StageTally::default();
        let mut stage_us = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            self.scratch.clone_from(&self.grid);
            {
                let mut ctx = StepContext::new(
                    &self.grid,
                    &mut self.scratch,
                    &mut self.rng,
                    &mut self.counts,
                    &mut tally,
                    climate,
                    tick_id,
                );
                stage.step(&mut ctx);
            }
            std::mem::swap(&mut self.grid, &mut self.scratch);

            let us = stage_start.elapsed().as_micros() as u64;
            trace!(tick = tick_id.0, stage = stage.name(), us, "stage complete");
            stage_us.push((stage.name().to_string(), us));
        }

        assert_eq!(
            self.counts.total(),
            self.grid.area() as u64,
            "population counters {:?} do not cover a {}x{} grid after tick {}",
            self.counts,
            self.grid.width(),
            self.grid.height(),
            tick_id
        );
        debug_assert_eq!(self.counts, self.grid.population());

        self.current_tick = tick_id;
        let mut metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            stage_us,
            ..StepMetrics::default()
        };
        metrics.record_tally(&tally);

        debug!(
            tick = tick_id.0,
            luminosity = self.luminosity,
            temperature = self.temperature,
            black = self.counts.black,
            white = self.counts.white,
            empty = self.counts.empty,
            conversions = metrics.pollen_conversions,
            seeded = metrics.black_seeded + metrics.white_seeded,
            deaths = metrics.deaths,
            "tick complete"
        );
        self.last_metrics = metrics;
    }

    /// Run `ticks` consecutive steps.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the live grid for renderers.
    pub fn snapshot(&self) -> Grid {
        self.grid.snapshot()
    }

    /// Population counters after the last completed tick.
    pub fn counts(&self) -> PopulationCounts {
        self.counts
    }

    /// Global temperature of the last completed tick.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Solar luminosity of the last completed tick.
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    /// Number of completed ticks since initialization.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Scalar telemetry for display collaborators.
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            tick: self.current_tick,
            temperature: self.temperature,
            luminosity: self.luminosity,
            counts: self.counts,
        }
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Configuration the engine was built from.
    pub fn config(&self) -> &DaisyConfig {
        &self.config
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

/// Populate a fresh grid. Empty ground is counted by subtraction so the
/// counters cover the grid exactly.
fn genesis(
    config: &DaisyConfig,
    rng: &mut ChaCha8Rng,
) -> Result<(Grid, PopulationCounts), ConfigError> {
    let black_p = config.genesis.black;
    let white_p = config.genesis.white;
    let mut black = 0u64;
    let mut white = 0u64;
    let grid = Grid::from_fn(config.width, config.height, |_, _| {
        let r: f64 = rng.gen();
        if r < black_p {
            black += 1;
            Patch::BlackDaisy
        } else if r < black_p + white_p {
            white += 1;
            Patch::WhiteDaisy
        } else {
            Patch::Empty
        }
    })?;
    let counts = PopulationCounts {
        black,
        white,
        empty: config.area() - black - white,
    };
    Ok((grid, counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daisy_test_utils::grid_with;

    fn small_config(seed: u64) -> DaisyConfig {
        DaisyConfig {
            width: 24,
            height: 18,
            seed,
            ..DaisyConfig::default()
        }
    }

    // ── Initialization ──────────────────────────────────────────

    #[test]
    fn genesis_counts_cover_the_grid() {
        let engine = SimulationEngine::new(small_config(1)).unwrap();
        let counts = engine.counts();
        assert_eq!(counts.total(), 24 * 18);
        assert_eq!(counts, engine.grid().population());
        assert_eq!(engine.current_tick(), TickId(0));
        assert_eq!(engine.luminosity(), 0.8);
    }

    #[test]
    fn initial_temperature_reflects_genesis() {
        let engine = SimulationEngine::new(small_config(2)).unwrap();
        let expected = ClimateModel::default().temperature(&engine.counts(), 0.8);
        assert_eq!(engine.temperature(), expected);
        assert!(engine.temperature() > 0.0);
    }

    #[test]
    fn genesis_respects_zero_probabilities() {
        let mut config = small_config(3);
        config.genesis.black = 0.0;
        config.genesis.white = 0.0;
        let engine = SimulationEngine::new(config).unwrap();
        assert_eq!(engine.counts(), PopulationCounts::barren(24 * 18));
    }

    #[test]
    fn genesis_can_fill_the_planet() {
        let mut config = small_config(4);
        config.genesis.black = 1.0;
        config.genesis.white = 0.0;
        let engine = SimulationEngine::new(config).unwrap();
        assert_eq!(engine.counts().black, 24 * 18);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = small_config(5);
        config.genesis.black = 0.9;
        config.genesis.white = 0.9;
        assert!(matches!(
            SimulationEngine::new(config),
            Err(ConfigError::GenesisOverflow { .. })
        ));
    }

    #[test]
    fn oversized_planet_is_rejected_before_allocation() {
        let config = DaisyConfig {
            width: i32::MAX as u32,
            height: i32::MAX as u32,
            ..DaisyConfig::default()
        };
        assert!(matches!(
            SimulationEngine::new(config),
            Err(ConfigError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn from_grid_rejects_mismatched_shape() {
        let grid = Grid::new(5, 5).unwrap();
        let result = SimulationEngine::from_grid(small_config(6), grid);
        assert_eq!(
            result.err(),
            Some(ConfigError::GridShapeMismatch {
                expected: (24, 18),
                actual: (5, 5)
            })
        );
    }

    #[test]
    fn from_grid_uses_the_given_cells() {
        let config = DaisyConfig {
            width: 6,
            height: 6,
            ..DaisyConfig::default()
        };
        let grid = grid_with(6, 6, &[(1, 2, Patch::WhiteDaisy)]);
        let engine = SimulationEngine::from_grid(config, grid.clone()).unwrap();
        assert_eq!(engine.grid(), &grid);
        assert_eq!(engine.counts().white, 1);
        assert_eq!(engine.counts().empty, 35);
    }

    #[test]
    fn pipeline_order_is_pollen_then_reproduction() {
        let engine = SimulationEngine::new(small_config(7)).unwrap();
        assert_eq!(
            engine.stage_names(),
            vec!["pollen_conversion", "reproduction_death"]
        );
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn step_advances_tick_and_luminosity() {
        let mut engine = SimulationEngine::new(small_config(8)).unwrap();
        engine.step();
        assert_eq!(engine.current_tick(), TickId(1));
        assert!((engine.luminosity() - 0.8001).abs() < 1e-12);
        engine.run(9);
        assert_eq!(engine.current_tick(), TickId(10));
        assert!((engine.luminosity() - 0.801).abs() < 1e-9);
    }

    #[test]
    fn luminosity_saturates() {
        let mut config = small_config(9);
        config.luminosity.start = 1.59;
        config.luminosity.increase = 0.004;
        let mut engine = SimulationEngine::new(config).unwrap();
        engine.run(5);
        assert_eq!(engine.luminosity(), 1.6);
    }

    #[test]
    fn temperature_uses_previous_counters() {
        let mut engine = SimulationEngine::new(small_config(10)).unwrap();
        let before = engine.counts();
        engine.step();
        let expected = ClimateModel::default().temperature(&before, engine.luminosity());
        assert_eq!(engine.temperature(), expected);
    }

    #[test]
    fn metrics_populated_after_step() {
        let mut engine = SimulationEngine::new(small_config(11)).unwrap();
        assert!(engine.last_metrics().stage_us.is_empty());
        engine.step();
        let m = engine.last_metrics();
        assert_eq!(m.stage_us.len(), 2);
        assert_eq!(m.stage_us[0].0, "pollen_conversion");
        assert_eq!(m.stage_us[1].0, "reproduction_death");
    }

    #[test]
    fn snapshot_is_detached_from_the_engine() {
        let mut engine = SimulationEngine::new(small_config(12)).unwrap();
        let snap = engine.snapshot();
        let print = snap.fingerprint();
        engine.run(20);
        assert_eq!(snap.fingerprint(), print);
    }

    #[test]
    fn scratch_tracks_the_live_grid_shape() {
        let mut engine = SimulationEngine::new(small_config(17)).unwrap();
        engine.run(3);
        assert_eq!(engine.scratch.shape(), engine.grid().shape());
        assert_eq!(engine.scratch.area(), engine.grid().area());
    }

    #[test]
    fn telemetry_mirrors_queries() {
        let mut engine = SimulationEngine::new(small_config(13)).unwrap();
        engine.run(3);
        let t = engine.telemetry();
        assert_eq!(t.tick, engine.current_tick());
        assert_eq!(t.temperature, engine.temperature());
        assert_eq!(t.luminosity, engine.luminosity());
        assert_eq!(t.counts, engine.counts());
    }

    // ── Reset ───────────────────────────────────────────────────

    #[test]
    fn initialize_is_a_full_reset() {
        let mut engine = SimulationEngine::new(small_config(14)).unwrap();
        let fresh_print = engine.grid().fingerprint();
        let fresh_counts = engine.counts();
        engine.run(25);
        engine.initialize(small_config(14)).unwrap();
        assert_eq!(engine.current_tick(), TickId(0));
        assert_eq!(engine.grid().fingerprint(), fresh_print);
        assert_eq!(engine.counts(), fresh_counts);
        assert_eq!(engine.luminosity(), 0.8);
        assert_eq!(engine.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn failed_initialize_keeps_state() {
        let mut engine = SimulationEngine::new(small_config(15)).unwrap();
        engine.run(4);
        let print = engine.grid().fingerprint();
        let counts = engine.counts();

        let mut bad = small_config(15);
        bad.width = 0;
        assert!(engine.initialize(bad).is_err());
        assert_eq!(engine.current_tick(), TickId(4));
        assert_eq!(engine.grid().fingerprint(), print);
        assert_eq!(engine.counts(), counts);
        assert_eq!(engine.config().width, 24);
    }

    #[test]
    fn initialize_with_grid_replaces_state() {
        let mut engine = SimulationEngine::new(small_config(16)).unwrap();
        engine.run(2);
        let grid = Grid::filled(24, 18, Patch::WhiteDaisy).unwrap();
        engine.initialize_with_grid(small_config(16), grid).unwrap();
        assert_eq!(engine.counts().white, 24 * 18);
        assert_eq!(engine.current_tick(), TickId(0));
    }
}
