use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{SimulationConfig, StepStrategy};
use crate::domain::{Grid, RuleGenerator, RuleSet};

/// What a tick did to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new generation was computed and something is still alive
    Advanced,
    /// Everything died, so the grid was reseeded
    Reset,
}

/// Counters the renderer reads alongside the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    /// Drives the zone hue drift; back to 0 on every reset
    pub hue_tick: u64,
    /// Density drawn on the latest tick, used at the next reseed
    pub density: f64,
    /// Rules that produced the current generation
    pub rules: RuleSet,
    /// Generations since the last reset
    pub generation: u64,
    /// Resets since start, extinction and resize alike
    pub resets: u64,
}

/// Simulation orchestrates the automaton.
/// Every tick draws brand new rules, advances the grid once and reseeds
/// when nothing is left alive.
pub struct Simulation {
    config: SimulationConfig,
    generator: RuleGenerator,
    grid: Grid,
    state: SimulationState,
    strategy: StepStrategy,
    rng: StdRng,
}

impl Simulation {
    /// Create a seeded simulation with an OS-seeded random source
    pub fn new(config: SimulationConfig, width: usize, height: usize) -> Self {
        Self::with_rng(config, width, height, StdRng::from_os_rng())
    }

    /// Create a seeded simulation driven by the given random source
    pub fn with_rng(config: SimulationConfig, width: usize, height: usize, rng: StdRng) -> Self {
        let generator = config.rule_generator();
        let grid = Grid::new(width, height, config.base_max_age, config.fade_frames);
        let strategy = StepStrategy::for_cell_count(width * height, config.parallel_threshold);
        let state = SimulationState {
            hue_tick: 0,
            density: config.initial_density,
            rules: RuleSet::conway(),
            generation: 0,
            resets: 0,
        };
        let mut sim = Self { config, generator, grid, state, strategy, rng };
        sim.reseed();
        sim
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    /// Run one generation: new rules, step, extinction check
    pub fn tick(&mut self) -> TickOutcome {
        let draw = self.generator.generate(&mut self.rng);
        self.state.rules = draw.rules;
        self.state.density = draw.density;
        debug!("{:?} rules {} (density {:.2})", draw.mode, draw.rules, draw.density);

        match self.strategy {
            StepStrategy::Serial => self.grid.step(&draw.rules),
            StepStrategy::Parallel => self.grid.step_parallel(&draw.rules),
        }
        self.state.generation += 1;
        self.state.hue_tick += 1;

        if self.grid.is_extinct() {
            info!(
                "extinction after {} generations, reseeding at density {:.2}",
                self.state.generation, self.state.density
            );
            self.reset();
            return TickOutcome::Reset;
        }
        TickOutcome::Advanced
    }

    /// Reseed at the latest density, keeping the dimensions
    pub fn reset(&mut self) {
        self.state.resets += 1;
        self.reseed();
    }

    /// Rebuild the grid for new dimensions and reseed it
    pub fn resize(&mut self, width: usize, height: usize) {
        self.grid = Grid::new(width, height, self.config.base_max_age, self.config.fade_frames);
        self.strategy = StepStrategy::for_cell_count(width * height, self.config.parallel_threshold);
        info!("resized grid to {width}x{height}, {} steps", self.strategy.name());
        self.reset();
    }

    fn reseed(&mut self) {
        self.state.hue_tick = 0;
        self.state.generation = 0;
        self.grid.seed(self.state.density, &mut self.rng);
        debug!(
            "seeded {} live cells at density {:.2}",
            self.grid.live_count(),
            self.state.density
        );
    }
}
