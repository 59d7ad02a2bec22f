//! Tuning values for the simulation.
//!
//! Everything the automaton needs is generated internally; this struct is
//! the one place the built-in constants live.

use std::ops::Range;
use std::time::Duration;

use crate::domain::{ConfigError, RuleGenerator};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Cell edge in screen pixels
    pub cell_size: f32,
    /// Lifespan outside the fast-aging zone
    pub base_max_age: u32,
    /// Generations a cell takes to fade fully in or out
    pub fade_frames: u8,
    /// Time between generations
    pub tick_interval: Duration,
    /// Chance a draw uses the Life-like weighted pools
    pub life_like_probability: f64,
    /// Range the reseed density is drawn from each tick
    pub density_range: Range<f64>,
    /// Density used for the very first seed
    pub initial_density: f64,
    /// Grids with at least this many cells step in parallel
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            base_max_age: 15,
            fade_frames: 2,
            tick_interval: Duration::from_millis(120),
            life_like_probability: 0.5,
            density_range: 0.1..0.7,
            initial_density: 0.35,
            parallel_threshold: 40_000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_frames == 0 {
            return Err(ConfigError::ZeroFadeFrames);
        }
        if self.base_max_age == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.life_like_probability) {
            return Err(ConfigError::Probability(self.life_like_probability));
        }
        let Range { start, end } = self.density_range;
        if !(start > 0.0 && start < end && end < 1.0) {
            return Err(ConfigError::DensityRange { start, end });
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::Probability(self.initial_density));
        }
        Ok(())
    }

    pub fn rule_generator(&self) -> RuleGenerator {
        RuleGenerator::new(self.life_like_probability, self.density_range.clone())
    }
}
