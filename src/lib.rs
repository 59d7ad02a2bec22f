// Domain layer - automaton rules, zones and grid
pub mod domain;

// Application layer - tick loop, scheduling and tuning
pub mod application;

// Infrastructure layer - drawing
pub mod rendering;

// Re-exports for convenience
pub use application::{Simulation, SimulationConfig, SimulationState, StepStrategy, TickOutcome, TickScheduler};
pub use domain::{Cell, Grid, RuleGenerator, RuleSet, Zone, ZoneModel};
