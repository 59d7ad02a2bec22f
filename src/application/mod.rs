mod config;
mod scheduler;
mod simulation;
mod strategy;

pub use config::SimulationConfig;
pub use scheduler::TickScheduler;
pub use simulation::{Simulation, SimulationState, TickOutcome};
pub use strategy::StepStrategy;
