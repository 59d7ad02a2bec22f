mod cell;
mod error;
mod grid;
mod rules;
mod zones;

pub use cell::Cell;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use rules::{
    MAX_NEIGHBORS, NeighborSet, RuleDraw, RuleGenerator, RuleMode, RuleSet, pick_uniform_distinct,
    pick_weighted_distinct,
};
pub use zones::{ZONE_DIVISIONS, Zone, ZoneModel};
