//! How a generation is computed.
//!
//! Both strategies produce the same grid; parallel only pays off once the
//! grid is large enough to amortise rayon's scheduling.

/// Available step implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Row-major, one thread
    #[default]
    Serial,
    /// Rows split across the rayon pool
    Parallel,
}

impl StepStrategy {
    /// Pick a strategy for a grid holding `cells` cells
    pub fn for_cell_count(cells: usize, parallel_threshold: usize) -> Self {
        if cells >= parallel_threshold {
            StepStrategy::Parallel
        } else {
            StepStrategy::Serial
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_selects_parallel() {
        assert_eq!(StepStrategy::for_cell_count(39_999, 40_000), StepStrategy::Serial);
        assert_eq!(StepStrategy::for_cell_count(40_000, 40_000), StepStrategy::Parallel);
    }

    #[test]
    fn test_names_are_unique() {
        assert_ne!(StepStrategy::Serial.name(), StepStrategy::Parallel.name());
    }
}
