/// Errors raised when a collaborator hands the domain inconsistent input.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    /// Cell buffer length does not match `width * height`
    #[error("cell buffer holds {actual} cells, expected {width}x{height}")]
    DimensionMismatch { width: usize, height: usize, actual: usize },
}

/// Invalid tuning values in `SimulationConfig`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("fade_frames must be at least 1")]
    ZeroFadeFrames,
    #[error("base_max_age must be at least 1")]
    ZeroMaxAge,
    #[error("cell_size must be positive, got {0}")]
    NonPositiveCellSize(f32),
    #[error("probability {0} is outside [0, 1]")]
    Probability(f64),
    #[error("density range {start}..{end} must be non-empty and inside (0, 1)")]
    DensityRange { start: f64, end: f64 },
}
