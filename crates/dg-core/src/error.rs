//! Error types for configuration validation and generation

use core::fmt;

use thiserror::Error;

/// Grid axis, used to name the offending dimension in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Rejected generator parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map {axis} must be odd so mazes keep a solid border, got {value}")]
    EvenDimension { axis: Axis, value: usize },

    #[error("map {axis} must be at least {min}, got {value}")]
    DimensionTooSmall { axis: Axis, value: usize, min: usize },

    #[error("room extra size must be at most {max}, got {value}")]
    RoomExtraSizeTooLarge { value: u32, max: u32 },

    #[error("winding percent must be in 0..=100, got {0}")]
    WindingPercentOutOfRange(u32),

    #[error("extra connector chance must be at least 1")]
    ZeroExtraConnectorChance,

    #[error("minimum connector spacing must be at least 1")]
    ZeroConnectorSpacing,
}

/// Failures while running the generation pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Connector candidates ran out before every region was joined.
    #[error("no connector left to join {open_regions} open regions")]
    Disconnected { open_regions: usize },
}
