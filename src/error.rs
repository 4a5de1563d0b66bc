/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
    #[error("Maximum dimension must be positive, got {0}")]
    InvalidMaxDimension(i32),
    #[error("Canvas extent {extent}px exceeds the {limit}px framebuffer limit")]
    CanvasTooLarge { extent: u64, limit: u16 },
    #[error("Grid dimension {value} must be between 1 and {max}")]
    InvalidDimension { value: i32, max: i32 },
    #[error("Speed range {min}..={max} is empty")]
    InvalidSpeedRange { min: i32, max: i32 },
    #[error("Default speed {0} is outside the speed range")]
    SpeedOutOfRange(i32),
}

/// Rejected session transitions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Grid of {width}x{height} cells exceeds the maximum of {max} per side")]
    DimensionsTooLarge { width: i32, height: i32, max: i32 },
}

/// Startup errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}
