use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Surface must be at least one unit wide and tall")]
    EmptySurface,
    #[error("Brush radius must be a positive finite number")]
    InvalidBrushRadius,
    #[error("Reveal threshold must lie in [0, 1)")]
    InvalidThreshold,
}

pub type Result<T> = core::result::Result<T, ConfigError>;
