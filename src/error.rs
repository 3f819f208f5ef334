//! Configuration error handling
//!
//! Every malformed configuration is rejected once, at load time. Evaluation
//! of a validated model has no error paths.

use std::path::PathBuf;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a day cycle configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown config format for {path}")]
    UnknownFormat { path: PathBuf },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Phase boundaries must be strictly increasing inside (0, 1): {boundaries:?}")]
    InvalidBoundaries { boundaries: [f32; 4] },

    #[error("Day length must be positive, got {minutes} minutes")]
    NonPositiveDayLength { minutes: f32 },

    #[error("Intensity multiplier must be positive, got {value}")]
    NonPositiveMultiplier { value: f32 },

    #[error("Curve '{name}' has no keyframes")]
    EmptyCurve { name: String },

    #[error("Curve '{name}' keyframes are not sorted by time")]
    UnsortedCurve { name: String },

    #[error("Curve '{name}' declares an empty output range: {min}..{max}")]
    InvalidCurveRange { name: String, min: f32, max: f32 },

    #[error("Gradient '{name}' has no color keys")]
    EmptyGradient { name: String },

    #[error("Gradient '{name}' color keys are not sorted by time")]
    UnsortedGradient { name: String },

    #[error("Sky material has no {phase} {slot} color")]
    MissingMaterialColor { phase: &'static str, slot: &'static str },

    #[error("'{name}' contains non-finite values")]
    NonFinite { name: String },

    #[error("Field '{field}' must be finite and non-negative, got {value}")]
    InvalidValue { field: String, value: f32 },
}

impl ConfigError {
    pub fn parse(message: impl std::fmt::Display) -> Self {
        ConfigError::Parse {
            message: message.to_string(),
        }
    }

    pub fn non_finite(name: &str) -> Self {
        ConfigError::NonFinite {
            name: name.to_string(),
        }
    }

    pub fn invalid_value(field: &str, value: f32) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value,
        }
    }
}
