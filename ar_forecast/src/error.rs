//! Error types for the ar_forecast crate

use ar_math::MathError;
use thiserror::Error;

/// Custom error types for the ar_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from AR estimation or forecasting
    #[error("Model error: {0}")]
    ModelError(#[from] MathError),

    /// Every order in the sweep failed to produce a usable forecast
    #[error("no usable AR order between {min} and {max}")]
    NoUsableOrder { min: usize, max: usize },

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error writing CSV output
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error writing JSON output
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing a TOML configuration
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
