//! Error types for probscale-core
//!
//! Provides error handling for:
//! - Plotting position failures (wrapped from probscale-stats)
//! - Plot and configuration options
//! - Sample parsing and file I/O

use probscale_stats::PositionError;
use thiserror::Error;

/// Main error type for probscale operations
#[derive(Error, Debug)]
pub enum ProbscaleError {
    /// Plotting position computation failed
    #[error("Plotting positions failed: {0}")]
    Positions(#[from] PositionError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Option value not among the accepted choices
    #[error("Unknown {option}: '{value}' (expected one of: {expected})")]
    UnknownOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Sample text contained something that is neither a number nor a missing marker
    #[error("Invalid sample value '{token}' on line {line}")]
    InvalidSample { line: usize, token: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[cfg(feature = "toml-config")]
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization errors
    #[cfg(feature = "toml-config")]
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for probscale operations
pub type ProbscaleResult<T> = Result<T, ProbscaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_error_display() {
        let err: ProbscaleError = PositionError::EmptyInput.into();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_unknown_option_display() {
        let err = ProbscaleError::UnknownOption {
            option: "plot type",
            value: "box".to_string(),
            expected: "prob, pp, qq",
        };
        let msg = err.to_string();
        assert!(msg.contains("plot type"));
        assert!(msg.contains("'box'"));
        assert!(msg.contains("prob, pp, qq"));
    }

    #[test]
    fn test_invalid_sample_display() {
        let err = ProbscaleError::InvalidSample {
            line: 3,
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
    }
}
