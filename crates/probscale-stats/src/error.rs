//! Error types for probscale-stats
//!
//! Every failure is either an invalid parameter (bad preset name, α or β
//! out of range) or a degenerate input (nothing left to rank).

use thiserror::Error;

/// Broad classification of a [`PositionError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller asked for something that does not exist or is out of range
    InvalidParameter,
    /// The sample cannot produce any plotting positions
    DegenerateInput,
}

/// Errors raised while computing plotting positions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Preset name not present in the table
    #[error("Unknown plotting position type: '{name}'")]
    UnknownPreset { name: String },

    /// α or β outside [0, 1]
    #[error("Plotting position parameter {name}={value} is out of range (must be within [0, 1])")]
    ParameterOutOfRange { name: &'static str, value: f64 },

    /// No values at all
    #[error("Input sample is empty")]
    EmptyInput,

    /// Every value was a missing marker
    #[error("Input sample has no finite values ({excluded} excluded)")]
    AllExcluded { excluded: usize },

    /// n + 1 - α - β collapses to zero
    #[error("Plotting positions undefined for n={n} with alpha={alpha}, beta={beta}")]
    ZeroDenominator { n: usize, alpha: f64, beta: f64 },
}

impl PositionError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PositionError::UnknownPreset { .. } | PositionError::ParameterOutOfRange { .. } => {
                ErrorKind::InvalidParameter
            }
            PositionError::EmptyInput
            | PositionError::AllExcluded { .. }
            | PositionError::ZeroDenominator { .. } => ErrorKind::DegenerateInput,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidParameter`
    pub fn is_invalid_parameter(&self) -> bool {
        self.kind() == ErrorKind::InvalidParameter
    }

    /// Shorthand for `kind() == ErrorKind::DegenerateInput`
    pub fn is_degenerate_input(&self) -> bool {
        self.kind() == ErrorKind::DegenerateInput
    }
}

/// Result type alias for plotting position operations
pub type PositionResult<T> = Result<T, PositionError>;
