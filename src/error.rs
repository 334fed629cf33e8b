//! Error types for condition generation and family configuration.

use std::path::PathBuf;

/// Errors raised by axis lookups, weighted sampling, and family construction.
#[derive(Debug, thiserror::Error)]
pub enum ConditionError {
    #[error("unknown axis: {0}")]
    UnknownAxisKind(String),

    #[error("invalid weight {weight} for {axis}={value} (weights must be finite and >= 0)")]
    InvalidWeight {
        axis: String,
        value: String,
        weight: f64,
    },

    #[error("every value of axis '{0}' has weight 0")]
    ZeroTotalWeight(String),

    #[error("weights of axis '{0}' sum to a non-finite total")]
    NonFiniteTotalWeight(String),

    #[error("cannot choose from an empty option list")]
    EmptyOptions,

    #[error("axis '{0}' has no values")]
    EmptyAxis(String),

    #[error("axis '{0}' is defined more than once")]
    DuplicateAxis(String),

    #[error("axis '{axis}' lists value '{value}' more than once")]
    DuplicateValue { axis: String, value: String },

    #[error("axis '{0}' is both mandatory and optional")]
    OverlappingPolicy(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConditionError {
    /// Fill in the axis name on sampling errors raised without one.
    pub(crate) fn with_axis(self, name: &str) -> Self {
        match self {
            ConditionError::InvalidWeight { value, weight, .. } => ConditionError::InvalidWeight {
                axis: name.to_string(),
                value,
                weight,
            },
            ConditionError::ZeroTotalWeight(_) => ConditionError::ZeroTotalWeight(name.to_string()),
            ConditionError::NonFiniteTotalWeight(_) => {
                ConditionError::NonFiniteTotalWeight(name.to_string())
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;
