//! Error types for confidence estimation

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building estimators or merging confidence indicators
#[derive(Error, Debug)]
pub enum ConfidenceError {
    /// Invalid or unsupported `confidence_method` configuration
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Spatial extents or indicator counts disagree
    #[error("shape mismatch for {target}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        target: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Disparity map and cost volume carry different indicator sequences
    #[error("indicator labels differ: cost volume has {volume:?}, disparity map has {disparity:?}")]
    IndicatorMismatch {
        volume: Vec<String>,
        disparity: Vec<String>,
    },

    /// A confidence layer is internally inconsistent
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Failure reported by an estimator implementation
    #[error("confidence method `{method}` failed: {message}")]
    Estimator { method: String, message: String },
}

impl ConfidenceError {
    /// True for errors that stem from the configuration bundle
    pub fn is_configuration(&self) -> bool {
        matches!(self, ConfidenceError::Configuration(_))
    }

    pub(crate) fn spatial(target: &'static str, expected: (usize, usize), found: (usize, usize)) -> Self {
        ConfidenceError::ShapeMismatch {
            target,
            expected: vec![expected.0, expected.1],
            found: vec![found.0, found.1],
        }
    }
}

/// Result type for confidence operations
pub type Result<T> = std::result::Result<T, ConfidenceError>;
