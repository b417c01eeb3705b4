//! Error types.

use thiserror::Error;

/// Errors raised while fitting, sampling or indexing a curve.
///
/// All of them are local and recoverable: callers are expected to skip
/// the operation (no curve built, nothing drawn) rather than abort.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CurveError {
    /// Fewer points than the operation needs.
    #[error("need at least {required} points, got {found}")]
    InsufficientPoints {
        /// Points available
        found: usize,
        /// Points required
        required: usize,
    },

    /// The first and last time stamps coincide, so time can't be normalized.
    #[error("time span is zero (all points at t = {0})")]
    DegenerateDuration(f64),

    /// A point's time stamp does not increase over its predecessor's.
    #[error("time stamp at index {index} does not increase")]
    NonIncreasingTime {
        /// Index of the offending point
        index: usize,
    },

    /// A time index array decreases somewhere.
    #[error("time index decreases at index {index}")]
    NonMonotonicIndex {
        /// Index of the offending entry
        index: usize,
    },
}

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The input isn't valid json for a config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
