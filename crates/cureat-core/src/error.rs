//! Error types for cureat-core.

use thiserror::Error;

/// Failure surfaced by the filter engine's dynamically-typed entry points.
///
/// An empty result is never an error; only an unusable candidate collection
/// is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
