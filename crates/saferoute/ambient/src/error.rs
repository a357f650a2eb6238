//! Error types for saferoute-ambient crate.

use thiserror::Error;

/// Errors surfaced to risk-mode subscribers.
///
/// Assert and release never fail; an unmatched release is floored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmbientError {
    /// Every handle to the controller has been dropped.
    #[error("risk mode controller closed")]
    ControllerClosed,
}

/// Result type for ambient operations.
pub type AmbientResult<T> = Result<T, AmbientError>;
