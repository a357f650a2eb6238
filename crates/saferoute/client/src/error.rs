//! Error types for saferoute-client crate.
//!
//! The derived-state engine itself cannot fail; everything here comes from
//! the collaborators it talks to.

use saferoute_types::IncidentId;
use thiserror::Error;

/// Errors surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    Unauthenticated,

    /// Incident not found in the source.
    #[error("incident not found: {0}")]
    IncidentNotFound(IncidentId),

    /// The incident source could not be reached.
    #[error("incident source unavailable: {0}")]
    SourceUnavailable(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
