//! Domain error types
//!
//! This module defines error types specific to domain operations
//! (validation failures, invalid state transitions, malformed repository
//! coordinates) and the user-facing publish error taxonomy.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Repository coordinate string is not of the form `owner/name`
    #[error("Repository must be in the form owner/repo: {0:?}")]
    InvalidRepository(String),

    /// Branch name is empty
    #[error("Branch must not be empty")]
    EmptyBranch,

    /// Revision token is empty
    #[error("Invalid revision token: {0}")]
    InvalidRevisionToken(String),

    /// Invalid state transition attempt
    #[error("Invalid state transition from {from} to {to}")]
    InvalidState {
        /// The current state
        from: String,
        /// The attempted target state
        to: String,
    },

    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

/// Errors that terminate a publish invocation
///
/// Every variant is converted into a single user-visible notification at
/// the orchestrator boundary; none of them escape into the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// Missing credential or malformed repository coordinates.
    /// Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    /// The publish command was invoked with no open document
    #[error("No file is currently open.")]
    NoActiveDocument,

    /// The destination cannot be published to (e.g. the title slugifies to nothing)
    #[error("Invalid publish target: {0}")]
    InvalidTarget(String),

    /// The remote write was rejected; carries the remote reason verbatim
    #[error("{0}")]
    RemoteWrite(String),

    /// The host failed to supply document content
    #[error("Failed to read document: {0}")]
    DocumentRead(String),

    /// Internal domain invariant violated
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PublishError {
    /// Message shown when no credential is configured
    pub const MISSING_CREDENTIAL: &'static str =
        "GitHub token not configured. Please set it in plugin settings.";

    /// Creates the configuration error for a missing credential
    pub fn missing_credential() -> Self {
        PublishError::Configuration(Self::MISSING_CREDENTIAL.to_string())
    }
}
