//! Blogpub GitHub - GitHub contents API client
//!
//! Provides an async client for:
//! - Probing a repository path for an existing file (`GET .../contents/{path}`)
//! - Creating or updating a file in a single commit (`PUT .../contents/{path}`)
//!
//! ## Modules
//!
//! - [`client`] - Authenticated HTTP client and URL construction
//! - [`contents`] - Contents endpoint calls and wire types
//! - [`provider`] - [`IRemoteRepository`](blogpub_core::ports::IRemoteRepository)
//!   adapter used by the publish orchestrator

pub mod client;
pub mod contents;
pub mod provider;

pub use client::GitHubClient;
pub use provider::GitHubRepository;

use thiserror::Error;

/// Reason reported when a failed response carries no usable `message`
pub const GENERIC_API_ERROR: &str = "GitHub API error";

/// Errors that can occur when communicating with the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The API answered with a non-success status.
    /// `message` is the `message` field of the error body, or
    /// [`GENERIC_API_ERROR`] when the body has none.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Reason reported by the API
        message: String,
    },

    /// A network-level error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured base URL can not be used to build request URLs
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl GitHubError {
    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Api { status, .. } => Some(*status),
            GitHubError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
