//! GitHub REST API client
//!
//! Provides a typed HTTP client for the GitHub contents API.
//! Handles authentication headers and endpoint construction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blogpub_core::domain::RepositoryCoordinates;
//! use blogpub_github::{client::GitHubClient, contents};
//!
//! # async fn example() -> Result<(), blogpub_github::GitHubError> {
//! let client = GitHubClient::new("ghp_token");
//! let coordinates = RepositoryCoordinates::parse("octocat/blog", "main").unwrap();
//! let existing = contents::get_contents(&client, &coordinates, "posts/hello.md").await?;
//! println!("exists: {}", existing.is_some());
//! # Ok(())
//! # }
//! ```

use blogpub_core::config::PluginConfiguration;
use blogpub_core::domain::RepositoryCoordinates;
use reqwest::{header, Client, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::GitHubError;

/// Base URL for the public GitHub REST API
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Media type requested on every call
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// User agent sent on every call; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!("blogpub/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// GitHubClient
// ============================================================================

/// HTTP client for GitHub REST API calls
///
/// Holds nothing beyond the credential and the base URL, so it is cheap to
/// build a fresh one from each configuration snapshot.
pub struct GitHubClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Static bearer credential (personal access token)
    token: String,
}

impl GitHubClient {
    /// Creates a new GitHubClient for the public API
    ///
    /// # Arguments
    /// * `token` - Personal access token with `contents:write` on the repository
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE_URL)
    }

    /// Creates a new GitHubClient with a custom base URL
    /// (GitHub Enterprise, or a mock server in tests)
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Creates a client from the credential and API base URL of `config`
    pub fn from_config(config: &PluginConfiguration) -> Self {
        Self::with_base_url(config.credential.trim(), config.api_base_url.trim())
    }

    /// Returns a reference to the credential
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base}/repos/{owner}/{repo}/contents/{path}`
    ///
    /// Each path segment is percent-encoded on its own; empty segments
    /// (leading, trailing or doubled slashes) are dropped.
    pub fn contents_url(
        &self,
        coordinates: &RepositoryCoordinates,
        path: &str,
    ) -> Result<Url, GitHubError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GitHubError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| GitHubError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["repos", coordinates.owner(), coordinates.name(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        Ok(url)
    }

    /// Creates an authenticated request builder for the given method and URL
    ///
    /// Adds the bearer credential, the `Accept` media type and the user agent.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, url = %url, "GitHub request");
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(header::USER_AGENT, USER_AGENT)
    }
}
