//! GitHubRepository - IRemoteRepository implementation for the GitHub contents API
//!
//! Wraps a [`GitHubClient`] and maps the contents calls onto the
//! [`IRemoteRepository`] port contract:
//!
//! - `probe`: 200 → `Found` with the blob sha, 404 → `NotFound`, anything
//!   else → `TransientError`. Probing never fails the publish.
//! - `write`: non-success → [`WriteFailure`] with the API's reason verbatim.

use blogpub_core::config::PluginConfiguration;
use blogpub_core::domain::{RemoteObjectRef, RepositoryCoordinates, RevisionToken};
use blogpub_core::ports::{
    IRemoteRepository, ProbeOutcome, WriteFailure, WriteRequest, WrittenObject,
};
use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::contents;
use crate::GitHubError;

/// Remote repository backed by the GitHub contents API
pub struct GitHubRepository {
    client: GitHubClient,
}

impl GitHubRepository {
    /// Creates a new `GitHubRepository` wrapping the given [`GitHubClient`]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// Builds a repository client from a configuration snapshot
    pub fn from_config(config: &PluginConfiguration) -> Self {
        Self::new(GitHubClient::from_config(config))
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl IRemoteRepository for GitHubRepository {
    async fn probe(&self, coordinates: &RepositoryCoordinates, path: &str) -> ProbeOutcome {
        debug!(repository = %coordinates, path, "GitHubRepository::probe");

        match contents::get_contents(&self.client, coordinates, path).await {
            Ok(Some(file)) => match RevisionToken::new(file.sha) {
                Ok(token) => ProbeOutcome::Found(RemoteObjectRef::existing(path, token)),
                Err(e) => ProbeOutcome::TransientError(format!("file entry for {path}: {e}")),
            },
            Ok(None) => ProbeOutcome::NotFound,
            Err(e) => {
                warn!(path, status = ?e.status(), error = %e, "Probe failed");
                ProbeOutcome::TransientError(e.to_string())
            }
        }
    }

    async fn write(&self, request: &WriteRequest) -> Result<WrittenObject, WriteFailure> {
        debug!(
            repository = %request.coordinates,
            path = %request.path,
            update = request.revision_token.is_some(),
            "GitHubRepository::write"
        );

        let outcome = contents::put_contents(
            &self.client,
            &request.coordinates,
            &request.path,
            request.content.as_str(),
            &request.message,
            request.revision_token.as_ref().map(|t| t.as_str()),
        )
        .await
        .map_err(write_failure)?;

        Ok(WrittenObject {
            path: outcome.path,
            revision_token: outcome.sha.and_then(|sha| RevisionToken::new(sha).ok()),
            commit_id: outcome.commit_sha,
            created: outcome.created,
        })
    }
}

fn write_failure(error: GitHubError) -> WriteFailure {
    match error {
        GitHubError::Api { status, message } => WriteFailure::new(Some(status), message),
        other => WriteFailure::new(other.status(), other.to_string()),
    }
}
