//! Remote repository port (driven/secondary port)
//!
//! This module defines the interface to the remote content store a post
//! is published to. The primary implementation targets the GitHub
//! contents API, but the trait only assumes a path-addressed store with
//! per-object revision tokens and commit-based writes.
//!
//! ## Design Notes
//!
//! - `probe` never fails: it reports one of three outcomes and leaves the
//!   decision of how to treat a transient failure to the use case.
//! - `write` returns a [`WriteFailure`] carrying the remote's
//!   human-readable reason so it can be shown to the user verbatim.
//! - Implementations hold only the credential and endpoint; they are cheap
//!   to rebuild for every publish.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::newtypes::{RepositoryCoordinates, RevisionToken, TransportContent};
use crate::domain::publish::RemoteObjectRef;

/// Result of looking up a path on the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The object exists; the reference carries its revision token
    Found(RemoteObjectRef),
    /// The remote answered that nothing exists at the path
    NotFound,
    /// The lookup failed for any other reason (network, auth, 5xx, bad body)
    TransientError(String),
}

/// A create-or-update request for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Repository and branch to commit to
    pub coordinates: RepositoryCoordinates,
    /// Repository-relative path of the file
    pub path: String,
    /// New file content in transport encoding
    pub content: TransportContent,
    /// Commit message
    pub message: String,
    /// Revision the update is based on; `None` requests a creation
    pub revision_token: Option<RevisionToken>,
}

/// Metadata of a file after a successful write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenObject {
    /// Path reported by the remote
    pub path: String,
    /// New revision token of the file, if reported
    pub revision_token: Option<RevisionToken>,
    /// Identifier of the commit that carried the write, if reported
    pub commit_id: Option<String>,
    /// True if the remote created the file, false if it updated it
    pub created: bool,
}

/// A rejected or failed write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct WriteFailure {
    /// HTTP status of the rejection, absent for transport-level failures
    pub status: Option<u16>,
    /// Human-readable reason, verbatim from the remote when it supplied one
    pub reason: String,
}

impl WriteFailure {
    pub fn new(status: Option<u16>, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// Port trait for the remote content store
///
/// Exactly two operations are needed by the publish use case; both are
/// scoped to the branch carried by the [`RepositoryCoordinates`].
#[async_trait::async_trait]
pub trait IRemoteRepository: Send + Sync {
    /// Looks up the object at `path`
    ///
    /// # Arguments
    /// * `coordinates` - Repository and branch to read from
    /// * `path` - Repository-relative file path
    async fn probe(&self, coordinates: &RepositoryCoordinates, path: &str) -> ProbeOutcome;

    /// Creates or updates the object described by `request`
    ///
    /// When `request.revision_token` is present it must be forwarded so the
    /// remote can reject the write if the object changed in between; when
    /// absent, no token may be sent.
    async fn write(&self, request: &WriteRequest) -> Result<WrittenObject, WriteFailure>;
}
