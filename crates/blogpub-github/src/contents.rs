//! Repository contents endpoint
//!
//! `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}` to look a file
//! up, `PUT /repos/{owner}/{repo}/contents/{path}` to create or update it in
//! a single commit. An update must carry the blob `sha` of the version being
//! replaced; a create must not carry one.

use blogpub_core::domain::{codec, CodecError, RepositoryCoordinates};
use reqwest::{Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::{GitHubError, GENERIC_API_ERROR};

// ============================================================================
// Wire types
// ============================================================================

/// File entry returned by `GET .../contents/{path}`
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    /// Repository-relative path
    pub path: String,
    /// Blob sha, required to update the file
    pub sha: String,
    /// File size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Base64 content, line-wrapped by GitHub; absent for large files
    #[serde(default)]
    pub content: Option<String>,
    /// Encoding of `content` (`base64`)
    #[serde(default)]
    pub encoding: Option<String>,
}

impl RemoteFile {
    /// Decodes the inline content, if the response carried any
    pub fn decode_content(&self) -> Result<Option<String>, CodecError> {
        match (&self.content, self.encoding.as_deref()) {
            (Some(content), Some("base64") | None) => codec::decode(content).map(Some),
            _ => Ok(None),
        }
    }
}

/// Request body of `PUT .../contents/{path}`
#[derive(Debug, Serialize)]
struct PutContentsBody<'a> {
    message: &'a str,
    content: &'a str,
    branch: &'a str,
    /// Omitted entirely for a create
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: Option<ContentSummary>,
    commit: Option<CommitSummary>,
}

#[derive(Debug, Deserialize)]
struct ContentSummary {
    path: Option<String>,
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitSummary {
    sha: Option<String>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Result of a successful create-or-update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOutcome {
    /// Path of the written file
    pub path: String,
    /// Blob sha of the new version
    pub sha: Option<String>,
    /// Sha of the commit that wrote it
    pub commit_sha: Option<String>,
    /// `true` for a create (201), `false` for an update (200)
    pub created: bool,
}

// ============================================================================
// Calls
// ============================================================================

/// Looks up the file at `path` on the configured branch
///
/// # Returns
/// `Ok(None)` on 404, the file entry on success
///
/// # Errors
/// Any other status, a network failure, or a body that is not a file entry
/// (e.g. the path is a directory)
pub async fn get_contents(
    client: &GitHubClient,
    coordinates: &RepositoryCoordinates,
    path: &str,
) -> Result<Option<RemoteFile>, GitHubError> {
    let mut url = client.contents_url(coordinates, path)?;
    url.query_pairs_mut().append_pair("ref", coordinates.branch());

    let response = client.request(Method::GET, url).send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        debug!(path, "No file at path");
        return Ok(None);
    }
    if !status.is_success() {
        return Err(api_error(response).await);
    }

    let file: RemoteFile = response
        .json()
        .await
        .map_err(|e| GitHubError::InvalidResponse(format!("contents of {path}: {e}")))?;

    debug!(path, sha = %file.sha, size = ?file.size, "File found");
    Ok(Some(file))
}

/// Creates or updates the file at `path` in one commit
///
/// # Arguments
/// * `content` - Base64 encoded file content
/// * `message` - Commit message
/// * `sha` - Blob sha of the version being replaced; `None` to create
pub async fn put_contents(
    client: &GitHubClient,
    coordinates: &RepositoryCoordinates,
    path: &str,
    content: &str,
    message: &str,
    sha: Option<&str>,
) -> Result<PutOutcome, GitHubError> {
    let url = client.contents_url(coordinates, path)?;
    let body = PutContentsBody {
        message,
        content,
        branch: coordinates.branch(),
        sha,
    };

    let response = client.request(Method::PUT, url).json(&body).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(api_error(response).await);
    }

    let created = status == StatusCode::CREATED;
    let parsed: PutContentsResponse = response
        .json()
        .await
        .map_err(|e| GitHubError::InvalidResponse(format!("write of {path}: {e}")))?;

    let (written_path, blob_sha) = match parsed.content {
        Some(summary) => (summary.path, summary.sha),
        None => (None, None),
    };

    Ok(PutOutcome {
        path: written_path.unwrap_or_else(|| path.to_string()),
        sha: blob_sha,
        commit_sha: parsed.commit.and_then(|c| c.sha),
        created,
    })
}

/// Converts a non-success response into [`GitHubError::Api`]
///
/// Uses the body's `message` verbatim when present and non-blank.
async fn api_error(response: Response) -> GitHubError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(text) => message_from_body(&text),
        Err(e) => {
            warn!(status, error = %e, "Failed to read error body");
            None
        }
    };

    GitHubError::Api {
        status,
        message: message.unwrap_or_else(|| GENERIC_API_ERROR.to_string()),
    }
}

fn message_from_body(text: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(text)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}
