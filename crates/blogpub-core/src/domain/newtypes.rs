//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers and values.
//! Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;

// ============================================================================
// PublishId
// ============================================================================

/// Identifier for a single publish invocation
///
/// Only used to correlate log lines and results; it is never sent to the
/// remote content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishId(Uuid);

impl PublishId {
    /// Create a new random PublishId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PublishId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PublishId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublishId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid PublishId: {e}")))
    }
}

// ============================================================================
// RepositoryCoordinates
// ============================================================================

/// Address of the remote repository a post is written to
///
/// Derived once per publish from the `"owner/name"` configuration string
/// and the configured branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryCoordinates {
    owner: String,
    name: String,
    branch: String,
}

impl RepositoryCoordinates {
    /// Parses an `"owner/name"` string into coordinates on `branch`
    ///
    /// Surrounding whitespace is ignored. The string must split on `/` into
    /// exactly two non-empty segments.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRepository`] if the string is malformed,
    /// or [`DomainError::EmptyBranch`] if `branch` is blank.
    pub fn parse(repository: &str, branch: &str) -> Result<Self, DomainError> {
        let trimmed = repository.trim();
        let mut segments = trimmed.split('/');

        let (owner, name) = match (segments.next(), segments.next(), segments.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                (owner, name)
            }
            _ => return Err(DomainError::InvalidRepository(repository.to_string())),
        };

        let branch = branch.trim();
        if branch.is_empty() {
            return Err(DomainError::EmptyBranch);
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: branch.to_string(),
        })
    }

    /// Repository owner (user or organisation)
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Branch every read and write is scoped to
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.name, self.branch)
    }
}

// ============================================================================
// RevisionToken
// ============================================================================

/// Opaque identifier of the current state of a remote object
///
/// For the GitHub contents API this is the blob `sha`. It must be sent back
/// verbatim with an update so the remote can reject writes against a stale base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RevisionToken(String);

impl RevisionToken {
    /// Create a new RevisionToken
    ///
    /// # Errors
    /// Returns error if the token is empty
    pub fn new(token: String) -> Result<Self, DomainError> {
        if token.trim().is_empty() {
            return Err(DomainError::InvalidRevisionToken(
                "Revision token cannot be empty".to_string(),
            ));
        }
        Ok(Self(token))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RevisionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RevisionToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RevisionToken> for String {
    fn from(token: RevisionToken) -> Self {
        token.0
    }
}

// ============================================================================
// TransportContent
// ============================================================================

/// File content in the binary-safe transport encoding (base64 of UTF-8)
///
/// Only produced by [`crate::domain::codec::encode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportContent(String);

impl TransportContent {
    pub(crate) fn from_encoded(encoded: String) -> Self {
        Self(encoded)
    }

    /// Get the encoded text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the encoded text in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the encoded content is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for TransportContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
