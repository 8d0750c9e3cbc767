//! Publish state machine and results
//!
//! Every publish invocation walks
//! `Idle → Resolving → Probing → Writing → {Succeeded | Failed}`.
//! Resolving may fail fast on configuration errors; Probing never fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{PublishId, RevisionToken};

// ============================================================================
// PublishState
// ============================================================================

/// State of a single publish invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    /// Not started
    #[default]
    Idle,
    /// Checking configuration and computing the destination path
    Resolving,
    /// Looking up the destination's current revision token
    Probing,
    /// Issuing the create-or-update write
    Writing,
    /// The write was accepted
    Succeeded,
    /// The publish was aborted or the write was rejected
    Failed,
}

impl PublishState {
    /// Returns true for `Succeeded` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, PublishState::Succeeded | PublishState::Failed)
    }

    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: PublishState) -> bool {
        use PublishState::*;
        matches!(
            (self, next),
            (Idle, Resolving)
                | (Resolving, Probing)
                | (Resolving, Failed)
                | (Probing, Writing)
                | (Writing, Succeeded)
                | (Writing, Failed)
        )
    }

    /// Moves to `next`
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidState`] if the transition is not allowed
    pub fn advance(&mut self, next: PublishState) -> Result<(), DomainError> {
        if !self.can_transition_to(next) {
            return Err(DomainError::InvalidState {
                from: self.to_string(),
                to: next.to_string(),
            });
        }
        *self = next;
        Ok(())
    }
}

impl std::fmt::Display for PublishState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PublishState::Idle => "Idle",
            PublishState::Resolving => "Resolving",
            PublishState::Probing => "Probing",
            PublishState::Writing => "Writing",
            PublishState::Succeeded => "Succeeded",
            PublishState::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// RemoteObjectRef
// ============================================================================

/// Current state of a remote file as seen by the last probe
///
/// An absent token means the file does not exist yet (or could not be
/// read); a present token must accompany the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteObjectRef {
    pub path: String,
    pub revision_token: Option<RevisionToken>,
}

impl RemoteObjectRef {
    /// Reference to a file that already exists at `path`
    pub fn existing(path: impl Into<String>, revision_token: RevisionToken) -> Self {
        Self {
            path: path.into(),
            revision_token: Some(revision_token),
        }
    }

    /// Reference to a file that is about to be created at `path`
    pub fn absent(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            revision_token: None,
        }
    }

    pub fn exists(&self) -> bool {
        self.revision_token.is_some()
    }
}

// ============================================================================
// PublishResult
// ============================================================================

/// Outcome of a publish invocation, surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    publish_id: PublishId,
    final_path: String,
    success: bool,
    error_message: Option<String>,
    /// True when the write created a new file rather than updating one
    created: bool,
    completed_at: DateTime<Utc>,
}

impl PublishResult {
    /// A successful publish to `final_path`
    pub fn succeeded(publish_id: PublishId, final_path: impl Into<String>, created: bool) -> Self {
        Self {
            publish_id,
            final_path: final_path.into(),
            success: true,
            error_message: None,
            created,
            completed_at: Utc::now(),
        }
    }

    /// A failed publish; `final_path` is empty if resolution never completed
    pub fn failed(
        publish_id: PublishId,
        final_path: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            publish_id,
            final_path: final_path.into(),
            success: false,
            error_message: Some(error_message.into()),
            created: false,
            completed_at: Utc::now(),
        }
    }

    pub fn publish_id(&self) -> PublishId {
        self.publish_id
    }

    pub fn final_path(&self) -> &str {
        &self.final_path
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn created(&self) -> bool {
        self.created
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// File name component of the final path
    pub fn file_name(&self) -> &str {
        self.final_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.final_path)
    }
}
