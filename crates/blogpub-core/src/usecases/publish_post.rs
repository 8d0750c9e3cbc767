//! Post publishing use case
//!
//! Orchestrates a single publish invocation:
//! resolve the destination path, probe the remote for an existing file,
//! then issue exactly one create-or-update write carrying the probed
//! revision token (if any). Every failure is converted into a failed
//! [`PublishResult`]; the write is never retried and no compensating
//! action is taken.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::config::PluginConfiguration;
use crate::domain::codec;
use crate::domain::errors::PublishError;
use crate::domain::intent::PublishIntent;
use crate::domain::newtypes::{PublishId, RepositoryCoordinates};
use crate::domain::path::{resolve, ResolvedPath};
use crate::domain::publish::{PublishResult, PublishState, RemoteObjectRef};
use crate::ports::{IRemoteRepository, ProbeOutcome, WriteRequest, WrittenObject};

/// Prefix of the commit message; the post title follows it
const COMMIT_MESSAGE_PREFIX: &str = "Publish: ";

/// What to do when the existence probe fails for a reason other than
/// "not found"
///
/// Either way the destination ends up treated as new. If the file does
/// exist, the tokenless write is rejected by the remote and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeFailurePolicy {
    /// Treat the destination as new immediately
    #[default]
    TreatAsNew,
    /// Probe again up to `attempts` more times, then treat as new
    Retry {
        /// Additional probe attempts after the first failure
        attempts: u32,
    },
}

impl ProbeFailurePolicy {
    fn extra_attempts(&self) -> u32 {
        match self {
            ProbeFailurePolicy::TreatAsNew => 0,
            ProbeFailurePolicy::Retry { attempts } => *attempts,
        }
    }
}

/// Use case for publishing one note to the remote repository
pub struct PublishPostUseCase {
    remote: Arc<dyn IRemoteRepository + Send + Sync>,
    probe_policy: ProbeFailurePolicy,
}

impl PublishPostUseCase {
    /// Creates a new PublishPostUseCase
    ///
    /// # Arguments
    ///
    /// * `remote` - Remote content store to probe and write
    pub fn new(remote: Arc<dyn IRemoteRepository + Send + Sync>) -> Self {
        Self {
            remote,
            probe_policy: ProbeFailurePolicy::default(),
        }
    }

    /// Sets how probe failures are handled
    pub fn with_probe_policy(mut self, policy: ProbeFailurePolicy) -> Self {
        self.probe_policy = policy;
        self
    }

    pub fn probe_policy(&self) -> ProbeFailurePolicy {
        self.probe_policy
    }

    /// Publishes `intent` using the configuration snapshot `config`
    ///
    /// Never returns an error: configuration problems, an unusable title
    /// and rejected writes all end in a failed [`PublishResult`].
    pub async fn publish(
        &self,
        config: &PluginConfiguration,
        intent: &PublishIntent,
    ) -> PublishResult {
        let publish_id = PublishId::new();
        let span = info_span!("publish", %publish_id, source = intent.source_file_path());

        async {
            let mut state = PublishState::Idle;
            let mut final_path = String::new();

            let outcome = self
                .execute(config, intent, &mut state, &mut final_path)
                .await;

            let terminal = if outcome.is_ok() {
                PublishState::Succeeded
            } else {
                PublishState::Failed
            };
            if let Err(err) = state.advance(terminal) {
                warn!(error = %err, "Unexpected publish state transition");
            }

            match outcome {
                Ok(written) => {
                    info!(
                        path = %final_path,
                        created = written.created,
                        commit = written.commit_id.as_deref().unwrap_or("-"),
                        "Post published"
                    );
                    PublishResult::succeeded(publish_id, final_path, written.created)
                }
                Err(err) => {
                    warn!(path = %final_path, error = %err, "Publish failed");
                    PublishResult::failed(publish_id, final_path, err.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn execute(
        &self,
        config: &PluginConfiguration,
        intent: &PublishIntent,
        state: &mut PublishState,
        final_path: &mut String,
    ) -> Result<WrittenObject, PublishError> {
        // Resolving: every precondition is checked before the first network call
        state.advance(PublishState::Resolving)?;
        let (coordinates, resolved) = resolve_target(config, intent)?;
        *final_path = resolved.path.clone();
        debug!(repository = %coordinates, path = %resolved.path, "Destination resolved");

        // Probing
        state.advance(PublishState::Probing)?;
        let existing = self.probe(&coordinates, &resolved.path).await;

        // Writing
        state.advance(PublishState::Writing)?;
        let request = WriteRequest {
            coordinates,
            path: resolved.path,
            content: codec::encode(intent.raw_content()),
            message: format!("{COMMIT_MESSAGE_PREFIX}{}", intent.title()),
            revision_token: existing.revision_token,
        };
        debug!(
            path = %request.path,
            bytes = request.content.len(),
            update = request.revision_token.is_some(),
            "Writing post"
        );

        self.remote
            .write(&request)
            .await
            .map_err(|failure| PublishError::RemoteWrite(failure.reason))
    }

    /// Looks up the destination, folding failures per the probe policy
    async fn probe(&self, coordinates: &RepositoryCoordinates, path: &str) -> RemoteObjectRef {
        let extra_attempts = self.probe_policy.extra_attempts();
        let mut attempt = 0;

        loop {
            match self.remote.probe(coordinates, path).await {
                ProbeOutcome::Found(found) => {
                    debug!(path, "Destination exists, updating");
                    return RemoteObjectRef {
                        path: path.to_string(),
                        revision_token: found.revision_token,
                    };
                }
                ProbeOutcome::NotFound => {
                    debug!(path, "Destination does not exist, creating");
                    return RemoteObjectRef::absent(path);
                }
                ProbeOutcome::TransientError(reason) if attempt < extra_attempts => {
                    attempt += 1;
                    warn!(path, attempt, %reason, "Probe failed, retrying");
                }
                ProbeOutcome::TransientError(reason) => {
                    warn!(path, %reason, "Probe failed, treating destination as new");
                    return RemoteObjectRef::absent(path);
                }
            }
        }
    }
}

/// Checks the configuration and computes the destination path
fn resolve_target(
    config: &PluginConfiguration,
    intent: &PublishIntent,
) -> Result<(RepositoryCoordinates, ResolvedPath), PublishError> {
    if !config.has_credential() {
        return Err(PublishError::missing_credential());
    }

    let coordinates = config
        .coordinates()
        .map_err(|e| PublishError::Configuration(e.to_string()))?;

    let resolved = resolve(
        &config.posts_path,
        config.use_category_folders,
        intent.categories(),
        intent.title(),
    );
    if resolved.has_empty_slug() {
        return Err(PublishError::InvalidTarget(format!(
            "title {:?} has no characters usable in a file name",
            intent.title()
        )));
    }
    if resolved.has_relative_segment() {
        return Err(PublishError::InvalidTarget(format!(
            "path {:?} contains a relative segment",
            resolved.path
        )));
    }

    Ok((coordinates, resolved))
}
