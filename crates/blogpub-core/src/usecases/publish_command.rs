//! "Publish to Blog" command
//!
//! Runs one user-triggered publish from the host's command palette:
//! precondition checks, intake dialog, orchestrator run and exactly one
//! outcome notice. Nothing escapes to the host; every failure ends up in
//! a notice and in the returned [`CommandOutcome`].

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::PluginConfiguration;
use crate::domain::errors::PublishError;
use crate::domain::intent::PublishDraft;
use crate::domain::publish::PublishResult;
use crate::ports::{
    IDocumentSource, INotificationService, IPublishIntake, IRemoteRepository, Notification,
};
use crate::usecases::publish_post::{ProbeFailurePolicy, PublishPostUseCase};

/// Identifier the host registers the command under
pub const COMMAND_ID: &str = "publish-to-blog";

/// Human-readable command name
pub const COMMAND_NAME: &str = "Publish to Blog";

/// Progress notice shown once the user confirmed the dialog
pub const PUBLISHING_NOTICE: &str = "Publishing...";

/// Builds a remote repository client from a configuration snapshot
pub type RemoteFactory = Arc<
    dyn Fn(&PluginConfiguration) -> anyhow::Result<Arc<dyn IRemoteRepository + Send + Sync>>
        + Send
        + Sync,
>;

/// How a command invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A precondition failed before the dialog was shown or before any
    /// network call was made
    Rejected(PublishError),
    /// The user dismissed the dialog
    Cancelled,
    /// The orchestrator ran; the result may be a success or a failure
    Completed(PublishResult),
}

impl CommandOutcome {
    /// Returns true if a post was written
    pub fn is_published(&self) -> bool {
        matches!(self, CommandOutcome::Completed(result) if result.is_success())
    }
}

/// Use case behind the "Publish to Blog" command
pub struct PublishCommandUseCase {
    documents: Arc<dyn IDocumentSource + Send + Sync>,
    intake: Arc<dyn IPublishIntake + Send + Sync>,
    notifications: Arc<dyn INotificationService + Send + Sync>,
    remote_factory: RemoteFactory,
    probe_policy: ProbeFailurePolicy,
}

impl PublishCommandUseCase {
    pub fn new(
        documents: Arc<dyn IDocumentSource + Send + Sync>,
        intake: Arc<dyn IPublishIntake + Send + Sync>,
        notifications: Arc<dyn INotificationService + Send + Sync>,
        remote_factory: RemoteFactory,
    ) -> Self {
        Self {
            documents,
            intake,
            notifications,
            remote_factory,
            probe_policy: ProbeFailurePolicy::default(),
        }
    }

    /// Sets the probe policy handed to the orchestrator
    pub fn with_probe_policy(mut self, policy: ProbeFailurePolicy) -> Self {
        self.probe_policy = policy;
        self
    }

    /// Runs the command against the configuration snapshot `config`
    #[instrument(skip_all, fields(command = COMMAND_ID))]
    pub async fn execute(&self, config: &PluginConfiguration) -> CommandOutcome {
        let outcome = self.run(config).await;

        match &outcome {
            CommandOutcome::Rejected(err) => {
                info!(error = %err, "Publish rejected");
                self.notify(Notification::error(err.to_string())).await;
            }
            CommandOutcome::Cancelled => {
                debug!("Publish dialog dismissed");
            }
            CommandOutcome::Completed(result) => match result.error_message() {
                None => {
                    self.notify(Notification::publish(format!(
                        "Published: {}",
                        result.file_name()
                    )))
                    .await;
                }
                Some(reason) => {
                    self.notify(Notification::error(format!("Failed to publish: {reason}")))
                        .await;
                }
            },
        }

        outcome
    }

    async fn run(&self, config: &PluginConfiguration) -> CommandOutcome {
        if !config.has_credential() {
            return CommandOutcome::Rejected(PublishError::missing_credential());
        }
        if let Err(e) = config.coordinates() {
            return CommandOutcome::Rejected(PublishError::Configuration(e.to_string()));
        }

        let Some(document) = self.documents.active_document() else {
            return CommandOutcome::Rejected(PublishError::NoActiveDocument);
        };

        let content = match self.documents.read(&document).await {
            Ok(content) => content,
            Err(e) => {
                return CommandOutcome::Rejected(PublishError::DocumentRead(format!("{e:#}")));
            }
        };

        let draft = PublishDraft::new(&document.path, &document.basename, content);
        let Some(draft) = self.intake.confirm(draft, config).await else {
            return CommandOutcome::Cancelled;
        };

        let remote = match (self.remote_factory)(config) {
            Ok(remote) => remote,
            Err(e) => {
                return CommandOutcome::Rejected(PublishError::Configuration(format!("{e:#}")));
            }
        };

        self.notify(Notification::progress(PUBLISHING_NOTICE)).await;

        let orchestrator = PublishPostUseCase::new(remote).with_probe_policy(self.probe_policy);
        let result = orchestrator.publish(config, &draft.into_intent()).await;
        CommandOutcome::Completed(result)
    }

    async fn notify(&self, notification: Notification) {
        if let Err(e) = self.notifications.notify(&notification).await {
            warn!(error = %e, message = %notification.message, "Failed to deliver notice");
        }
    }
}
