//! Blogpub Plugin - host integration for publishing notes to a blog repository
//!
//! This crate is the composition root. It:
//! - Loads the stored settings and installs the tracing subscriber on load
//! - Wires the GitHub adapter into the "Publish to Blog" command
//! - Exposes the settings surface the host's settings tab edits
//!
//! The host provides the editor, dialog and notice adapters through
//! [`HostServices`]; everything else is owned here.

pub mod settings_file;
pub mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use blogpub_core::config::PluginConfiguration;
use blogpub_core::ports::{
    IDocumentSource, INotificationService, IPublishIntake, IRemoteRepository, ISettingsStorage,
};
use blogpub_core::settings::Settings;
use blogpub_core::usecases::{
    CommandOutcome, ProbeFailurePolicy, PublishCommandUseCase, RemoteFactory, COMMAND_ID,
    COMMAND_NAME,
};
use blogpub_github::GitHubRepository;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub use settings_file::YamlSettingsFile;

/// Adapters supplied by the host application
pub struct HostServices {
    /// Active note and file reads
    pub documents: Arc<dyn IDocumentSource + Send + Sync>,
    /// Filename/category dialog
    pub intake: Arc<dyn IPublishIntake + Send + Sync>,
    /// Notice area
    pub notifications: Arc<dyn INotificationService + Send + Sync>,
}

/// Builds a fresh [`GitHubRepository`] from every configuration snapshot
pub fn github_remote_factory() -> RemoteFactory {
    Arc::new(|config: &PluginConfiguration| {
        let remote: Arc<dyn IRemoteRepository + Send + Sync> =
            Arc::new(GitHubRepository::from_config(config));
        Ok(remote)
    })
}

// ============================================================================
// BlogPublisherPlugin
// ============================================================================

/// The loaded plugin
pub struct BlogPublisherPlugin {
    settings: Arc<Mutex<Settings>>,
    command: PublishCommandUseCase,
}

impl BlogPublisherPlugin {
    /// Loads settings, initialises tracing and registers the command
    ///
    /// # Errors
    /// Returns an error if stored settings exist but cannot be read
    pub async fn on_load(
        storage: Arc<dyn ISettingsStorage + Send + Sync>,
        host: HostServices,
    ) -> Result<Self> {
        Self::load_with(storage, host, github_remote_factory()).await
    }

    /// Same as [`on_load`](Self::on_load) with a custom remote factory
    pub async fn load_with(
        storage: Arc<dyn ISettingsStorage + Send + Sync>,
        host: HostServices,
        remote_factory: RemoteFactory,
    ) -> Result<Self> {
        let settings = Settings::load(storage)
            .await
            .context("Failed to load Blogpub settings")?;
        let snapshot = settings.snapshot();

        telemetry::init_tracing(&snapshot.logging);
        info!(
            version = env!("CARGO_PKG_VERSION"),
            command = COMMAND_ID,
            "Blogpub plugin loaded"
        );
        for problem in snapshot.validate() {
            warn!(%problem, "Configuration incomplete");
        }

        let command = PublishCommandUseCase::new(
            host.documents,
            host.intake,
            host.notifications,
            remote_factory,
        );

        Ok(Self {
            settings: Arc::new(Mutex::new(settings)),
            command,
        })
    }

    /// Sets how failed existence probes are handled
    pub fn with_probe_policy(mut self, policy: ProbeFailurePolicy) -> Self {
        self.command = self.command.with_probe_policy(policy);
        self
    }

    /// Identifier the command is registered under
    pub fn command_id(&self) -> &'static str {
        COMMAND_ID
    }

    /// Name shown in the host's command palette
    pub fn command_name(&self) -> &'static str {
        COMMAND_NAME
    }

    /// Runs the "Publish to Blog" command
    ///
    /// The configuration is snapshotted once, so edits made while the
    /// dialog is open apply to the next invocation.
    pub async fn publish_to_blog(&self) -> CommandOutcome {
        let snapshot = self.settings.lock().await.snapshot();
        self.command.execute(&snapshot).await
    }

    /// Settings surface for the host's settings tab
    pub fn settings(&self) -> Arc<Mutex<Settings>> {
        Arc::clone(&self.settings)
    }

    /// Current configuration
    pub async fn configuration(&self) -> PluginConfiguration {
        self.settings.lock().await.snapshot()
    }

    pub fn on_unload(&self) {
        info!("Blogpub plugin unloaded");
    }
}
