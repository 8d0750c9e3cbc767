//! Settings storage port (driven/secondary port)
//!
//! Loads and persists the [`PluginConfiguration`] record. The host decides
//! where it lives (a YAML file, the host's plugin data store, ...).

use crate::config::PluginConfiguration;

/// Port trait for configuration persistence
#[async_trait::async_trait]
pub trait ISettingsStorage: Send + Sync {
    /// Loads the stored configuration
    ///
    /// # Returns
    /// `None` if nothing has been stored yet
    async fn load(&self) -> anyhow::Result<Option<PluginConfiguration>>;

    /// Persists `config`, replacing whatever was stored before
    async fn save(&self, config: &PluginConfiguration) -> anyhow::Result<()>;
}
