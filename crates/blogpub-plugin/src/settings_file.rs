//! YAML settings file
//!
//! [`ISettingsStorage`] adapter that keeps the configuration in a single
//! YAML file, by default `$XDG_CONFIG_HOME/blogpub/config.yaml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blogpub_core::config::PluginConfiguration;
use blogpub_core::ports::ISettingsStorage;
use tracing::debug;

/// Settings stored as YAML at a fixed path
#[derive(Debug, Clone)]
pub struct YamlSettingsFile {
    path: PathBuf,
}

impl YamlSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file at [`PluginConfiguration::default_path`]
    pub fn at_default_location() -> Self {
        Self::new(PluginConfiguration::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ISettingsStorage for YamlSettingsFile {
    async fn load(&self) -> Result<Option<PluginConfiguration>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Settings file does not exist");
                return Ok(None);
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read {}", self.path.display())))
            }
        };
        let config = PluginConfiguration::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Settings loaded");
        Ok(Some(config))
    }

    async fn save(&self, config: &PluginConfiguration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let yaml = config.to_yaml()?;
        tokio::fs::write(&self.path, yaml)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
