//! Settings editing surface
//!
//! [`Settings`] is the only owner allowed to mutate the
//! [`PluginConfiguration`]. Every mutation is persisted through the
//! [`ISettingsStorage`] port before it returns; readers take an immutable
//! [`Settings::snapshot`] at the start of an operation.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::PluginConfiguration;
use crate::ports::ISettingsStorage;

/// Process-wide configuration with explicit load/mutate/persist operations
pub struct Settings {
    current: PluginConfiguration,
    storage: Arc<dyn ISettingsStorage + Send + Sync>,
}

impl Settings {
    /// Loads the stored configuration, falling back to defaults when
    /// nothing has been stored yet
    ///
    /// # Errors
    /// Returns an error if the storage exists but cannot be read
    pub async fn load(storage: Arc<dyn ISettingsStorage + Send + Sync>) -> Result<Self> {
        let current = match storage
            .load()
            .await
            .context("Failed to load plugin settings")?
        {
            Some(mut config) => {
                config.dedup_categories();
                config
            }
            None => {
                info!("No stored settings found, using defaults");
                PluginConfiguration::default()
            }
        };

        Ok(Self { current, storage })
    }

    /// Immutable copy of the current configuration
    pub fn snapshot(&self) -> PluginConfiguration {
        self.current.clone()
    }

    pub async fn set_credential(&mut self, credential: impl Into<String>) -> Result<()> {
        let credential = credential.into();
        self.update("credential", |c| c.credential = credential).await
    }

    pub async fn set_repository(&mut self, repository: impl Into<String>) -> Result<()> {
        let repository = repository.into();
        self.update("repository", |c| c.repository = repository).await
    }

    pub async fn set_branch(&mut self, branch: impl Into<String>) -> Result<()> {
        let branch = branch.into();
        self.update("branch", |c| c.branch = branch).await
    }

    pub async fn set_posts_path(&mut self, posts_path: impl Into<String>) -> Result<()> {
        let posts_path = posts_path.into();
        self.update("posts_path", |c| c.posts_path = posts_path).await
    }

    pub async fn set_use_category_folders(&mut self, enabled: bool) -> Result<()> {
        self.update("use_category_folders", |c| c.use_category_folders = enabled)
            .await
    }

    pub async fn set_api_base_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        self.update("api_base_url", |c| c.api_base_url = url).await
    }

    /// Appends a category
    ///
    /// The name is trimmed. Blank names and names already in the list are
    /// ignored without touching storage.
    ///
    /// # Returns
    /// `true` if the category was added
    pub async fn add_category(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.current.categories.iter().any(|c| c == name) {
            debug!(category = name, "Category not added (blank or duplicate)");
            return Ok(false);
        }

        self.update("categories", |c| c.categories.push(name.to_string()))
            .await?;
        Ok(true)
    }

    /// Removes the category at `index`
    ///
    /// # Returns
    /// The removed name, or `None` if `index` is out of range
    pub async fn remove_category(&mut self, index: usize) -> Result<Option<String>> {
        let Some(removed) = self.current.categories.get(index).cloned() else {
            return Ok(None);
        };

        self.update("categories", |c| {
            c.categories.remove(index);
        })
        .await?;
        Ok(Some(removed))
    }

    /// Applies `change` to a copy, persists it, then makes it current
    ///
    /// On a failed save the in-memory configuration is left untouched.
    async fn update(
        &mut self,
        field: &str,
        change: impl FnOnce(&mut PluginConfiguration),
    ) -> Result<()> {
        let mut next = self.current.clone();
        change(&mut next);

        self.storage
            .save(&next)
            .await
            .with_context(|| format!("Failed to persist settings after changing {field}"))?;

        self.current = next;
        debug!(field, "Settings persisted");
        Ok(())
    }
}
