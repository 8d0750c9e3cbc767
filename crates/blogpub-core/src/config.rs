//! Configuration module for Blogpub.
//!
//! Provides the typed configuration record that maps to the YAML settings
//! file, with YAML parsing, validation, defaults, and a builder pattern
//! for programmatic use.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::newtypes::RepositoryCoordinates;

/// Default REST endpoint of the remote content store
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

// ---------------------------------------------------------------------------
// PluginConfiguration
// ---------------------------------------------------------------------------

/// Top-level configuration for Blogpub.
///
/// Missing keys in a stored file fall back to their defaults, so older
/// settings files keep loading after new fields are added.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfiguration {
    /// Personal access token sent as a bearer credential.
    pub credential: String,
    /// Target repository as `owner/name`.
    pub repository: String,
    /// Branch posts are committed to.
    pub branch: String,
    /// Repository folder that holds the posts.
    pub posts_path: String,
    /// Categories offered in the intake dialog (unique, ordered).
    pub categories: Vec<String>,
    /// Whether posts are placed in a sub-folder named after their category.
    pub use_category_folders: bool,
    /// REST endpoint of the remote content store.
    pub api_base_url: String,
    pub logging: LoggingConfig,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for PluginConfiguration {
    fn default() -> Self {
        Self {
            credential: String::new(),
            repository: String::new(),
            branch: "main".to_string(),
            posts_path: "posts".to_string(),
            categories: vec!["Tech".to_string(), "Life".to_string(), "Review".to_string()],
            use_category_folders: true,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

// The credential never shows up in logs.
impl std::fmt::Debug for PluginConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let credential = if self.credential.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("PluginConfiguration")
            .field("credential", &credential)
            .field("repository", &self.repository)
            .field("branch", &self.branch)
            .field("posts_path", &self.posts_path)
            .field("categories", &self.categories)
            .field("use_category_folders", &self.use_category_folders)
            .field("api_base_url", &self.api_base_url)
            .field("logging", &self.logging)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// YAML
// ---------------------------------------------------------------------------

impl PluginConfiguration {
    /// Parse configuration from YAML text.
    ///
    /// Duplicate categories are dropped, keeping the first.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let mut config: PluginConfiguration = serde_yaml::from_str(content)?;
        config.dedup_categories();
        Ok(config)
    }

    /// Serialize to YAML text.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/blogpub/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("blogpub")
            .join("config.yaml")
    }

    /// Returns true if a credential has been entered.
    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    /// Parses `repository` and `branch` into coordinates.
    pub fn coordinates(&self) -> Result<RepositoryCoordinates, DomainError> {
        RepositoryCoordinates::parse(&self.repository, &self.branch)
    }

    pub(crate) fn dedup_categories(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.categories.retain(|c| seen.insert(c.clone()));
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field, e.g. `"repository"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl PluginConfiguration {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is ready to publish with.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.has_credential() {
            errors.push(ValidationError {
                field: "credential".into(),
                message: "must be set to a token with repository write access".into(),
            });
        }

        match RepositoryCoordinates::parse(&self.repository, &self.branch) {
            Ok(_) => {}
            Err(DomainError::EmptyBranch) => errors.push(ValidationError {
                field: "branch".into(),
                message: "must not be empty".into(),
            }),
            Err(_) => errors.push(ValidationError {
                field: "repository".into(),
                message: format!("must be of the form owner/repo, got {:?}", self.repository),
            }),
        }

        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            if category.trim().is_empty() {
                errors.push(ValidationError {
                    field: "categories".into(),
                    message: "must not contain blank entries".into(),
                });
            } else if !seen.insert(category.as_str()) {
                errors.push(ValidationError {
                    field: "categories".into(),
                    message: format!("duplicate category {category:?}"),
                });
            }
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            errors.push(ValidationError {
                field: "api_base_url".into(),
                message: format!("must be an http(s) URL, got {:?}", self.api_base_url),
            });
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "must be one of {}, got {:?}",
                    VALID_LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`PluginConfiguration`] programmatically.
///
/// Starts from [`PluginConfiguration::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust
/// use blogpub_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .credential("ghp_example")
///     .repository("octocat/octocat.github.io")
///     .posts_path("_posts")
///     .build();
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: PluginConfiguration,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`PluginConfiguration::default`] values.
    pub fn new() -> Self {
        Self {
            config: PluginConfiguration::default(),
        }
    }

    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.config.credential = credential.into();
        self
    }

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.config.repository = repository.into();
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.config.branch = branch.into();
        self
    }

    pub fn posts_path(mut self, posts_path: impl Into<String>) -> Self {
        self.config.posts_path = posts_path.into();
        self
    }

    /// Replace the category list; duplicates are dropped, keeping the first.
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.categories = categories.into_iter().map(Into::into).collect();
        self.config.dedup_categories();
        self
    }

    pub fn use_category_folders(mut self, enabled: bool) -> Self {
        self.config.use_category_folders = enabled;
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_json(mut self, json: bool) -> Self {
        self.config.logging.json = json;
        self
    }

    /// Consume the builder and return the finished [`PluginConfiguration`].
    pub fn build(self) -> PluginConfiguration {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
