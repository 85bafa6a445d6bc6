//! Configuration management for rt.
//!
//! Parses `rt.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `delivery.base_url`
//! - `delivery.space_id`
//! - `delivery.access_token`
//! - `delivery.environment`
//! - `delivery.locale`
//! - `delivery.content_type`

mod expand;

use std::path::{Path, PathBuf};

use rt_renderer::{DEFAULT_MAX_DEPTH, RenderOptions, UnknownNodePolicy};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override delivery locale.
    pub locale: Option<String>,
    /// Override delivery content type filter.
    pub content_type: Option<String>,
    /// Override unknown node policy.
    pub unknown_nodes: Option<UnknownNodePolicy>,
    /// Override render depth limit.
    pub max_depth: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rt.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Content delivery API configuration (optional section).
    pub delivery: Option<DeliveryConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Handling of node types outside the known set.
    pub unknown_nodes: UnknownNodePolicy,
    /// Maximum nesting depth below the top-level node sequence.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unknown_nodes: UnknownNodePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Build renderer options from this section.
    #[must_use]
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_unknown_nodes(self.unknown_nodes)
            .with_max_depth(self.max_depth)
    }
}

/// Content delivery API configuration.
#[derive(Debug, Deserialize)]
pub struct DeliveryConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Space identifier.
    pub space_id: String,
    /// Delivery access token.
    pub access_token: String,
    /// Environment within the space.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Locale requested for entries.
    #[serde(default)]
    pub locale: Option<String>,
    /// Content type filter for entry listings.
    #[serde(default)]
    pub content_type: Option<String>,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://cdn.contentful.com".to_owned()
}

fn default_environment() -> String {
    "master".to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

impl DeliveryConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "delivery.base_url")?;
        require_http_url(&self.base_url, "delivery.base_url")?;
        require_non_empty(&self.space_id, "delivery.space_id")?;
        require_non_empty(&self.access_token, "delivery.access_token")?;
        require_non_empty(&self.environment, "delivery.environment")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "delivery.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`delivery.access_token`").
        field: String,
        /// Error message (e.g., "${`RT_ACCESS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rt.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(policy) = settings.unknown_nodes {
            self.render.unknown_nodes = policy;
        }
        if let Some(max_depth) = settings.max_depth {
            self.render.max_depth = max_depth;
        }
        if let Some(delivery) = self.delivery.as_mut() {
            if let Some(locale) = &settings.locale {
                delivery.locale = Some(locale.clone());
            }
            if let Some(content_type) = &settings.content_type {
                delivery.content_type = Some(content_type.clone());
            }
        }
    }

    /// Get validated delivery configuration.
    ///
    /// Use this instead of accessing the `delivery` field directly when the
    /// command talks to the content API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_delivery(&self) -> Result<&DeliveryConfig, ConfigError> {
        let delivery = self.delivery.as_ref().ok_or_else(|| {
            ConfigError::Validation("[delivery] section required in config".into())
        })?;
        delivery.validate()?;
        Ok(delivery)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[delivery]` section is validated lazily by
    /// [`require_delivery`](Self::require_delivery).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.max_depth == 0 {
            return Err(ConfigError::Validation(
                "render.max_depth must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(delivery) = &mut self.delivery {
            delivery.expand_env()?;
        }
        Ok(())
    }
}
