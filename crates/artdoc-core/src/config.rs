//! Configuration loading.
//!
//! Configuration precedence (highest first):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`ARTDOC_*`, plus `GEMINI_API_KEY` for the key)
//! 3. Explicit config file passed on the command line
//! 4. Local config file (`./.artdocrc`)
//! 5. Global config file (`~/.artdoc/config.toml`)
//! 6. Defaults
//!
//! A Gemini gateway without an API key is a fatal startup condition: [`AppConfig::load`]
//! refuses to return a configuration that cannot serve requests.

use crate::error::ConfigError;
use artdoc_models::gemini::{API_KEY_ENV_VARS, DEFAULT_BASE_URL};
use artdoc_models::{GatewayConfig, GatewayType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// ArtDoc configuration. Unset fields fall back to defaults through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gateway type ("gemini" or "mock")
    #[serde(default)]
    pub model_type: Option<String>,

    /// Model name sent with every request
    #[serde(default)]
    pub model: Option<String>,

    /// Endpoint root override
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds; 0 disables the timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// API key. Prefer the environment over storing it in a file.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Get default global configuration file path.
    pub fn default_global_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".artdoc")
            .join("config.toml")
    }

    /// Get default local configuration file path.
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".artdocrc")
    }

    /// Discover and merge the global and local configuration files.
    ///
    /// Missing files are skipped; malformed files are reported.
    pub fn discover() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for path in [Self::default_global_path(), Self::default_local_path()] {
            match Self::load_from_file(&path) {
                Ok(found) => {
                    debug!(path = %path.display(), "Loaded configuration file");
                    config.merge(&found);
                }
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(config)
    }

    /// Discover files, apply `explicit` and the process environment, without validating.
    pub fn load_unvalidated(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::discover()?;
        if let Some(path) = explicit {
            config.merge(&Self::load_from_file(path)?);
        }
        config.apply_env_from(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Full startup load: discovery, environment, then validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_unvalidated(explicit)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge another configuration into this one.
    ///
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &Self) {
        if let Some(ref model_type) = other.model_type {
            self.model_type = Some(model_type.clone());
        }
        if let Some(ref model) = other.model {
            self.model = Some(model.clone());
        }
        if let Some(ref base_url) = other.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(timeout_secs) = other.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
        if let Some(ref api_key) = other.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(model_type) = get("ARTDOC_MODEL_TYPE") {
            self.model_type = Some(model_type);
        }
        if let Some(model) = get("ARTDOC_MODEL") {
            self.model = Some(model);
        }
        if let Some(base_url) = get("ARTDOC_BASE_URL") {
            self.base_url = Some(base_url);
        }
        if let Some(timeout) = get("ARTDOC_TIMEOUT_SECS") {
            let secs = timeout.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue(format!("ARTDOC_TIMEOUT_SECS must be a number, got '{}'", timeout))
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(log_level) = get("ARTDOC_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }
        if let Some(api_key) = API_KEY_ENV_VARS.iter().find_map(|name| get(name)) {
            self.api_key = Some(api_key);
        }
        Ok(())
    }

    pub fn gateway_type(&self) -> Result<GatewayType, ConfigError> {
        self.model_type.as_deref().unwrap_or("gemini").parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "unknown model_type '{}' (expected 'gemini' or 'mock')",
                self.model_type.as_deref().unwrap_or_default()
            ))
        })
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Checks that the configuration can serve requests.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gateway_type = self.gateway_type()?;
        if gateway_type == GatewayType::Gemini
            && self.api_key.as_deref().is_none_or(|key| key.trim().is_empty())
        {
            return Err(ConfigError::MissingApiKey);
        }
        if self.model().trim().is_empty() {
            return Err(ConfigError::InvalidValue("model must not be empty".to_string()));
        }
        Ok(())
    }

    /// Builds the gateway configuration for the factory.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        self.validate()?;
        let mut config = GatewayConfig::new(self.gateway_type()?)
            .with_base_url(self.base_url().to_string())
            .with_timeout(self.timeout());
        if let Some(ref api_key) = self.api_key {
            config = config.with_api_key(api_key.clone());
        }
        Ok(config)
    }
}
