//! Gateway factory for creating gateway instances from configuration.
//!
//! The gateway is built once at startup and handed to every adapter as an explicit
//! `Arc<dyn ModelGateway>`.

use crate::gemini::DEFAULT_TIMEOUT;
use crate::{GeminiGateway, MockGateway};
use artdoc_abstraction::{ModelError, ModelGateway};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Gateway type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayType {
    /// Scripted gateway for testing and offline use.
    Mock,
    /// Google Gemini.
    Gemini,
}

impl FromStr for GatewayType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "gemini" | "google" => Ok(Self::Gemini),
            other => Err(ModelError::UnsupportedModelProvider(other.to_string())),
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// The type of gateway to create.
    pub gateway_type: GatewayType,
    /// Optional API key (if not provided, will be loaded from environment).
    pub api_key: Option<String>,
    /// Optional endpoint root override.
    pub base_url: Option<String>,
    /// Per-request timeout; `None` disables it.
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Creates a new `GatewayConfig` with the given type and default timeout.
    #[must_use]
    pub fn new(gateway_type: GatewayType) -> Self {
        Self { gateway_type, api_key: None, base_url: None, timeout: Some(DEFAULT_TIMEOUT) }
    }

    /// Sets the API key for this configuration.
    #[must_use]
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the endpoint root for this configuration.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Factory for creating gateway instances.
pub struct GatewayFactory;

impl GatewayFactory {
    /// Creates a gateway instance from the given configuration.
    ///
    /// # Errors
    /// Returns a `ModelError` if gateway creation fails (e.g., missing API key).
    pub fn create(config: GatewayConfig) -> Result<Arc<dyn ModelGateway>, ModelError> {
        debug!(gateway_type = ?config.gateway_type, "Creating gateway instance");

        match config.gateway_type {
            GatewayType::Mock => Ok(Arc::new(MockGateway::new())),
            GatewayType::Gemini => {
                let gateway = match config.api_key {
                    Some(api_key) => GeminiGateway::with_api_key(api_key),
                    None => GeminiGateway::new().map_err(|e| {
                        error!(error = %e, "Failed to create Gemini gateway");
                        e
                    })?,
                };
                let gateway = match config.base_url {
                    Some(base_url) => gateway.with_base_url(base_url),
                    None => gateway,
                };
                Ok(Arc::new(gateway.with_timeout(config.timeout)))
            }
        }
    }
}
