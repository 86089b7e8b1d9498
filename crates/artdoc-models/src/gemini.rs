//! Google Gemini gateway implementation.
//!
//! This module provides an implementation of the `ModelGateway` trait for Google's
//! Gemini `generateContent` endpoint.

use artdoc_abstraction::{ContentPart, ModelError, ModelGateway, RawResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::env;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Default endpoint root for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["ARTDOC_API_KEY", "GEMINI_API_KEY"];

/// Google Gemini gateway.
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    /// The API key for authentication.
    api_key: String,
    /// The base URL for the Gemini API.
    base_url: String,
    /// HTTP client for making requests.
    client: Client,
    /// Per-request timeout; `None` waits indefinitely.
    timeout: Option<Duration>,
}

impl GeminiGateway {
    /// Creates a new `GeminiGateway` with the API key read from the environment.
    ///
    /// # Errors
    /// Returns a `ModelError` if neither `ARTDOC_API_KEY` nor `GEMINI_API_KEY` is set.
    #[allow(clippy::disallowed_methods)] // env::var is needed for API key loading
    pub fn new() -> Result<Self, ModelError> {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| env::var(name).ok().filter(|value| !value.trim().is_empty()))
            .ok_or_else(|| {
                ModelError::UnsupportedModelProvider(
                    "Neither ARTDOC_API_KEY nor GEMINI_API_KEY environment variable is set"
                        .to_string(),
                )
            })?;

        Ok(Self::with_api_key(api_key))
    }

    /// Creates a new `GeminiGateway` with an explicit API key.
    #[must_use]
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Overrides the endpoint root (used by tests and proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the per-request timeout. `None` disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the per-request timeout in effect.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the endpoint root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the `generateContent` URL, tolerating a `models/` prefix on the name.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Converts a content part to Gemini's part format.
    fn to_gemini_part(part: &ContentPart) -> GeminiPart {
        match part {
            ContentPart::Text { value } => GeminiPart::Text { text: value.clone() },
            ContentPart::InlineBinary { data, mime_type } => GeminiPart::InlineData {
                inline_data: GeminiInlineData { data: data.clone(), mime_type: mime_type.clone() },
            },
        }
    }

    fn build_request(parts: &[ContentPart]) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: parts.iter().map(Self::to_gemini_part).collect(),
            }],
        }
    }

    /// Maps a non-success status and body to a `ModelError`.
    fn map_error_status(status: StatusCode, error_text: String) -> ModelError {
        match status.as_u16() {
            401 | 403 => ModelError::Authentication(format!("({}): {}", status, error_text)),
            402 | 429 => {
                ModelError::QuotaExceeded { provider: "gemini".to_string(), message: Some(error_text) }
            }
            500..=599 => {
                ModelError::ModelResponseError(format!("Server error ({}): {}", status, error_text))
            }
            _ => ModelError::ModelResponseError(format!("API error ({}): {}", status, error_text)),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &str,
        parts: &[ContentPart],
    ) -> Result<RawResponse, ModelError> {
        if parts.is_empty() {
            return Err(ModelError::RequestError("Request must contain at least one part".to_string()));
        }

        debug!(
            model = %model,
            part_count = parts.len(),
            inline_parts = parts.iter().filter(|p| p.mime_type().is_some()).count(),
            "GeminiGateway generating content"
        );

        let url = self.endpoint(model);
        let request_body = Self::build_request(parts);

        let mut request = self.client.post(&url).header("x-goog-api-key", &self.api_key);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to Gemini API");
                if e.is_timeout() {
                    ModelError::RequestError(format!("Request timed out: {}", e))
                } else {
                    ModelError::RequestError(format!("Network error: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                status = %status,
                error = %error_text,
                "Gemini API returned error status"
            );
            return Err(Self::map_error_status(status, error_text));
        }

        let raw: RawResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Gemini API response");
            ModelError::SerializationError(format!("Failed to parse response: {}", e))
        })?;

        if let Some(reason) = raw.block_reason() {
            warn!(reason = %reason, "Gemini blocked the prompt");
        }
        debug!(
            candidates = raw.candidates.len(),
            finish_reason = ?raw.finish_reason(),
            "GeminiGateway received response"
        );

        Ok(raw)
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}

// Gemini API request structures

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
struct GeminiInlineData {
    data: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_models_prefix() {
        let gateway = GeminiGateway::with_api_key("test-key".to_string())
            .with_base_url("http://localhost:1234/v1beta/");
        assert_eq!(
            gateway.endpoint("models/gemini-2.5-flash"),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            gateway.endpoint("gemini-2.5-pro"),
            "http://localhost:1234/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_timeout_defaults_and_overrides() {
        let gateway = GeminiGateway::with_api_key("test-key".to_string());
        assert_eq!(gateway.timeout(), Some(DEFAULT_TIMEOUT));

        let gateway = gateway.with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(gateway.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(gateway.with_timeout(None).timeout(), None);
    }

    #[test]
    fn test_request_serialization_preserves_part_order() {
        let request = GeminiGateway::build_request(&[
            ContentPart::inline_binary("AAEC", "audio/webm"),
            ContentPart::text("Transcribe the audio"),
        ]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"inlineData": {"data": "AAEC", "mimeType": "audio/webm"}},
                        {"text": "Transcribe the audio"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_error_status_mapping() {
        let err = GeminiGateway::map_error_status(StatusCode::FORBIDDEN, "bad key".to_string());
        assert!(matches!(err, ModelError::Authentication(_)));

        let err = GeminiGateway::map_error_status(
            StatusCode::TOO_MANY_REQUESTS,
            "RESOURCE_EXHAUSTED".to_string(),
        );
        assert!(matches!(err, ModelError::QuotaExceeded { .. }));

        let err = GeminiGateway::map_error_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert!(err.to_string().contains("Server error"));

        let err = GeminiGateway::map_error_status(StatusCode::BAD_REQUEST, "nope".to_string());
        assert!(err.to_string().contains("API error"));
    }

    #[tokio::test]
    async fn test_empty_parts_rejected_before_io() {
        // Nothing listens here; an attempted request would surface as a network error.
        let gateway = GeminiGateway::with_api_key("test-key".to_string())
            .with_base_url("http://127.0.0.1:9");
        let err = gateway.generate("gemini-2.5-flash", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ModelError::RequestError("Request must contain at least one part".to_string())
        );
    }

    #[test]
    fn test_gemini_gateway_defaults() {
        let gateway = GeminiGateway::with_api_key("test-key".to_string());
        assert_eq!(gateway.base_url(), DEFAULT_BASE_URL);
        assert_eq!(gateway.provider(), "gemini");
    }
}
