//! Model gateway abstraction layer for ArtDoc.
//!
//! This crate defines the provider-neutral contract between the feature adapters and
//! whatever hosted generative model sits behind them: ordered multimodal
//! [`ContentPart`]s go in, a [`RawResponse`] envelope comes out.

mod response;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use response::{
    Candidate, CandidateContent, PromptFeedback, RawResponse, ResponsePart, UsageMetadata,
    extract_text,
};

/// Represents an error that can occur when talking to the model gateway.
///
/// Every variant is a transport-level failure: the request never produced a usable
/// response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelError {
    /// An error occurred while sending the request (network issues, timeouts, invalid request).
    #[error("Request Error: {0}")]
    RequestError(String),

    /// The service answered with a non-success status.
    #[error("Model Response Error: {0}")]
    ModelResponseError(String),

    /// The response envelope could not be deserialized.
    #[error("Serialization Error: {0}")]
    SerializationError(String),

    /// The API key was rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The model provider is not supported or configured.
    #[error("Unsupported Model Provider: {0}")]
    UnsupportedModelProvider(String),

    /// Provider quota exceeded or rate limit hit.
    #[error("Provider '{provider}' quota exceeded{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    QuotaExceeded {
        /// The provider name (e.g., "gemini").
        provider: String,
        /// Optional error message from the provider.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Other unexpected errors.
    #[error("Other Model Error: {0}")]
    Other(String),
}

/// One ordered unit of a model request.
///
/// Earlier parts are treated by the model as higher-priority context, so adapters
/// place system instructions before the user payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text {
        /// The text content.
        value: String,
    },
    /// Binary payload carried inline.
    InlineBinary {
        /// Standard base64 encoding of the payload.
        data: String,
        /// MIME type of the decoded payload (e.g., "image/png").
        mime_type: String,
    },
}

impl ContentPart {
    /// Creates a text part.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text { value: value.into() }
    }

    /// Creates an inline binary part from already base64-encoded data.
    pub fn inline_binary(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::InlineBinary { data: data.into(), mime_type: mime_type.into() }
    }

    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            Self::InlineBinary { .. } => None,
        }
    }

    /// Returns the MIME type if this is a binary part.
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::InlineBinary { mime_type, .. } => Some(mime_type),
        }
    }
}

/// A trait for sending content to a hosted generative model.
///
/// Gateways must be `Send + Sync` so a single handle, built at startup, can be shared
/// by every adapter.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Sends one `generateContent` request.
    ///
    /// # Arguments
    /// * `model` - The model name (e.g., "gemini-2.5-flash")
    /// * `parts` - Non-empty, ordered request parts
    ///
    /// # Errors
    /// Returns a `ModelError` on network, authentication, quota, or envelope failures.
    async fn generate(
        &self,
        model: &str,
        parts: &[ContentPart],
    ) -> Result<RawResponse, ModelError>;

    /// Returns a short provider name used in logs (e.g., "gemini").
    fn provider(&self) -> &str;
}
