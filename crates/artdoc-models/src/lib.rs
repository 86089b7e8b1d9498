//! Gateway implementations for ArtDoc.
//!
//! This crate provides concrete implementations of the `ModelGateway` trait.
//!
//! # Supported Providers
//!
//! - **Mock**: Scripted responses for testing and offline development
//! - **Gemini**: Google's Gemini models (API key required)

pub mod factory;
pub mod gemini;

use artdoc_abstraction::{ContentPart, ModelError, ModelGateway, RawResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

pub use factory::{GatewayConfig, GatewayFactory, GatewayType};
pub use gemini::GeminiGateway;

/// A call observed by [`MockGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Model name passed to `generate`.
    pub model: String,
    /// Parts passed to `generate`, in order.
    pub parts: Vec<ContentPart>,
}

/// A scripted implementation of `ModelGateway` for tests and offline use.
///
/// Queued replies are served first-in first-out. Once the queue is empty the gateway
/// answers with the sticky reply set by [`MockGateway::always`], or echoes the last
/// text part.
#[derive(Debug, Default)]
pub struct MockGateway {
    queue: Mutex<VecDeque<Result<RawResponse, ModelError>>>,
    sticky: Mutex<Option<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGateway {
    /// Creates an echoing `MockGateway`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that always answers with `text`.
    #[must_use]
    pub fn always(text: impl Into<String>) -> Self {
        let gateway = Self::default();
        *gateway.sticky.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.into());
        gateway
    }

    /// Queues a text reply.
    pub fn push_text(&self, text: impl Into<String>) -> &Self {
        self.push_response(RawResponse::from_text(text))
    }

    /// Queues a full response envelope.
    pub fn push_response(&self, response: RawResponse) -> &Self {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).push_back(Ok(response));
        self
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: ModelError) -> &Self {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).push_back(Err(error));
        self
    }

    /// Returns every call seen so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn generate(
        &self,
        model: &str,
        parts: &[ContentPart],
    ) -> Result<RawResponse, ModelError> {
        debug!(model = %model, part_count = parts.len(), "MockGateway generating content");

        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall { model: model.to_string(), parts: parts.to_vec() });

        if parts.is_empty() {
            return Err(ModelError::RequestError("Request must contain at least one part".to_string()));
        }

        if let Some(reply) = self.queue.lock().unwrap_or_else(PoisonError::into_inner).pop_front() {
            return reply;
        }

        if let Some(text) = self.sticky.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            return Ok(RawResponse::from_text(text));
        }

        let last_text = parts.iter().rev().find_map(ContentPart::as_text).unwrap_or_default();
        Ok(RawResponse::from_text(format!("Mock response for: {last_text}")))
    }

    fn provider(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_serves_queue_then_echoes() {
        let gateway = MockGateway::new();
        gateway.push_text("first").push_error(ModelError::Other("boom".to_string()));

        let parts = vec![ContentPart::text("system"), ContentPart::text("question")];
        let first = gateway.generate("m", &parts).await.unwrap();
        assert_eq!(first.extract_text(), "first");

        let second = gateway.generate("m", &parts).await;
        assert!(second.is_err());

        let third = gateway.generate("m", &parts).await.unwrap();
        assert_eq!(third.extract_text(), "Mock response for: question");
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_gateway_records_calls() {
        let gateway = MockGateway::always("4");
        let parts = vec![ContentPart::text("2+2")];
        gateway.generate("gemini-2.5-flash", &parts).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "gemini-2.5-flash");
        assert_eq!(calls[0].parts, parts);
    }

    #[tokio::test]
    async fn test_mock_gateway_rejects_empty_parts() {
        let gateway = MockGateway::always("never");
        assert!(gateway.generate("m", &[]).await.is_err());
    }
}
