//! Facade over the feature adapters.
//!
//! A `ToolKit` owns the gateway handle built at startup and the model name, so front
//! ends can call tools without threading either through every call site.

use crate::adapters;
use crate::config::AppConfig;
use crate::encoding::{self, BinarySource, EncodedPayload};
use crate::error::ReadError;
use crate::prompts::{DIAGRAM_PROMPT, DRAW_AND_FIND_PROMPT};
use crate::types::{CodeAnalysis, ConversationTurn, TranscriptionResult, TranslationResult};
use artdoc_abstraction::ModelGateway;
use artdoc_models::GatewayFactory;
use std::fmt;
use std::sync::Arc;

/// Shared, cloneable entry point to every tool.
#[derive(Clone)]
pub struct ToolKit {
    gateway: Arc<dyn ModelGateway>,
    model: String,
}

impl fmt::Debug for ToolKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolKit")
            .field("provider", &self.gateway.provider())
            .field("model", &self.model)
            .finish()
    }
}

impl ToolKit {
    pub fn new(gateway: Arc<dyn ModelGateway>, model: impl Into<String>) -> Self {
        Self { gateway, model: model.into() }
    }

    /// Builds the gateway described by `config` and wraps it.
    pub fn from_config(config: &AppConfig) -> crate::Result<Self> {
        let gateway = GatewayFactory::create(config.gateway_config()?)?;
        Ok(Self::new(gateway, config.model()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn gateway(&self) -> &dyn ModelGateway {
        self.gateway.as_ref()
    }

    pub async fn continue_conversation(
        &self,
        history: &[ConversationTurn],
        question: &str,
        document: &str,
    ) -> String {
        adapters::continue_conversation(self.gateway(), &self.model, history, question, document)
            .await
    }

    pub async fn perform_calculation(&self, query: &str) -> String {
        adapters::perform_calculation(self.gateway(), &self.model, query).await
    }

    pub async fn translate_text(&self, text: &str, target_language: &str) -> TranslationResult {
        adapters::translate_text(self.gateway(), &self.model, text, target_language).await
    }

    pub async fn interpret_code(&self, code: &str) -> CodeAnalysis {
        adapters::interpret_code(self.gateway(), &self.model, code).await
    }

    pub async fn generate_text_from_image(&self, prompt: &str, image: &EncodedPayload) -> String {
        adapters::generate_text_from_image(self.gateway(), &self.model, prompt, image).await
    }

    pub async fn transcribe_audio(&self, audio: &EncodedPayload) -> TranscriptionResult {
        adapters::transcribe_audio(self.gateway(), &self.model, audio).await
    }

    /// Encodes `source` and asks `prompt` about it.
    ///
    /// Read failures are returned to the caller; nothing is sent in that case.
    pub async fn ask_about_image(
        &self,
        prompt: &str,
        source: &dyn BinarySource,
    ) -> Result<String, ReadError> {
        let image = encoding::encode(source).await?;
        Ok(self.generate_text_from_image(prompt, &image).await)
    }

    pub async fn interpret_diagram(&self, source: &dyn BinarySource) -> Result<String, ReadError> {
        self.ask_about_image(DIAGRAM_PROMPT, source).await
    }

    pub async fn find_marked_region(&self, source: &dyn BinarySource) -> Result<String, ReadError> {
        self.ask_about_image(DRAW_AND_FIND_PROMPT, source).await
    }

    /// Encodes a recording and transcribes it.
    pub async fn transcribe(
        &self,
        source: &dyn BinarySource,
    ) -> Result<TranscriptionResult, ReadError> {
        let audio = encoding::encode(source).await?;
        Ok(self.transcribe_audio(&audio).await)
    }
}
