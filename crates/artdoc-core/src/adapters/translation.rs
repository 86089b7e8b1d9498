//! Translator.

use super::generate_text;
use crate::prompts::{TRANSLATION_EMPTY_INPUT, TRANSLATION_FALLBACK, translation_prompt};
use crate::types::TranslationResult;
use artdoc_abstraction::{ContentPart, ModelGateway};
use tracing::debug;

/// Translates `text` into `target_language` (a language code such as "es").
///
/// Blank input short-circuits with a prompt-for-input message and no gateway call.
pub async fn translate_text(
    gateway: &dyn ModelGateway,
    model: &str,
    text: &str,
    target_language: &str,
) -> TranslationResult {
    let result = |translated_text: String| TranslationResult {
        original_text: text.to_string(),
        translated_text,
        target_language: target_language.to_string(),
    };

    if text.trim().is_empty() {
        debug!("Skipping translation of blank input");
        return result(TRANSLATION_EMPTY_INPUT.to_string());
    }

    let parts = [ContentPart::text(translation_prompt(target_language, text))];

    match generate_text(gateway, model, "translation", &parts).await {
        Ok(translated) => result(translated),
        Err(_) => result(TRANSLATION_FALLBACK.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artdoc_abstraction::ModelError;
    use artdoc_models::MockGateway;

    #[tokio::test]
    async fn test_translate_hello() {
        let gateway = MockGateway::always("hola");
        let result = translate_text(&gateway, "m", "hello", "es").await;
        assert_eq!(
            result,
            TranslationResult {
                original_text: "hello".to_string(),
                translated_text: "hola".to_string(),
                target_language: "es".to_string(),
            }
        );

        let parts = &gateway.calls()[0].parts;
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].as_text(), Some("Translate the following text to es:\n\nhello"));
    }

    #[tokio::test]
    async fn test_translate_blank_input_makes_no_call() {
        let gateway = MockGateway::always("unused");
        for blank in ["", "   ", "\n\t "] {
            let result = translate_text(&gateway, "m", blank, "fr").await;
            assert_eq!(result.translated_text, TRANSLATION_EMPTY_INPUT);
            assert_eq!(result.original_text, blank);
            assert_eq!(result.target_language, "fr");
        }
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translate_transport_failure() {
        let gateway = MockGateway::new();
        gateway.push_error(ModelError::QuotaExceeded { provider: "gemini".to_string(), message: None });
        let result = translate_text(&gateway, "m", "hello", "de").await;
        assert_eq!(result.translated_text, TRANSLATION_FALLBACK);
        assert_eq!(result.original_text, "hello");
    }
}
