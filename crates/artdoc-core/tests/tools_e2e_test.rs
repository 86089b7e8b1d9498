//! End-to-end tests for the AI tools.
//!
//! The first group drives the `ToolKit` against a scripted gateway; the second runs
//! the full stack (config, factory, Gemini gateway, adapters) against a local HTTP
//! server.

use artdoc_core::prompts::{
    CALCULATION_INSTRUCTION, CODE_ANALYSIS_FALLBACK, DIAGRAM_PROMPT, TRANSLATION_EMPTY_INPUT,
};
use artdoc_core::{
    AppConfig, ChatSession, ContentPart, FileSource, MemorySource, ModelError, ReadError,
    ToolKit, TranslationResult,
};
use artdoc_models::MockGateway;
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn scripted(reply: &str) -> (Arc<MockGateway>, ToolKit) {
    let gateway = Arc::new(MockGateway::always(reply));
    let toolkit = ToolKit::new(gateway.clone(), "gemini-2.5-flash");
    (gateway, toolkit)
}

#[tokio::test]
async fn test_calculation_returns_model_text_verbatim() {
    let (gateway, toolkit) = scripted("4");

    assert_eq!(toolkit.perform_calculation("2+2").await, "4");

    let call = &gateway.calls()[0];
    assert_eq!(call.parts[0].as_text(), Some(CALCULATION_INSTRUCTION));
    assert_eq!(call.parts[1].as_text(), Some("2+2"));
}

#[tokio::test]
async fn test_translation_round() {
    let (_, toolkit) = scripted("hola");

    assert_eq!(
        toolkit.translate_text("hello", "es").await,
        TranslationResult {
            original_text: "hello".to_string(),
            translated_text: "hola".to_string(),
            target_language: "es".to_string(),
        }
    );
}

#[tokio::test]
async fn test_blank_translation_makes_no_call() {
    let (gateway, toolkit) = scripted("unused");

    let result = toolkit.translate_text("  \n\t", "fr").await;
    assert_eq!(result.translated_text, TRANSLATION_EMPTY_INPUT);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_code_analysis_degrades_on_prose() {
    let (_, toolkit) = scripted("Sure! This code prints hello.");

    let analysis = toolkit.interpret_code("print('hello')").await;
    assert_eq!(analysis.explanation, CODE_ANALYSIS_FALLBACK);
    assert!(analysis.explanation.starts_with("⚠️ Error"));
    assert!(analysis.improvements.is_empty());
    assert!(analysis.warnings.is_empty());
}

#[tokio::test]
async fn test_code_analysis_decodes_fenced_json() {
    let (_, toolkit) =
        scripted("```json\n{\"explanation\":\"x\",\"improvements\":[\"a\"],\"warnings\":[]}\n```");

    let analysis = toolkit.interpret_code("let x = 1;").await;
    assert_eq!(analysis.explanation, "x");
    assert_eq!(analysis.improvements, vec!["a".to_string()]);
    assert!(analysis.warnings.is_empty());
}

#[tokio::test]
async fn test_transcription_defaults_missing_summary() {
    let (gateway, toolkit) = scripted(r#"{"transcript":"hi","confidence":0.9}"#);

    let clip = MemorySource::new("mic", vec![1, 2, 3], "audio/webm");
    let result = toolkit.transcribe(&clip).await.unwrap();

    assert_eq!(result.transcript, "hi");
    assert!((result.confidence - 0.9).abs() < f64::EPSILON);
    assert_eq!(result.summary, "");
    assert_eq!(gateway.calls()[0].parts[0], ContentPart::inline_binary("AQID", "audio/webm"));
}

#[tokio::test]
async fn test_diagram_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flow.png");
    std::fs::write(&path, b"\x89PNG").unwrap();
    let (gateway, toolkit) = scripted("Three boxes feeding a queue.");

    let answer = toolkit.interpret_diagram(&FileSource::new(&path)).await.unwrap();

    assert_eq!(answer, "Three boxes feeding a queue.");
    let parts = &gateway.calls()[0].parts;
    assert_eq!(parts[0].as_text(), Some(DIAGRAM_PROMPT));
    assert_eq!(parts[1].mime_type(), Some("image/png"));
}

#[tokio::test]
async fn test_missing_file_is_read_error() {
    let (gateway, toolkit) = scripted("unused");

    let err = toolkit.find_marked_region(&FileSource::new("/nonexistent/scan.jpg")).await;
    assert!(matches!(err, Err(ReadError::Io { .. })));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_chat_session_is_repeatable() {
    let (gateway, toolkit) = scripted("It is due on the 5th.");
    let document = "Payment terms: due on the 5th of each month.";

    let first = ChatSession::new(document);
    let second = ChatSession::new(document);
    first.ask(&toolkit, "When is payment due?").await.unwrap();
    second.ask(&toolkit, "When is payment due?").await.unwrap();

    assert_eq!(first.history(), second.history());
    assert_eq!(gateway.calls()[0], gateway.calls()[1]);
}

#[tokio::test]
async fn test_transport_failures_never_escape() {
    let gateway = Arc::new(MockGateway::new());
    gateway
        .push_error(ModelError::RequestError("Network error".to_string()))
        .push_error(ModelError::QuotaExceeded {
            provider: "gemini".to_string(),
            message: Some("slow down".to_string()),
        });
    let toolkit = ToolKit::new(gateway, "m");

    assert!(!toolkit.perform_calculation("1+1").await.is_empty());
    assert!(!toolkit.interpret_code("fn main() {}").await.explanation.is_empty());
}

fn config_for(server: &mockito::Server) -> AppConfig {
    AppConfig {
        model: Some("gemini-2.5-flash".to_string()),
        base_url: Some(format!("{}/v1beta", server.url())),
        api_key: Some("test-key".to_string()),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_full_stack_calculation_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Json(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": CALCULATION_INSTRUCTION}, {"text": "15% of 80"}]
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"12"}]}}]}"#)
        .create_async()
        .await;

    let toolkit = ToolKit::from_config(&config_for(&server)).unwrap();
    assert_eq!(toolkit.perform_calculation("15% of 80").await, "12");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_full_stack_server_error_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let toolkit = ToolKit::from_config(&config_for(&server)).unwrap();
    let analysis = toolkit.interpret_code("x = 1").await;

    assert_eq!(analysis.explanation, CODE_ANALYSIS_FALLBACK);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_full_stack_missing_candidates_is_empty_answer() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let toolkit = ToolKit::from_config(&config_for(&server)).unwrap();
    assert_eq!(toolkit.perform_calculation("2+2").await, "");
}
