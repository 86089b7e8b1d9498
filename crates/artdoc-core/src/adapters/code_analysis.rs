//! Code interpreter.

use super::generate_text;
use crate::decode::decode_json_object;
use crate::error::DecodeError;
use crate::prompts::{CODE_ANALYSIS_FALLBACK, CODE_ANALYSIS_INSTRUCTION, NO_EXPLANATION};
use crate::types::CodeAnalysis;
use artdoc_abstraction::{ContentPart, ModelGateway};
use serde::Deserialize;
use tracing::warn;

/// The reply shape the model is asked for. Every field may be missing or null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CodeAnalysisReply {
    explanation: Option<String>,
    improvements: Option<Vec<String>>,
    warnings: Option<Vec<String>>,
}

impl From<CodeAnalysisReply> for CodeAnalysis {
    fn from(reply: CodeAnalysisReply) -> Self {
        Self {
            explanation: reply
                .explanation
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| NO_EXPLANATION.to_string()),
            improvements: reply.improvements.unwrap_or_default(),
            warnings: reply.warnings.unwrap_or_default(),
        }
    }
}

/// Decodes a raw model reply into a [`CodeAnalysis`].
pub fn decode_code_analysis(raw: &str) -> Result<CodeAnalysis, DecodeError> {
    decode_json_object::<CodeAnalysisReply>(raw).map(CodeAnalysis::from)
}

/// The well-formed result returned when the model could not be reached or understood.
fn fallback() -> CodeAnalysis {
    CodeAnalysis {
        explanation: CODE_ANALYSIS_FALLBACK.to_string(),
        improvements: Vec::new(),
        warnings: Vec::new(),
    }
}

/// Explains `code` and suggests improvements.
pub async fn interpret_code(gateway: &dyn ModelGateway, model: &str, code: &str) -> CodeAnalysis {
    let parts = [ContentPart::text(CODE_ANALYSIS_INSTRUCTION), ContentPart::text(code)];

    let Ok(raw) = generate_text(gateway, model, "code_analysis", &parts).await else {
        return fallback();
    };

    decode_code_analysis(&raw).unwrap_or_else(|e| {
        warn!(error = %e, raw_len = raw.len(), "Discarding undecodable code analysis");
        fallback()
    })
}
