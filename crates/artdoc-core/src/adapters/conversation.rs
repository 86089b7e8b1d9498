//! Chat with a document.

use super::generate_text;
use crate::prompts::{CONVERSATION_FALLBACK, conversation_instruction};
use crate::types::ConversationTurn;
use artdoc_abstraction::{ContentPart, ModelGateway};
use tracing::debug;

/// Answers `question` using only `document` as context.
///
/// `history` is accepted for the caller's bookkeeping but is not replayed to the
/// model; every question is answered against the document alone.
pub async fn continue_conversation(
    gateway: &dyn ModelGateway,
    model: &str,
    history: &[ConversationTurn],
    question: &str,
    document: &str,
) -> String {
    debug!(history_len = history.len(), document_len = document.len(), "Continuing conversation");

    let parts = [ContentPart::text(conversation_instruction(document)), ContentPart::text(question)];

    generate_text(gateway, model, "conversation", &parts)
        .await
        .unwrap_or_else(|_| CONVERSATION_FALLBACK.to_string())
}
