//! Document chat session state.
//!
//! The session owns the pasted document and the append-only conversation history
//! for as long as the chat is open. Nothing is persisted.

use crate::error::{PanelError, ValidationError};
use crate::panel::Panel;
use crate::toolkit::ToolKit;
use crate::types::ConversationTurn;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

#[derive(Debug)]
pub struct ChatSession {
    document: String,
    history: Mutex<Vec<ConversationTurn>>,
    panel: Panel,
}

impl ChatSession {
    pub fn new(document: impl Into<String>) -> Self {
        Self { document: document.into(), history: Mutex::new(Vec::new()), panel: Panel::new("chat") }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Snapshot of the conversation so far, oldest first.
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_busy(&self) -> bool {
        self.panel.is_busy()
    }

    /// Clears the conversation, keeping the document.
    ///
    /// Refused while a question is in flight, so a late reply can never land in the
    /// cleared history.
    pub fn reset(&self) -> Result<(), PanelError> {
        let _guard = self.panel.try_begin()?;
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clear();
        Ok(())
    }

    /// Asks `question` about the document and records both turns.
    ///
    /// The user turn is recorded before the model is called, so it stays visible
    /// even if the reply is a fallback message. If the returned future is dropped
    /// before the reply arrives, the user turn is removed again.
    pub async fn ask(&self, toolkit: &ToolKit, question: &str) -> Result<String, PanelError> {
        if question.trim().is_empty() || self.document.trim().is_empty() {
            return Err(ValidationError::EmptyConversation.into());
        }

        let _guard = self.panel.try_begin()?;

        let prior = {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            let prior = history.clone();
            history.push(ConversationTurn::user(question));
            prior
        };
        let mut pending =
            PendingTurn { history: &self.history, len_before: prior.len(), completed: false };

        let answer = toolkit.continue_conversation(&prior, question, &self.document).await;

        {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            history.push(ConversationTurn::assistant(answer.clone()));
            info!(turns = history.len(), "Chat turn completed");
        }
        pending.completed = true;

        Ok(answer)
    }
}

/// Rolls back an unanswered user turn when `ask` is cancelled mid-request.
struct PendingTurn<'a> {
    history: &'a Mutex<Vec<ConversationTurn>>,
    len_before: usize,
    completed: bool,
}

impl Drop for PendingTurn<'_> {
    fn drop(&mut self) {
        if !self.completed {
            debug!("Dropping unanswered chat turn");
            self.history.lock().unwrap_or_else(PoisonError::into_inner).truncate(self.len_before);
        }
    }
}
