//! Feature adapters.
//!
//! Each adapter builds the ordered content parts for one tool, makes at most one
//! gateway call, and decodes the reply into a typed result. Adapters are total:
//! transport and decode failures become documented fallback values, never errors.

pub mod calculation;
pub mod code_analysis;
pub mod conversation;
pub mod image;
pub mod transcription;
pub mod translation;

pub use calculation::perform_calculation;
pub use code_analysis::{decode_code_analysis, interpret_code};
pub use conversation::continue_conversation;
pub use image::{find_marked_region, generate_text_from_image, interpret_diagram};
pub use transcription::{decode_transcription, transcribe_audio};
pub use translation::translate_text;

use artdoc_abstraction::{ContentPart, ModelError, ModelGateway};
use tracing::{debug, error, warn};

/// Sends `parts` and extracts the first text answer.
///
/// Logs the failure against `feature` before handing it back, so callers only need
/// to pick their fallback.
async fn generate_text(
    gateway: &dyn ModelGateway,
    model: &str,
    feature: &'static str,
    parts: &[ContentPart],
) -> Result<String, ModelError> {
    debug!(feature, model, provider = gateway.provider(), "Calling model gateway");

    match gateway.generate(model, parts).await {
        Ok(response) => {
            let text = response.extract_text();
            if text.is_empty() {
                warn!(
                    feature,
                    finish_reason = ?response.finish_reason(),
                    block_reason = ?response.block_reason(),
                    "Model returned no text"
                );
            }
            Ok(text)
        }
        Err(e) => {
            error!(feature, error = %e, "Model gateway call failed");
            Err(e)
        }
    }
}
