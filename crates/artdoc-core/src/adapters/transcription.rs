//! Voice-to-text.

use super::generate_text;
use crate::decode::{decode_json_object, lenient_f64};
use crate::encoding::EncodedPayload;
use crate::error::DecodeError;
use crate::prompts::{DEFAULT_AUDIO_MIME, TRANSCRIPTION_FALLBACK, TRANSCRIPTION_INSTRUCTION};
use crate::types::TranscriptionResult;
use artdoc_abstraction::{ContentPart, ModelGateway};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranscriptionReply {
    transcript: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    confidence: Option<f64>,
    summary: Option<String>,
}

impl From<TranscriptionReply> for TranscriptionResult {
    fn from(reply: TranscriptionReply) -> Self {
        Self {
            transcript: reply.transcript.unwrap_or_default(),
            confidence: reply
                .confidence
                .filter(|c| c.is_finite())
                .map_or(0.0, |c| c.clamp(0.0, 1.0)),
            summary: reply.summary.unwrap_or_default(),
        }
    }
}

/// Decodes a raw model reply into a [`TranscriptionResult`].
pub fn decode_transcription(raw: &str) -> Result<TranscriptionResult, DecodeError> {
    decode_json_object::<TranscriptionReply>(raw).map(TranscriptionResult::from)
}

fn fallback() -> TranscriptionResult {
    TranscriptionResult {
        transcript: TRANSCRIPTION_FALLBACK.to_string(),
        confidence: 0.0,
        summary: String::new(),
    }
}

/// Transcribes a recorded clip. The audio part goes first, then the instruction.
pub async fn transcribe_audio(
    gateway: &dyn ModelGateway,
    model: &str,
    audio: &EncodedPayload,
) -> TranscriptionResult {
    let mime_type =
        if audio.mime_type.trim().is_empty() { DEFAULT_AUDIO_MIME } else { audio.mime_type.as_str() };

    let parts = [
        ContentPart::inline_binary(audio.data.clone(), mime_type),
        ContentPart::text(TRANSCRIPTION_INSTRUCTION),
    ];

    let Ok(raw) = generate_text(gateway, model, "transcription", &parts).await else {
        return fallback();
    };

    decode_transcription(&raw).unwrap_or_else(|e| {
        warn!(error = %e, raw_len = raw.len(), "Discarding undecodable transcription");
        fallback()
    })
}
