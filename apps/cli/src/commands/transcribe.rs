//! Transcription command.

use crate::output::{Output, heading};
use anyhow::Result;
use artdoc_core::prompts::DEFAULT_AUDIO_MIME;
use artdoc_core::{BinarySource, FileSource, ToolKit};
use std::path::Path;

/// Execute the transcribe command.
pub async fn execute(
    toolkit: &ToolKit,
    audio: &Path,
    mime: Option<String>,
    out: &Output,
) -> Result<()> {
    let source = FileSource::new(audio);
    let mime_type = mime.unwrap_or_else(|| audio_mime_type(&source.mime_type()));
    let source = source.with_mime_type(mime_type);

    let result = toolkit.transcribe(&source).await?;

    out.emit(&result, |result| {
        println!("{}", heading("Transcript"));
        println!("{}", result.transcript);
        if result.confidence > 0.0 {
            println!("{} {:.0}%", heading("Confidence:"), result.confidence * 100.0);
        }
        if !result.summary.is_empty() {
            println!("\n{}", heading("Summary"));
            println!("{}", result.summary);
        }
    })
}

/// Keeps a guessed `audio/*` type; anything else is treated as a browser recording.
fn audio_mime_type(guessed: &str) -> String {
    if guessed.starts_with("audio/") { guessed.to_string() } else { DEFAULT_AUDIO_MIME.to_string() }
}
