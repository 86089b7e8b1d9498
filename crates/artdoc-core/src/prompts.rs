//! Prompt templates and user-facing fallback messages.

/// Instruction prepended to every document chat question.
pub fn conversation_instruction(document: &str) -> String {
    format!("You are an expert document analysis assistant. Use only this content:\n{document}")
}

pub const CALCULATION_INSTRUCTION: &str =
    "You are a math assistant. Return only the final numeric result. No words, no explanations.";

/// Single-part translation prompt.
pub fn translation_prompt(target_language: &str, text: &str) -> String {
    format!("Translate the following text to {target_language}:\n\n{text}")
}

pub const CODE_ANALYSIS_INSTRUCTION: &str = r#"You are an AI code interpreter.
Return ONLY valid JSON with this structure:
{
  "explanation": "string",
  "improvements": ["string", "string"],
  "warnings": ["string", "string"]
}
The "warnings" field is optional."#;

pub const TRANSCRIPTION_INSTRUCTION: &str = "Transcribe the audio and return a JSON object with:
- transcript (string)
- confidence (number, 0-1 if possible)
- summary (string, optional).";

pub const DIAGRAM_PROMPT: &str = "Please interpret and explain the diagram in this image in a clear and concise way. Describe its components, their relationships, and the overall purpose or flow it represents.";

pub const DRAW_AND_FIND_PROMPT: &str = "Analyze the user's red markings on this document. What information are they trying to highlight or extract? Provide a summary or transcription of the marked area.";

/// MIME type assumed for recorded audio when the source does not report one.
pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";

pub const CONVERSATION_FALLBACK: &str = "Sorry, I couldn't process your request.";
pub const CALCULATION_FALLBACK: &str = "Sorry, I couldn't process that calculation.";
pub const TRANSLATION_EMPTY_INPUT: &str = "Please provide some text to translate.";
pub const TRANSLATION_FALLBACK: &str = "⚠️ Error occurred while translating.";
pub const CODE_ANALYSIS_FALLBACK: &str = "⚠️ Error: Could not interpret the code.";
pub const NO_EXPLANATION: &str = "No explanation provided.";
pub const IMAGE_FALLBACK: &str = "Sorry, I encountered an error while analyzing the image.";
pub const TRANSCRIPTION_FALLBACK: &str = "Sorry, I couldn't transcribe the audio.";
