//! Translator command.

use crate::output::{Output, heading};
use anyhow::Result;
use artdoc_core::{ToolKit, ValidationError, require_text};

/// Execute the translate command.
pub async fn execute(toolkit: &ToolKit, text: &str, target_language: &str, out: &Output) -> Result<()> {
    let text = require_text(text, ValidationError::EmptyTranslation)?;

    let result = toolkit.translate_text(text, target_language).await;

    out.emit(&result, |result| {
        println!("{}", heading(&format!("Translation ({})", result.target_language)));
        println!("{}", result.translated_text);
    })
}
