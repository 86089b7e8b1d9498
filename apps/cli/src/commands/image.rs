//! Image commands: diagram interpretation and draw-and-find.

use crate::output::{Output, heading};
use anyhow::Result;
use artdoc_core::{FileSource, ToolKit, ValidationError, require_text};
use serde_json::json;
use std::path::Path;

/// Execute the diagram command, optionally with a custom prompt.
pub async fn diagram(
    toolkit: &ToolKit,
    image: &Path,
    prompt: Option<&str>,
    out: &Output,
) -> Result<()> {
    let source = FileSource::new(image);
    let answer = match prompt {
        Some(prompt) => {
            let prompt = require_text(prompt, ValidationError::EmptyPrompt)?;
            toolkit.ask_about_image(prompt, &source).await?
        }
        None => toolkit.interpret_diagram(&source).await?,
    };
    render(image, "Diagram", &answer, out)
}

/// Execute the find command.
pub async fn find(toolkit: &ToolKit, image: &Path, out: &Output) -> Result<()> {
    let answer = toolkit.find_marked_region(&FileSource::new(image)).await?;
    render(image, "Marked region", &answer, out)
}

fn render(image: &Path, title: &str, answer: &str, out: &Output) -> Result<()> {
    out.emit(&json!({ "image": image.display().to_string(), "answer": answer }), |_| {
        println!("{}", heading(title));
        println!("{}", answer);
    })
}
