//! Code interpreter command.

use crate::output::{Output, bullet_list, heading};
use anyhow::{Context, Result};
use artdoc_core::{ToolKit, ValidationError, require_text};
use std::io::Read;

/// Execute the code command. `file` is a path, or `-` for standard input.
pub async fn execute(toolkit: &ToolKit, file: &str, out: &Output) -> Result<()> {
    let code = read_code(file).await?;
    let code = require_text(&code, ValidationError::EmptyCode)?;

    let analysis = toolkit.interpret_code(code).await;

    out.emit(&analysis, |analysis| {
        println!("{}", heading("Explanation"));
        println!("{}", analysis.explanation);
        for (title, items) in [("Improvements", &analysis.improvements), ("Warnings", &analysis.warnings)] {
            let rendered = bullet_list(title, items);
            if !rendered.is_empty() {
                println!("\n{}", rendered);
            }
        }
    })
}

async fn read_code(file: &str) -> Result<String> {
    if file == "-" {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code).context("Failed to read standard input")?;
        return Ok(code);
    }
    tokio::fs::read_to_string(file).await.with_context(|| format!("Failed to read {}", file))
}
