//! Calculator command.

use crate::output::Output;
use anyhow::Result;
use artdoc_core::{ToolKit, ValidationError, require_text};
use colored::Colorize;
use serde_json::json;

/// Execute the calc command.
pub async fn execute(toolkit: &ToolKit, query: &str, out: &Output) -> Result<()> {
    let query = require_text(query, ValidationError::EmptyCalculation)?;

    let result = toolkit.perform_calculation(query).await;

    out.emit(&json!({ "query": query, "result": result }), |_| {
        println!("{} {}", "=".dimmed(), result.green().bold());
    })
}
