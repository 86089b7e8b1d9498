//! Result rendering for the terminal.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Chooses between colored human output and JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(self) -> bool {
        self.json
    }

    /// Prints `value` as pretty JSON, or hands it to `human` for terminal rendering.
    pub fn emit<T: Serialize>(self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

pub fn heading(title: &str) -> String {
    title.cyan().bold().to_string()
}

/// Renders a titled bullet list, or nothing when `items` is empty.
pub fn bullet_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut rendered = heading(title);
    for item in items {
        rendered.push_str(&format!("\n  {} {}", "•".dimmed(), item));
    }
    rendered
}
