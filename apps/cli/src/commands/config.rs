//! Effective configuration display.

use crate::output::{Output, heading};
use anyhow::Result;
use artdoc_core::AppConfig;
use colored::Colorize;
use serde::Serialize;

/// What `artdoc config` prints. The API key is never shown.
#[derive(Debug, Serialize)]
struct EffectiveConfig {
    model_type: String,
    model: String,
    base_url: String,
    timeout_secs: Option<u64>,
    log_level: String,
    api_key: &'static str,
    global_config: String,
    local_config: String,
}

impl EffectiveConfig {
    fn from_config(config: &AppConfig) -> Self {
        let has_key = config.api_key.as_deref().is_some_and(|key| !key.trim().is_empty());
        Self {
            model_type: config.model_type.clone().unwrap_or_else(|| "gemini".to_string()),
            model: config.model().to_string(),
            base_url: config.base_url().to_string(),
            timeout_secs: config.timeout().map(|t| t.as_secs()),
            log_level: config.log_level().to_string(),
            api_key: if has_key { "<redacted>" } else { "<not set>" },
            global_config: AppConfig::default_global_path().display().to_string(),
            local_config: AppConfig::default_local_path().display().to_string(),
        }
    }
}

/// Execute the config command.
pub fn execute(config: &AppConfig, out: &Output) -> Result<()> {
    let effective = EffectiveConfig::from_config(config);

    out.emit(&effective, |effective| {
        println!("{}", heading("ArtDoc configuration"));
        let timeout =
            effective.timeout_secs.map_or_else(|| "disabled".to_string(), |secs| format!("{}s", secs));
        let rows = [
            ("model_type", effective.model_type.as_str()),
            ("model", effective.model.as_str()),
            ("base_url", effective.base_url.as_str()),
            ("timeout", timeout.as_str()),
            ("log_level", effective.log_level.as_str()),
            ("api_key", effective.api_key),
            ("global file", effective.global_config.as_str()),
            ("local file", effective.local_config.as_str()),
        ];
        for (name, value) in rows {
            println!("  {:<12} {}", name.dimmed(), value);
        }
    })
}
