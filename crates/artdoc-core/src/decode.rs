//! Normalization and decoding of model replies that are supposed to be JSON.
//!
//! The model is told to answer with JSON only, but nothing enforces it: replies
//! routinely arrive wrapped in Markdown code fences, sometimes with a sentence of
//! preamble. Decoding therefore runs in fixed steps:
//!
//! 1. trim surrounding whitespace,
//! 2. [`strip_code_fences`] removes a wrapping fence (with optional language tag),
//! 3. parse with `serde_json`; if that fails and the reply contains a fenced block
//!    somewhere inside, parse that block instead,
//! 4. hand the result (or the [`DecodeError`]) to the adapter, which substitutes
//!    its documented defaults.

use crate::error::DecodeError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[A-Za-z0-9_+-]*[ \t]*(?:\r?\n)?").expect("valid opening fence pattern")
});

static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n)?[ \t]*```$").expect("valid closing fence pattern"));

static EMBEDDED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n(.*?)```").expect("valid fenced block pattern")
});

/// Removes Markdown code-fence delimiters wrapping `raw` and trims the result.
///
/// Only the outermost fence pair is removed; backticks inside the payload are kept.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_open = OPENING_FENCE.replace(trimmed, "");
    let without_close = CLOSING_FENCE.replace(&without_open, "");
    without_close.trim().to_string()
}

/// Normalizes `raw` and parses it as a JSON object of type `T`.
pub fn decode_json_object<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(DecodeError::Empty);
    }

    let value = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => value,
        Err(err) => match embedded_block(raw) {
            Some(block) => serde_json::from_str::<Value>(&block).map_err(|_| err)?,
            None => return Err(err.into()),
        },
    };

    if !value.is_object() {
        return Err(DecodeError::NotAnObject(json_kind(&value)));
    }

    Ok(serde_json::from_value(value)?)
}

fn embedded_block(raw: &str) -> Option<String> {
    EMBEDDED_BLOCK
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|block| !block.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserializes a number that may arrive as a JSON number or a numeric string.
///
/// Anything else (including `null`) becomes `None` instead of failing the whole reply.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').parse::<f64>().ok().map(|v| {
            if s.trim().ends_with('%') { v / 100.0 } else { v }
        }),
        _ => None,
    })
}
