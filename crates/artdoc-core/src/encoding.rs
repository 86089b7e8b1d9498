//! Binary encoding helper.
//!
//! Converts user-supplied binary payloads (files, in-memory blobs, `data:` URLs) into
//! the base64 form the gateway sends inline. Read failures are surfaced as
//! [`ReadError`]; an empty or corrupted payload must never reach the model silently.

use crate::error::ReadError;
use artdoc_abstraction::ContentPart;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// A base64-encoded payload together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    pub data: String,
    pub mime_type: String,
}

impl EncodedPayload {
    /// Encodes raw bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self { data: encode_bytes(bytes), mime_type: mime_type.into() }
    }

    /// Renders the payload as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

impl From<EncodedPayload> for ContentPart {
    fn from(payload: EncodedPayload) -> Self {
        ContentPart::InlineBinary { data: payload.data, mime_type: payload.mime_type }
    }
}

impl From<&EncodedPayload> for ContentPart {
    fn from(payload: &EncodedPayload) -> Self {
        ContentPart::inline_binary(payload.data.clone(), payload.mime_type.clone())
    }
}

/// Standard (padded) base64 encoding.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Where binary input comes from.
#[async_trait]
pub trait BinarySource: Send + Sync {
    /// Reads the full payload.
    async fn read_bytes(&self) -> io::Result<Vec<u8>>;

    /// MIME type of the payload.
    fn mime_type(&self) -> String;

    /// Short label for logs and errors.
    fn describe(&self) -> String;
}

/// A file on disk. The MIME type is guessed from the extension unless overridden.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    mime_override: Option<String>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), mime_override: None }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_override = Some(mime_type.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BinarySource for FileSource {
    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    fn mime_type(&self) -> String {
        self.mime_override.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.path).first_or_octet_stream().essence_str().to_string()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory blob, e.g. a recording captured by the front end.
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    bytes: Vec<u8>,
    mime_type: String,
}

impl MemorySource {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self { label: label.into(), bytes, mime_type: mime_type.into() }
    }
}

#[async_trait]
impl BinarySource for MemorySource {
    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Reads `source` to completion and base64-encodes it.
pub async fn encode(source: &dyn BinarySource) -> Result<EncodedPayload, ReadError> {
    let name = source.describe();
    let bytes = source.read_bytes().await.map_err(|e| {
        error!(source = %name, error = %e, "Failed to read binary payload");
        ReadError::Io { source_name: name.clone(), source: e }
    })?;

    if bytes.is_empty() {
        return Err(ReadError::Empty(name));
    }

    let mime_type = source.mime_type();
    debug!(source = %name, bytes = bytes.len(), mime_type = %mime_type, "Encoded binary payload");
    Ok(EncodedPayload::from_bytes(&bytes, mime_type))
}

/// Splits a `data:<mime>;base64,<data>` URL into its payload.
pub fn split_data_url(url: &str) -> Result<EncodedPayload, ReadError> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| ReadError::InvalidDataUrl("missing 'data:' scheme".to_string()))?;

    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| ReadError::InvalidDataUrl("missing ',' separator".to_string()))?;

    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| ReadError::InvalidDataUrl("payload is not base64".to_string()))?;

    if data.is_empty() {
        return Err(ReadError::Empty("data URL".to_string()));
    }

    STANDARD
        .decode(data)
        .map_err(|e| ReadError::InvalidDataUrl(format!("invalid base64: {}", e)))?;

    let mime_type = if mime_type.is_empty() { "application/octet-stream" } else { mime_type };
    Ok(EncodedPayload { data: data.to_string(), mime_type: mime_type.to_string() })
}
