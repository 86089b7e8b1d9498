//! Error types for ArtDoc Core.
//!
//! Transport failures (`ModelError`) and decode failures never escape the feature
//! adapters; they are converted to fallback results there. The remaining kinds are
//! surfaced to the caller.

use artdoc_abstraction::ModelError;
use thiserror::Error;

/// Failure to turn a user-supplied binary payload into base64.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying read failed.
    #[error("Failed to read {source_name}: {source}")]
    Io {
        /// Human-readable name of the source (file path, blob label).
        source_name: String,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source produced no bytes.
    #[error("Binary payload from {0} is empty")]
    Empty(String),

    /// A `data:` URL was malformed.
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Model output that could not be decoded into the expected JSON shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Nothing left after normalization.
    #[error("Model returned no content")]
    Empty,

    /// The normalized text is not valid JSON for the expected shape.
    #[error("Invalid JSON from model: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not an object.
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A required text input was empty or whitespace.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide document content and a question.")]
    EmptyConversation,

    #[error("Please enter a calculation or question.")]
    EmptyCalculation,

    #[error("Please enter text to translate.")]
    EmptyTranslation,

    #[error("Please paste some code to interpret.")]
    EmptyCode,

    #[error("Please provide a prompt for the image.")]
    EmptyPrompt,
}

/// Errors raised by a front-end panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// A request from this panel is still in flight.
    #[error("A request from the {0} panel is already in progress")]
    Busy(String),

    /// Input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key was configured for a gateway that requires one.
    #[error("API key is not set. Export ARTDOC_API_KEY (or GEMINI_API_KEY) before starting")]
    MissingApiKey,

    /// Explicit configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    Read(String),

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Core error type for ArtDoc operations.
#[derive(Error, Debug)]
pub enum ArtDocError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Binary read errors
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// Input validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Panel errors
    #[error("{0}")]
    Panel(#[from] PanelError),

    /// Gateway construction errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type alias for ArtDoc operations.
pub type Result<T> = std::result::Result<T, ArtDocError>;
