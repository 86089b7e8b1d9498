//! ArtDoc Core - AI tools over a pluggable model gateway.
//!
//! This crate provides:
//! - Feature adapters (document chat, calculator, translator, code interpreter,
//!   image interpretation, audio transcription)
//! - Binary encoding for images and audio
//! - Defensive decoding of JSON-shaped model output
//! - Panel and chat session state for front ends
//! - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use artdoc_core::{AppConfig, ToolKit};
//!
//! #[tokio::main]
//! async fn main() -> artdoc_core::Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let toolkit = ToolKit::from_config(&config)?;
//!     println!("{}", toolkit.perform_calculation("12 * 7").await);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod decode;
pub mod encoding;
pub mod error;
pub mod panel;
pub mod prompts;
pub mod session;
pub mod toolkit;
pub mod types;

pub use config::AppConfig;
pub use decode::{decode_json_object, strip_code_fences};
pub use encoding::{
    BinarySource, EncodedPayload, FileSource, MemorySource, encode, encode_bytes, split_data_url,
};
pub use error::{
    ArtDocError, ConfigError, DecodeError, PanelError, ReadError, Result, ValidationError,
};
pub use panel::{InFlight, Panel, require_text};
pub use session::ChatSession;
pub use toolkit::ToolKit;
pub use types::{CodeAnalysis, ConversationTurn, Role, TranscriptionResult, TranslationResult};

pub use artdoc_abstraction::{ContentPart, ModelError, ModelGateway, RawResponse, extract_text};
