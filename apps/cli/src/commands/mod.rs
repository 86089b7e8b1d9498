//! Command implementations.

pub mod calc;
pub mod chat;
pub mod code;
pub mod config;
pub mod image;
pub mod transcribe;
pub mod translate;
