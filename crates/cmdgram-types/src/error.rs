//! Error types for cmdgram.

use std::io;

/// Errors produced outside of command matching.
///
/// Matching failures are never errors: they degrade to a [`Diagnostic`]
/// sent to the output sink. This type covers registration and host setup.
///
/// [`Diagnostic`]: crate::diagnostic::Diagnostic
#[derive(Debug, thiserror::Error)]
pub enum CmdgramError {
    #[error("config error: {0}")]
    Config(String),

    #[error("registration error: {0}")]
    Registration(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CmdgramError>;
