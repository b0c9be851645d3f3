//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer core
//!
//! The highlighting and documentation pipelines never fail; absence is
//! modelled with `Option` and empty collections. Errors only arise at the
//! edges: reading configuration, loading records and parsing user input.

use thiserror::Error;

/// @acp:summary "Errors raised while loading configuration or records"
#[derive(Debug, Error)]
pub enum DoxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown highlight category: {0}")]
    UnknownCategory(String),

    #[error("invalid colour '{0}', expected #RRGGBB")]
    InvalidColour(String),
}

pub type Result<T> = std::result::Result<T, DoxError>;
