//! Crate-wide error type and result alias.
//!
//! Only the boundary (reading files, decoding JSON/TOML, validating config)
//! can fail. Layout, scene building and card classification are infallible.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
