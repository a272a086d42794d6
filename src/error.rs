//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero interval
    #[error("cache interval must be greater than zero")]
    InvalidInterval,

    /// HTTP transport failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status
    #[error("request to {url} failed with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Forward pagination past the final page
    #[error("you're on the last page")]
    LastPage,

    /// Backward pagination before the first page
    #[error("you're on the first page")]
    FirstPage,

    /// Command invoked with missing or invalid arguments
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Terminal I/O failure in the REPL
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
