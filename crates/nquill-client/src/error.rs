//! Client error type.

use thiserror::Error;

/// Errors from the nquill client.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The gateway answered with a non-zero code.
    #[error("graph error {code}: {message}")]
    Graph { code: i64, message: String },

    /// The gateway answered code 0 but sent no result payload.
    #[error("gateway returned no result data")]
    EmptyResult,

    /// Schema modeling or statement construction failed.
    #[error(transparent)]
    Schema(#[from] nquill_core::Error),

    /// A test fixture invariant did not hold.
    #[error("fixture error: {0}")]
    Fixture(String),
}

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;
