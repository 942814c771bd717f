//! Errors raised while ingesting external data
//!
//! The simulation itself never fails: out-of-range geometry is clamped and
//! inapplicable transitions are no-ops. Only level and tuning ingestion can
//! reject input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid level '{id}': {reason}")]
    InvalidLevel { id: String, reason: String },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("unknown level '{0}'")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
