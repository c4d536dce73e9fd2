//! Error taxonomy for the scheduler.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A stored record lacks a required field or violates an invariant.
    /// The whole load aborts; a partial topic is never returned.
    #[error("malformed record in {path}: {reason}")]
    MalformedRecord { path: PathBuf, reason: String },

    /// The oracle reply carried no parsable score marker.
    #[error("oracle reply has no parsable score marker: {reply:?}")]
    GradingParse { reply: String },

    /// Transport-level failure reaching the grading oracle (network error,
    /// timeout, non-success status).
    #[error("grading oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// Grading was requested for a question the active topic does not hold.
    #[error("no card with question {question:?} in the active topic")]
    UnknownCard { question: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
