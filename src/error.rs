//! Errors raised by key-value store backends
//!
//! The simulation itself is infallible; only persistence can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Browser storage is unavailable")]
    Unavailable,

    #[error("Browser storage rejected write to {key}")]
    Rejected { key: String },
}
