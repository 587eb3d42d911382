pub mod binary;
pub mod json;

use thiserror::Error;

/// Errors produced by the point codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The binary buffer ended before both coordinates could be read.
    #[error("point buffer truncated: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    /// The JSON payload could not be parsed or rendered.
    #[error("invalid point JSON: {0}")]
    Json(#[from] serde_json::Error),
}
