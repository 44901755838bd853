use thiserror::Error;

/// Errors produced when decoding external audit payloads.
///
/// The diff and rendering layers themselves never fail; decoding the raw
/// JSON an audit service hands over is the only fallible boundary.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("malformed audit payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience alias for payload decode results.
pub type PayloadResult<T> = Result<T, PayloadError>;
