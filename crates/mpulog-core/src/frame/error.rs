use thiserror::Error;

/// Errors returned by payload reading and parsing.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
