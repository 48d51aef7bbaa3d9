// Content Judge Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("sampling rate must be greater than 0")]
    InvalidSamplingRate,

    #[error("could not open video: {0}")]
    VideoOpen(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for JudgeError {
    fn from(err: anyhow::Error) -> Self {
        JudgeError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JudgeError>;
