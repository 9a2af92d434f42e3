//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Vectorization error: {0}")]
    Vectorization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

impl From<regex::Error> for MatcherError {
    fn from(err: regex::Error) -> Self {
        MatcherError::TextProcessing(format!("Invalid pattern: {}", err))
    }
}
