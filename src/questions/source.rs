use std::fmt;

use async_trait::async_trait;

use super::types::QuestionRecord;

/// Errors that can occur while fetching a question batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON array of questions.
    Parse(String),
    /// Endpoint answered with zero questions.
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Empty => write!(f, "no questions returned"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Something that can hand out a batch of quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches one ordered, non-empty batch of questions.
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, SourceError>;
}
