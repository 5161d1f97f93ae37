use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Everything that can end an analysis attempt.
///
/// All variants are terminal: the attempt is not retried and no partial
/// result is kept.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The selected file could not be loaded into memory.
    #[error("FAILED TO READ FILE")]
    ReadFailed,

    /// The endpoint answered with a non-2xx status.
    #[error("API request failed: {0}")]
    Status(u16),

    /// The request never completed (unreachable host, aborted fetch, ...).
    #[error("{}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Transport(Option<String>),

    /// The 2xx body was not a valid response document.
    #[error("{0}")]
    Parse(String),
}

impl AnalyzeError {
    /// Build a transport error, treating a blank message as no message.
    pub fn transport(message: Option<String>) -> Self {
        Self::Transport(message.filter(|m| !m.trim().is_empty()))
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
