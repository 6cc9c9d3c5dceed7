//! Content loading errors

use thiserror::Error;

/// Errors raised while loading posts and projects
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to parse front-matter in {path}: {message}")]
    ParseFailure { path: String, message: String },

    #[error("Path {path} is not a {kind} content file")]
    MalformedPath { path: String, kind: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Content task failed: {0}")]
    Task(String),
}

impl ContentError {
    pub(crate) fn parse_failure(path: &str, message: impl std::fmt::Display) -> Self {
        ContentError::ParseFailure {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for ContentError {
    fn from(e: tokio::task::JoinError) -> Self {
        ContentError::Task(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
