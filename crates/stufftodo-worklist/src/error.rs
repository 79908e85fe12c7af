//! Error types for worklist operations.

use thiserror::Error;

/// Errors that can occur during worklist operations.
#[derive(Error, Debug)]
pub enum WorklistError {
    /// An issue ID in a reorder request could not be parsed.
    #[error("invalid issue id: {0}")]
    InvalidIssueId(String),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for worklist operations.
pub type Result<T> = std::result::Result<T, WorklistError>;
