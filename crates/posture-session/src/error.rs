//! Error types for the command gateway.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing operator input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The command was recognized but its arguments were not.
    #[error("{0}")]
    InvalidCommand(String),

    /// The encounter rejected the operation.
    #[error("{0}")]
    Encounter(#[from] posture_core::EncounterError),
}
