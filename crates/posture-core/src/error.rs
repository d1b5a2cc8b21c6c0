//! Error types for the encounter engine.

use crate::participant::ParticipantId;

/// Errors that can occur while building or driving an encounter.
///
/// Every operation that returns one of these leaves the encounter unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EncounterError {
    /// No participant with this id exists in the encounter.
    #[error("participant not found: {0}")]
    NotFound(ParticipantId),

    /// A mutation received a value outside its domain (NaN, infinite, negative).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The participant does not meet the readiness required for the operation.
    #[error("{id} cannot {action} now (posture {readiness:.2}, needs {requirement})")]
    Ineligible {
        /// The participant that was rejected.
        id: ParticipantId,
        /// The attempted operation ("act", "wait", "react").
        action: &'static str,
        /// Readiness at the time of the attempt.
        readiness: f64,
        /// Human-readable requirement, e.g. "> 75".
        requirement: String,
    },

    /// Two roster entries share the same id.
    #[error("participant already exists: \"{0}\"")]
    DuplicateParticipant(String),

    /// The roster document could not be decoded.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// The roster contained no participants.
    #[error("roster has no participants")]
    EmptyRoster,
}

/// Convenience result type for encounter operations.
pub type EncounterResult<T> = Result<T, EncounterError>;
