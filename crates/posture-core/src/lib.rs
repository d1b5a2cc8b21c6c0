//! Posture-based turn order engine.
//!
//! Participants accumulate posture every tick at a rate derived from their
//! attributes. Whoever crosses the act threshold first is offered the turn;
//! the operator then has them act, wait, or lets someone else react out of
//! order. This crate holds the state machine only: it never parses text and
//! never prints.

/// Attribute set and the posture increment formula.
pub mod attributes;
/// Thresholds and limits for an encounter.
pub mod config;
/// The encounter: act, wait, react and override operations.
pub mod encounter;
/// Posture accumulation and next-actor selection.
pub mod engine;
/// Error types for the crate.
pub mod error;
/// Encounter events and the event log.
pub mod log;
/// Participant identity and combat state.
pub mod participant;
/// Roster decoding from JSON.
pub mod roster;
/// Owned participant storage.
pub mod store;
/// Turn states and the reaction queue.
pub mod turn;

/// Re-exports of the attribute model.
pub use attributes::{Attributes, compute_increment};
/// Re-export of [`config::EncounterConfig`].
pub use config::EncounterConfig;
/// Re-exports of the encounter and its reports.
pub use encounter::{ActReport, Encounter, TickReport};
/// Re-export of [`engine::ReadinessEngine`].
pub use engine::ReadinessEngine;
/// Re-exports of [`error::EncounterError`] and [`error::EncounterResult`].
pub use error::{EncounterError, EncounterResult};
/// Re-exports of the event log types.
pub use log::{EncounterEvent, EncounterLog, EventKind};
/// Re-exports of participant types.
pub use participant::{Participant, ParticipantId};
/// Re-export of [`roster::Roster`].
pub use roster::Roster;
/// Re-export of [`store::ParticipantStore`].
pub use store::ParticipantStore;
/// Re-exports of [`turn::TurnState`] and [`turn::ReactionQueue`].
pub use turn::{ReactionQueue, TurnState};
