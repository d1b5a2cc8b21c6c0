//! Text command gateway for Posture encounters.
//!
//! Decodes operator input into [`Command`]s, drives a
//! [`posture_core::Encounter`] and renders its outcomes as text.

/// Operator command decoding.
pub mod command;
/// Error types for the session crate.
pub mod error;
/// The interactive encounter session.
pub mod session;

pub use command::{Command, parse_command};
pub use error::{SessionError, SessionResult};
pub use session::{EncounterSession, help_text, render_tick};
