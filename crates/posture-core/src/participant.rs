//! Participants and their per-encounter combat state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{self, Attributes, MAX_STAMINA, MIN_STAMINA};

/// Unique name identifying a participant for the whole encounter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Wrap a name as a participant id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The participant's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ParticipantId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A participant in the encounter.
///
/// Fields are private: stamina changes must go through
/// [`ParticipantStore`](crate::store::ParticipantStore) so the increment is
/// always recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    id: ParticipantId,
    attributes: Attributes,
    readiness: f64,
    increment: f64,
}

impl Participant {
    /// Create a participant at zero readiness.
    pub fn new(id: ParticipantId, attributes: Attributes) -> Self {
        let increment = attributes::compute_increment(&attributes);
        Self {
            id,
            attributes,
            readiness: 0.0,
            increment,
        }
    }

    /// The participant's id.
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    /// The participant's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Current posture.
    pub fn readiness(&self) -> f64 {
        self.readiness
    }

    /// Posture gained per tick.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Number of ticks from zero posture until `threshold` is reached,
    /// or `None` if the increment never gets there.
    pub fn ticks_to_reach(&self, threshold: f64) -> Option<u64> {
        if threshold <= 0.0 {
            return Some(0);
        }
        if self.increment <= 0.0 {
            return None;
        }
        Some((threshold / self.increment).ceil() as u64)
    }

    pub(crate) fn set_readiness(&mut self, value: f64) {
        self.readiness = value;
    }

    /// Adjust stamina by `delta`, clamp it and re-derive the increment.
    pub(crate) fn adjust_stamina(&mut self, delta: f64) -> f64 {
        self.attributes.stamina = (self.attributes.stamina + delta).clamp(MIN_STAMINA, MAX_STAMINA);
        self.increment = attributes::compute_increment(&self.attributes);
        self.attributes.stamina
    }
}
