//! Owned storage for the participants of one encounter.

use crate::error::{EncounterError, EncounterResult};
use crate::participant::{Participant, ParticipantId};
use crate::roster::Roster;

/// All participants of an encounter, in roster order.
///
/// Participants are fixed once the store is built. Lookups go by id; the
/// store is small enough that a linear scan keeps insertion order for free.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    participants: Vec<Participant>,
}

impl ParticipantStore {
    /// Build a store from a roster. Every participant starts at zero posture.
    pub fn from_roster(roster: Roster) -> Self {
        let participants = roster
            .into_iter()
            .map(|(id, attributes)| Participant::new(id, attributes))
            .collect();
        Self { participants }
    }

    /// Look up a participant by id.
    pub fn get(&self, id: &ParticipantId) -> EncounterResult<&Participant> {
        self.participants
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| EncounterError::NotFound(id.clone()))
    }

    pub(crate) fn get_mut(&mut self, id: &ParticipantId) -> EncounterResult<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| EncounterError::NotFound(id.clone()))
    }

    /// Find a participant id by name: exact match first, then case-insensitive.
    pub fn resolve(&self, name: &str) -> Option<&ParticipantId> {
        self.participants
            .iter()
            .find(|p| p.id().as_str() == name)
            .or_else(|| {
                self.participants
                    .iter()
                    .find(|p| p.id().as_str().eq_ignore_ascii_case(name))
            })
            .map(Participant::id)
    }

    /// Adjust a participant's stamina by `delta`, re-deriving the increment.
    ///
    /// Stamina is clamped to 0..=100. Returns the new stamina.
    pub fn adjust_stamina(&mut self, id: &ParticipantId, delta: f64) -> EncounterResult<f64> {
        if !delta.is_finite() {
            return Err(EncounterError::InvalidValue(format!(
                "stamina delta must be a finite number, got {delta}"
            )));
        }
        let participant = self.get_mut(id)?;
        let stamina = participant.adjust_stamina(delta);
        tracing::debug!(
            participant = %id,
            stamina,
            increment = participant.increment(),
            "stamina adjusted"
        );
        Ok(stamina)
    }

    /// Iterate over participants in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Participant> {
        self.participants.iter_mut()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
