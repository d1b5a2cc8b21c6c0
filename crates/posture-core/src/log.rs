//! Encounter events and the event log.

use serde::Serialize;

use crate::participant::ParticipantId;

/// What kind of encounter event occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// The clock advanced one tick.
    TickAdvanced,
    /// A participant was offered the next turn.
    TurnOffered {
        /// The participant offered the turn.
        participant: ParticipantId,
        /// Whether the offer came from a pending reaction.
        from_reaction: bool,
    },
    /// A participant acted and their posture was reset.
    Acted {
        /// The acting participant.
        participant: ParticipantId,
        /// Posture spent on the action.
        readiness: f64,
    },
    /// An eligible participant held their turn.
    Waited {
        /// The waiting participant.
        participant: ParticipantId,
    },
    /// A participant declared a reaction out of turn order.
    ReactionDeclared {
        /// The reacting participant.
        participant: ParticipantId,
    },
    /// The operator overrode a participant's posture.
    PostureSet {
        /// The affected participant.
        participant: ParticipantId,
        /// The posture after clamping.
        readiness: f64,
    },
    /// A participant's stamina changed.
    StaminaAdjusted {
        /// The affected participant.
        participant: ParticipantId,
        /// Stamina after clamping.
        stamina: f64,
        /// Recomputed posture increment.
        increment: f64,
    },
}

impl EventKind {
    /// Check whether a given participant is involved in this event.
    pub fn involves(&self, id: &ParticipantId) -> bool {
        match self {
            Self::TickAdvanced => false,
            Self::TurnOffered { participant, .. }
            | Self::Acted { participant, .. }
            | Self::Waited { participant }
            | Self::ReactionDeclared { participant }
            | Self::PostureSet { participant, .. }
            | Self::StaminaAdjusted { participant, .. } => participant == id,
        }
    }
}

/// A record of something that happened during the encounter.
#[derive(Debug, Clone, Serialize)]
pub struct EncounterEvent {
    /// The tick during which this event occurred.
    pub tick: u64,
    /// The specific kind of event.
    #[serde(flatten)]
    pub kind: EventKind,
    /// A human-readable description.
    pub description: String,
}

impl EncounterEvent {
    /// Create a new event.
    pub fn new(tick: u64, kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during an encounter.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EncounterLog {
    events: Vec<EncounterEvent>,
    #[serde(skip)]
    max_events: usize,
}

impl EncounterLog {
    /// Create a new log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if over capacity.
    pub fn push(&mut self, event: EncounterEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[EncounterEvent] {
        &self.events
    }

    /// The most recent `n` events, oldest first.
    pub fn recent(&self, n: usize) -> &[EncounterEvent] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }

    /// Events involving the given participant.
    pub fn for_participant<'a>(
        &'a self,
        id: &'a ParticipantId,
    ) -> impl Iterator<Item = &'a EncounterEvent> + 'a {
        self.events.iter().filter(move |e| e.kind.involves(id))
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
