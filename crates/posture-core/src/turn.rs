//! Per-participant turn state and the pending reaction queue.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::participant::ParticipantId;

/// Where a participant stands in the turn cycle.
///
/// Acting is not a resting state: an act resets posture and the participant
/// drops straight back to [`TurnState::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// Posture below the act threshold and no reaction pending.
    Idle,
    /// Posture at or above the act threshold.
    Eligible,
    /// A reaction was declared and has not been acted on yet.
    Reacting,
}

impl TurnState {
    /// Whether the participant may act or wait in this state.
    pub fn can_act(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Eligible => write!(f, "eligible"),
            Self::Reacting => write!(f, "reacting"),
        }
    }
}

/// Declared reactions, in the order they were declared.
///
/// The front of the queue takes the next turn offer ahead of normal
/// posture order.
#[derive(Debug, Clone, Default)]
pub struct ReactionQueue {
    pending: VecDeque<ParticipantId>,
}

impl ReactionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reaction. Returns its 1-based position.
    pub fn push(&mut self, id: ParticipantId) -> usize {
        self.pending.push_back(id);
        self.pending.len()
    }

    /// The reaction that holds the next opportunity.
    pub fn front(&self) -> Option<&ParticipantId> {
        self.pending.front()
    }

    /// Drop a participant's reaction. Returns true if one was pending.
    pub fn remove(&mut self, id: &ParticipantId) -> bool {
        let len_before = self.pending.len();
        self.pending.retain(|p| p != id);
        self.pending.len() < len_before
    }

    /// Whether the participant has a reaction queued.
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.pending.contains(id)
    }

    /// Pending reactions, front first.
    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut q = ReactionQueue::new();
        assert_eq!(q.push("A".into()), 1);
        assert_eq!(q.push("B".into()), 2);
        assert_eq!(q.front().unwrap().as_str(), "A");

        assert!(q.remove(&"A".into()));
        assert_eq!(q.front().unwrap().as_str(), "B");
        assert!(!q.remove(&"A".into()));
        assert!(!q.contains(&"A".into()));
        assert!(q.contains(&"B".into()));
        assert_eq!(q.iter().count(), 1);
    }

    #[test]
    fn idle_cannot_act() {
        assert!(!TurnState::Idle.can_act());
        assert!(TurnState::Eligible.can_act());
        assert!(TurnState::Reacting.can_act());
    }

    #[test]
    fn state_display() {
        assert_eq!(TurnState::Reacting.to_string(), "reacting");
    }
}
