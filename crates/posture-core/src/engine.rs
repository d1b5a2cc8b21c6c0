//! Posture accumulation and next-actor selection.

use crate::config::EncounterConfig;
use crate::participant::{Participant, ParticipantId};
use crate::store::ParticipantStore;

/// Advances posture one tick at a time and picks who may act.
#[derive(Debug, Clone)]
pub struct ReadinessEngine {
    act_threshold: f64,
    max_readiness: f64,
}

impl ReadinessEngine {
    /// Create an engine using the thresholds from `config`.
    pub fn new(config: &EncounterConfig) -> Self {
        Self {
            act_threshold: config.act_threshold,
            max_readiness: config.max_readiness,
        }
    }

    /// Posture at which a participant becomes eligible.
    pub fn act_threshold(&self) -> f64 {
        self.act_threshold
    }

    /// Posture ceiling.
    pub fn max_readiness(&self) -> f64 {
        self.max_readiness
    }

    /// Whether `participant` has enough posture to take a turn.
    pub fn is_eligible(&self, participant: &Participant) -> bool {
        participant.readiness() >= self.act_threshold
    }

    /// Add every participant's increment to their posture, keeping it within
    /// `0..=max_readiness`, then return the next actor if anyone is eligible.
    pub fn advance_tick(&self, store: &mut ParticipantStore) -> Option<ParticipantId> {
        for participant in store.iter_mut() {
            let next = (participant.readiness() + participant.increment())
                .clamp(0.0, self.max_readiness);
            participant.set_readiness(next);
        }
        self.select_next_actor(store).cloned()
    }

    /// The eligible participant with the highest posture.
    ///
    /// Ties go to whoever comes first in roster order.
    pub fn select_next_actor<'a>(&self, store: &'a ParticipantStore) -> Option<&'a ParticipantId> {
        let mut best: Option<&Participant> = None;
        for participant in store.iter().filter(|p| self.is_eligible(p)) {
            match best {
                Some(current) if participant.readiness() <= current.readiness() => {}
                _ => best = Some(participant),
            }
        }
        best.map(Participant::id)
    }
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::new(&EncounterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::roster::Roster;
    use proptest::prelude::*;

    fn store_of(entries: &[(&str, Attributes)]) -> ParticipantStore {
        let mut roster = Roster::new();
        for (name, attrs) in entries {
            roster.add(*name, attrs.clone()).unwrap();
        }
        ParticipantStore::from_roster(roster)
    }

    #[test]
    fn fatigued_fighter_needs_seven_ticks() {
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[("Kael", Attributes::new(8.0, 6.0, 3.0, 40.0))]);
        for _ in 0..6 {
            assert!(engine.advance_tick(&mut store).is_none());
        }
        let readiness = store.get(&"Kael".into()).unwrap().readiness();
        assert!((readiness - 70.2).abs() < 1e-9);

        assert_eq!(engine.advance_tick(&mut store).unwrap().as_str(), "Kael");
        let readiness = store.get(&"Kael".into()).unwrap().readiness();
        assert!((readiness - 81.9).abs() < 1e-9);
    }

    #[test]
    fn posture_capped_at_max() {
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[("Fast", Attributes::new(20.0, 20.0, 20.0, 100.0))]);
        for _ in 0..10 {
            engine.advance_tick(&mut store);
        }
        assert_eq!(store.get(&"Fast".into()).unwrap().readiness(), 100.0);
    }

    #[test]
    fn negative_increment_floors_at_zero() {
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[("Slug", Attributes::new(5.0, 5.0, -60.0, 80.0))]);
        for _ in 0..5 {
            assert!(engine.advance_tick(&mut store).is_none());
        }
        assert_eq!(store.get(&"Slug".into()).unwrap().readiness(), 0.0);
    }

    #[test]
    fn highest_posture_selected() {
        // Increments 18 and 17: after 5 ticks posture is 90 and 85.
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[
            ("Second", Attributes::new(12.0, 5.0, 5.0, 100.0)),
            ("First", Attributes::new(13.0, 5.0, 5.0, 100.0)),
        ]);
        let mut actor = None;
        for _ in 0..5 {
            actor = engine.advance_tick(&mut store);
        }
        assert_eq!(store.get(&"First".into()).unwrap().readiness(), 90.0);
        assert_eq!(store.get(&"Second".into()).unwrap().readiness(), 85.0);
        assert_eq!(actor.unwrap().as_str(), "First");
    }

    #[test]
    fn ties_go_to_roster_order() {
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[
            ("Zed", Attributes::new(5.0, 5.0, 5.0, 100.0)),
            ("Alice", Attributes::new(5.0, 5.0, 5.0, 100.0)),
        ]);
        let mut actor = None;
        for _ in 0..8 {
            actor = engine.advance_tick(&mut store);
        }
        assert_eq!(actor.unwrap().as_str(), "Zed");
    }

    #[test]
    fn threshold_is_inclusive() {
        // Increment 7.5 lands exactly on 75 after 10 ticks.
        let engine = ReadinessEngine::default();
        let mut store = store_of(&[("Exact", Attributes::new(5.0, 5.0, -5.0, 100.0))]);
        for _ in 0..9 {
            assert!(engine.advance_tick(&mut store).is_none());
        }
        assert_eq!(engine.advance_tick(&mut store).unwrap().as_str(), "Exact");
        assert_eq!(store.get(&"Exact".into()).unwrap().readiness(), 75.0);
    }

    proptest! {
        #[test]
        fn posture_stays_in_bounds(
            footwork in 0.0f64..30.0,
            agility in 0.0f64..30.0,
            skill in -100.0f64..30.0,
            stamina in 0.0f64..=100.0,
            ticks in 1usize..60,
        ) {
            let engine = ReadinessEngine::default();
            let mut store = store_of(&[("P", Attributes::new(footwork, agility, skill, stamina))]);
            for _ in 0..ticks {
                engine.advance_tick(&mut store);
                let readiness = store.get(&"P".into()).unwrap().readiness();
                prop_assert!((0.0..=100.0).contains(&readiness));
            }
        }
    }
}
