//! The encounter: turn controller over a participant store.
//!
//! `Encounter` owns the participants, the readiness engine, the reaction
//! queue and the event log. Every operator intent (tick, act, wait, react,
//! posture override, stamina change) is a method returning a typed outcome.
//! A rejected operation changes nothing.

use serde::Serialize;

use crate::config::EncounterConfig;
use crate::engine::ReadinessEngine;
use crate::error::{EncounterError, EncounterResult};
use crate::log::{EncounterEvent, EncounterLog, EventKind};
use crate::participant::{Participant, ParticipantId};
use crate::roster::Roster;
use crate::store::ParticipantStore;
use crate::turn::{ReactionQueue, TurnState};

/// The result of advancing the clock one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Tick number after advancing (1-based).
    pub tick: u64,
    /// Who is offered the turn, if anyone.
    pub next_actor: Option<ParticipantId>,
    /// Whether the offer went to a pending reaction rather than posture order.
    pub from_reaction: bool,
}

/// The result of a participant acting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActReport {
    /// The participant that acted.
    pub participant: ParticipantId,
    /// Posture held before the reset.
    pub spent: f64,
    /// Whether the act consumed a declared reaction.
    pub was_reaction: bool,
}

/// A running combat encounter.
#[derive(Debug, Clone)]
pub struct Encounter {
    store: ParticipantStore,
    engine: ReadinessEngine,
    reactions: ReactionQueue,
    config: EncounterConfig,
    tick: u64,
    log: EncounterLog,
}

impl Encounter {
    /// Start an encounter from a roster.
    ///
    /// Fails with `InvalidValue` if the config's thresholds are unusable.
    pub fn new(roster: Roster, config: EncounterConfig) -> EncounterResult<Self> {
        if roster.is_empty() {
            return Err(EncounterError::EmptyRoster);
        }
        config.validate()?;
        let store = ParticipantStore::from_roster(roster);
        tracing::debug!(participants = store.len(), "encounter started");
        Ok(Self {
            store,
            engine: ReadinessEngine::new(&config),
            reactions: ReactionQueue::new(),
            log: EncounterLog::new(config.max_events),
            config,
            tick: 0,
        })
    }

    /// Start an encounter from roster JSON with the default configuration.
    pub fn from_json(json: &str) -> EncounterResult<Self> {
        Self::new(Roster::from_json(json)?, EncounterConfig::default())
    }

    /// Current tick (0 before the first advance).
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The encounter configuration.
    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// The event log.
    pub fn log(&self) -> &EncounterLog {
        &self.log
    }

    /// The participant store.
    pub fn store(&self) -> &ParticipantStore {
        &self.store
    }

    /// Participants in roster order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.store.iter()
    }

    /// Look up a participant.
    pub fn participant(&self, id: &ParticipantId) -> EncounterResult<&Participant> {
        self.store.get(id)
    }

    /// Find a participant id by name (exact, then case-insensitive).
    pub fn resolve(&self, name: &str) -> Option<&ParticipantId> {
        self.store.resolve(name)
    }

    /// Pending reactions, next first.
    pub fn pending_reactions(&self) -> impl Iterator<Item = &ParticipantId> {
        self.reactions.iter()
    }

    /// Turn state of a participant.
    pub fn state_of(&self, id: &ParticipantId) -> EncounterResult<TurnState> {
        let participant = self.store.get(id)?;
        Ok(self.state(participant))
    }

    /// Who would be offered the turn right now, without ticking.
    pub fn next_actor(&self) -> Option<&ParticipantId> {
        self.reactions
            .front()
            .or_else(|| self.engine.select_next_actor(&self.store))
    }

    /// Advance every participant's posture by one tick and report who may act.
    ///
    /// A declared reaction holds the next opportunity and is offered ahead of
    /// the posture winner.
    pub fn advance_tick(&mut self) -> TickReport {
        self.tick += 1;
        let by_posture = self.engine.advance_tick(&mut self.store);
        self.record(EventKind::TickAdvanced, format!("Turn {}", self.tick));

        let (next_actor, from_reaction) = match self.reactions.front() {
            Some(id) => (Some(id.clone()), true),
            None => (by_posture, false),
        };

        tracing::debug!(
            tick = self.tick,
            next_actor = next_actor.as_ref().map(ParticipantId::as_str),
            from_reaction,
            "tick advanced"
        );

        if let Some(id) = &next_actor {
            let description = if from_reaction {
                format!("{id} takes the reaction opportunity")
            } else {
                format!("{id} can act")
            };
            self.record(
                EventKind::TurnOffered {
                    participant: id.clone(),
                    from_reaction,
                },
                description,
            );
        }

        TickReport {
            tick: self.tick,
            next_actor,
            from_reaction,
        }
    }

    /// Act with an eligible or reacting participant, resetting their posture.
    pub fn act(&mut self, id: &ParticipantId) -> EncounterResult<ActReport> {
        let threshold = self.config.act_threshold;
        let participant = self.store.get(id)?;
        if !self.state(participant).can_act() {
            return Err(ineligible(
                id,
                "act",
                participant.readiness(),
                format!(">= {threshold}"),
            ));
        }

        let participant = self.store.get_mut(id)?;
        let spent = participant.readiness();
        participant.set_readiness(0.0);
        let was_reaction = self.reactions.remove(id);

        tracing::info!(participant = %id, spent, was_reaction, "participant acted");
        self.record(
            EventKind::Acted {
                participant: id.clone(),
                readiness: spent,
            },
            format!("{id} acts"),
        );

        Ok(ActReport {
            participant: id.clone(),
            spent,
            was_reaction,
        })
    }

    /// Hold an eligible or reacting participant's turn. Posture is untouched
    /// and keeps accumulating.
    ///
    /// A reacting participant that waits gives up the reaction and goes back
    /// to normal posture order. Returns true if a reaction was withdrawn.
    pub fn wait(&mut self, id: &ParticipantId) -> EncounterResult<bool> {
        let threshold = self.config.act_threshold;
        let participant = self.store.get(id)?;
        if !self.state(participant).can_act() {
            return Err(ineligible(
                id,
                "wait",
                participant.readiness(),
                format!(">= {threshold}"),
            ));
        }

        let withdrew = self.reactions.remove(id);
        tracing::debug!(participant = %id, withdrew, "participant waits");
        let description = if withdrew {
            format!("{id} waits and withdraws the reaction")
        } else {
            format!("{id} waits")
        };
        self.record(
            EventKind::Waited {
                participant: id.clone(),
            },
            description,
        );
        Ok(withdrew)
    }

    /// Declare a reaction out of turn order.
    ///
    /// Requires posture strictly above the react threshold and no reaction
    /// already pending. The participant is queued for the next turn offer;
    /// posture is only reset by the later [`Encounter::act`].
    /// Returns the reaction's 1-based position in the queue.
    pub fn react(&mut self, id: &ParticipantId) -> EncounterResult<usize> {
        let threshold = self.config.react_threshold;
        let participant = self.store.get(id)?;
        if self.reactions.contains(id) {
            return Err(ineligible(
                id,
                "react",
                participant.readiness(),
                "no pending reaction".to_string(),
            ));
        }
        if participant.readiness() <= threshold {
            return Err(ineligible(
                id,
                "react",
                participant.readiness(),
                format!("> {threshold}"),
            ));
        }

        let position = self.reactions.push(id.clone());

        tracing::info!(participant = %id, position, "reaction declared");
        self.record(
            EventKind::ReactionDeclared {
                participant: id.clone(),
            },
            format!("{id} reacts and will act next"),
        );
        Ok(position)
    }

    /// Override a participant's posture. Values above the ceiling are capped.
    ///
    /// Returns the posture actually stored.
    pub fn set_posture(&mut self, id: &ParticipantId, value: f64) -> EncounterResult<f64> {
        if !value.is_finite() || value < 0.0 {
            return Err(EncounterError::InvalidValue(format!(
                "posture must be a non-negative number, got {value}"
            )));
        }
        let readiness = value.min(self.config.max_readiness);
        self.store.get_mut(id)?.set_readiness(readiness);

        tracing::debug!(participant = %id, readiness, "posture overridden");
        self.record(
            EventKind::PostureSet {
                participant: id.clone(),
                readiness,
            },
            format!("{id}'s posture set to {readiness:.2}"),
        );
        Ok(readiness)
    }

    /// Change a participant's stamina by `delta`. Returns the new stamina.
    pub fn set_stamina(&mut self, id: &ParticipantId, delta: f64) -> EncounterResult<f64> {
        let stamina = self.store.adjust_stamina(id, delta)?;
        let increment = self.store.get(id)?.increment();
        self.record(
            EventKind::StaminaAdjusted {
                participant: id.clone(),
                stamina,
                increment,
            },
            format!("{id}'s stamina is now {stamina:.0} (posture +{increment:.2}/turn)"),
        );
        Ok(stamina)
    }

    fn state(&self, participant: &Participant) -> TurnState {
        if self.reactions.contains(participant.id()) {
            TurnState::Reacting
        } else if self.engine.is_eligible(participant) {
            TurnState::Eligible
        } else {
            TurnState::Idle
        }
    }

    fn record(&mut self, kind: EventKind, description: String) {
        self.log
            .push(EncounterEvent::new(self.tick, kind, description));
    }
}

fn ineligible(
    id: &ParticipantId,
    action: &'static str,
    readiness: f64,
    requirement: String,
) -> EncounterError {
    tracing::debug!(participant = %id, action, readiness, "operation rejected");
    EncounterError::Ineligible {
        id: id.clone(),
        action,
        readiness,
        requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use proptest::prelude::*;

    /// Kael: increment 11.7. Mirra: increment 10. Bram: increment 17.
    fn encounter() -> Encounter {
        let roster = Roster::new()
            .with("Kael", Attributes::new(8.0, 6.0, 3.0, 40.0))
            .unwrap()
            .with("Mirra", Attributes::new(5.0, 5.0, 5.0, 90.0))
            .unwrap()
            .with("Bram", Attributes::new(12.0, 5.0, 5.0, 100.0))
            .unwrap();
        Encounter::new(roster, EncounterConfig::default()).unwrap()
    }

    fn id(name: &str) -> ParticipantId {
        ParticipantId::new(name)
    }

    fn readiness(e: &Encounter, name: &str) -> f64 {
        e.participant(&id(name)).unwrap().readiness()
    }

    #[test]
    fn empty_roster_rejected() {
        assert!(matches!(
            Encounter::new(Roster::new(), EncounterConfig::default()),
            Err(EncounterError::EmptyRoster)
        ));
    }

    #[test]
    fn unusable_config_rejected() {
        let configs = [
            EncounterConfig::default().with_max_readiness(-1.0),
            EncounterConfig::default().with_max_readiness(f64::NAN),
            EncounterConfig::default().with_act_threshold(f64::INFINITY),
            EncounterConfig::default().with_react_threshold(f64::NAN),
        ];
        for config in configs {
            let roster = Roster::new()
                .with("Solo", Attributes::new(5.0, 5.0, 5.0, 100.0))
                .unwrap();
            assert!(matches!(
                Encounter::new(roster, config),
                Err(EncounterError::InvalidValue(_))
            ));
        }
    }

    #[test]
    fn zero_ceiling_ticks_without_panicking() {
        let roster = Roster::new()
            .with("Solo", Attributes::new(5.0, 5.0, 5.0, 100.0))
            .unwrap();
        let config = EncounterConfig::default()
            .with_max_readiness(0.0)
            .with_act_threshold(0.0);
        let mut e = Encounter::new(roster, config).unwrap();
        assert_eq!(e.advance_tick().next_actor, Some(id("Solo")));
        assert_eq!(readiness(&e, "Solo"), 0.0);
    }

    #[test]
    fn from_json_builds_encounter() {
        let e = Encounter::from_json(
            r#"{ "Kael": { "Footwork": 8, "Agility": 6, "Skill": 3, "Stamina": 40 } }"#,
        )
        .unwrap();
        assert_eq!(e.participants().count(), 1);
        assert_eq!(e.tick(), 0);
    }

    #[test]
    fn first_turn_goes_to_fastest() {
        let mut e = encounter();
        for _ in 0..4 {
            let report = e.advance_tick();
            assert!(report.next_actor.is_none());
        }
        // Bram at 85, Kael at 58.5, Mirra at 50.
        let report = e.advance_tick();
        assert_eq!(report.tick, 5);
        assert_eq!(report.next_actor, Some(id("Bram")));
        assert!(!report.from_reaction);
        assert_eq!(e.state_of(&id("Bram")).unwrap(), TurnState::Eligible);
        assert_eq!(e.state_of(&id("Kael")).unwrap(), TurnState::Idle);
    }

    #[test]
    fn act_resets_posture() {
        let mut e = encounter();
        for _ in 0..5 {
            e.advance_tick();
        }
        let report = e.act(&id("Bram")).unwrap();
        assert_eq!(report.spent, 85.0);
        assert!(!report.was_reaction);
        assert_eq!(readiness(&e, "Bram"), 0.0);
        assert_eq!(e.state_of(&id("Bram")).unwrap(), TurnState::Idle);
    }

    #[test]
    fn act_while_idle_is_ineligible() {
        let mut e = encounter();
        e.advance_tick();
        let err = e.act(&id("Kael")).unwrap_err();
        assert!(matches!(err, EncounterError::Ineligible { action: "act", .. }));
        assert!((readiness(&e, "Kael") - 11.7).abs() < 1e-9);
    }

    #[test]
    fn act_unknown_is_not_found() {
        let mut e = encounter();
        assert!(matches!(
            e.act(&id("Nobody")),
            Err(EncounterError::NotFound(_))
        ));
    }

    #[test]
    fn wait_keeps_eligibility_and_accumulates() {
        let mut e = encounter();
        for _ in 0..5 {
            e.advance_tick();
        }
        assert!(!e.wait(&id("Bram")).unwrap());
        assert_eq!(readiness(&e, "Bram"), 85.0);

        let report = e.advance_tick();
        assert_eq!(report.next_actor, Some(id("Bram")));
        assert_eq!(readiness(&e, "Bram"), 100.0);
        assert_eq!(e.state_of(&id("Bram")).unwrap(), TurnState::Eligible);

        e.advance_tick();
        assert_eq!(readiness(&e, "Bram"), 100.0);
    }

    #[test]
    fn wait_while_idle_is_ineligible() {
        let mut e = encounter();
        let log_len = e.log().len();
        assert!(matches!(
            e.wait(&id("Mirra")),
            Err(EncounterError::Ineligible { action: "wait", .. })
        ));
        assert_eq!(e.log().len(), log_len);
    }

    #[test]
    fn wait_unknown_is_not_found() {
        let mut e = encounter();
        let log_len = e.log().len();
        assert!(matches!(
            e.wait(&id("Nobody")),
            Err(EncounterError::NotFound(_))
        ));
        assert_eq!(e.log().len(), log_len);
    }

    #[test]
    fn waiting_withdraws_a_pending_reaction() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 80.0).unwrap();
        e.react(&id("Kael")).unwrap();
        assert_eq!(e.state_of(&id("Kael")).unwrap(), TurnState::Reacting);

        assert!(e.wait(&id("Kael")).unwrap());
        assert_eq!(e.pending_reactions().count(), 0);
        assert_eq!(e.state_of(&id("Kael")).unwrap(), TurnState::Eligible);
        assert_eq!(readiness(&e, "Kael"), 80.0);
    }

    #[test]
    fn withdrawn_reaction_does_not_block_others() {
        let roster = Roster::new()
            .with("Bram", Attributes::new(12.0, 5.0, 5.0, 100.0))
            .unwrap()
            .with("Kael", Attributes::new(8.0, 6.0, 3.0, 40.0))
            .unwrap();
        let mut e = Encounter::new(roster, EncounterConfig::default()).unwrap();
        e.set_posture(&id("Kael"), 80.0).unwrap();
        e.react(&id("Kael")).unwrap();

        // Kael keeps waiting at the cap; Bram catches up and wins the tie.
        let mut offered = Vec::new();
        for _ in 0..10 {
            e.wait(&id("Kael")).unwrap();
            let report = e.advance_tick();
            assert!(!report.from_reaction);
            if let Some(next) = report.next_actor {
                offered.push(next);
            }
        }
        assert!(offered.contains(&id("Bram")));
        assert_eq!(e.pending_reactions().count(), 0);
    }

    #[test]
    fn react_requires_strictly_above_threshold() {
        let mut e = encounter();
        e.set_posture(&id("Mirra"), 75.0).unwrap();
        assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Eligible);

        let err = e.react(&id("Mirra")).unwrap_err();
        assert!(matches!(err, EncounterError::Ineligible { action: "react", .. }));
        assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Eligible);
        assert_eq!(e.pending_reactions().count(), 0);
    }

    #[test]
    fn react_unknown_is_not_found() {
        let mut e = encounter();
        assert!(matches!(
            e.react(&id("Nobody")),
            Err(EncounterError::NotFound(_))
        ));
    }

    #[test]
    fn reaction_takes_next_opportunity() {
        let mut e = encounter();
        e.set_posture(&id("Mirra"), 80.0).unwrap();
        assert_eq!(e.react(&id("Mirra")).unwrap(), 1);
        assert_eq!(readiness(&e, "Mirra"), 80.0);
        assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Reacting);
        assert_eq!(e.next_actor(), Some(&id("Mirra")));

        // Bram would win on posture once eligible, but the reaction goes first.
        for _ in 0..4 {
            e.advance_tick();
        }
        e.set_posture(&id("Bram"), 100.0).unwrap();
        let report = e.advance_tick();
        assert_eq!(report.next_actor, Some(id("Mirra")));
        assert!(report.from_reaction);

        let act = e.act(&id("Mirra")).unwrap();
        assert!(act.was_reaction);
        assert_eq!(readiness(&e, "Mirra"), 0.0);
        assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Idle);
        assert_eq!(e.next_actor(), Some(&id("Bram")));
    }

    #[test]
    fn reaction_cannot_be_declared_twice() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 90.0).unwrap();
        e.react(&id("Kael")).unwrap();
        assert!(matches!(
            e.react(&id("Kael")),
            Err(EncounterError::Ineligible { .. })
        ));
        assert_eq!(e.pending_reactions().count(), 1);
    }

    #[test]
    fn reactions_are_served_in_declaration_order() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 90.0).unwrap();
        e.set_posture(&id("Mirra"), 95.0).unwrap();
        assert_eq!(e.react(&id("Kael")).unwrap(), 1);
        assert_eq!(e.react(&id("Mirra")).unwrap(), 2);

        assert_eq!(e.advance_tick().next_actor, Some(id("Kael")));
        e.act(&id("Kael")).unwrap();
        assert_eq!(e.advance_tick().next_actor, Some(id("Mirra")));
    }

    #[test]
    fn acting_normally_clears_pending_reaction() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 90.0).unwrap();
        e.react(&id("Kael")).unwrap();
        let report = e.act(&id("Kael")).unwrap();
        assert!(report.was_reaction);
        assert_eq!(e.pending_reactions().count(), 0);
    }

    #[test]
    fn posture_override_caps_at_ceiling() {
        let mut e = encounter();
        assert_eq!(e.set_posture(&id("Kael"), 150.0).unwrap(), 100.0);
        assert_eq!(readiness(&e, "Kael"), 100.0);
    }

    #[test]
    fn posture_override_rejects_bad_values() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 30.0).unwrap();
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                e.set_posture(&id("Kael"), bad),
                Err(EncounterError::InvalidValue(_))
            ));
        }
        assert_eq!(readiness(&e, "Kael"), 30.0);
    }

    #[test]
    fn posture_override_unknown_is_not_found() {
        let mut e = encounter();
        assert!(matches!(
            e.set_posture(&id("Nobody"), 50.0),
            Err(EncounterError::NotFound(_))
        ));
        assert!(e.log().is_empty());
    }

    #[test]
    fn rejected_posture_override_is_not_logged() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 30.0).unwrap();
        let log_len = e.log().len();
        assert!(e.set_posture(&id("Kael"), f64::NAN).is_err());
        assert!(e.set_posture(&id("Kael"), -5.0).is_err());
        assert_eq!(e.log().len(), log_len);
    }

    #[test]
    fn stamina_change_recomputes_increment_only() {
        let mut e = encounter();
        e.set_posture(&id("Kael"), 80.0).unwrap();
        assert_eq!(e.set_stamina(&id("Kael"), 15.0).unwrap(), 55.0);

        let kael = e.participant(&id("Kael")).unwrap();
        assert!((kael.increment() - 13.0).abs() < 1e-9);
        assert_eq!(kael.readiness(), 80.0);
        assert_eq!(e.state_of(&id("Kael")).unwrap(), TurnState::Eligible);
    }

    #[test]
    fn stamina_change_clamps() {
        let mut e = encounter();
        assert_eq!(e.set_stamina(&id("Mirra"), 50.0).unwrap(), 100.0);
        assert_eq!(e.set_stamina(&id("Mirra"), -250.0).unwrap(), 0.0);
        let mirra = e.participant(&id("Mirra")).unwrap();
        assert!((mirra.increment() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn log_records_operations() {
        let mut e = encounter();
        for _ in 0..5 {
            e.advance_tick();
        }
        e.act(&id("Bram")).unwrap();
        let kinds: Vec<_> = e.log().events().iter().map(|ev| &ev.kind).collect();
        assert!(kinds.contains(&&EventKind::TurnOffered {
            participant: id("Bram"),
            from_reaction: false,
        }));
        assert!(matches!(
            e.log().events().last().unwrap().kind,
            EventKind::Acted { .. }
        ));
        assert_eq!(e.log().events().last().unwrap().tick, 5);
    }

    #[test]
    fn log_respects_capacity() {
        let roster = Roster::new()
            .with("Solo", Attributes::new(5.0, 5.0, 5.0, 100.0))
            .unwrap();
        let mut e = Encounter::new(roster, EncounterConfig::default().with_max_events(3)).unwrap();
        for _ in 0..10 {
            e.advance_tick();
        }
        assert_eq!(e.log().len(), 3);
    }

    #[test]
    fn custom_thresholds() {
        let roster = Roster::new()
            .with("Solo", Attributes::new(5.0, 5.0, 5.0, 100.0))
            .unwrap();
        let config = EncounterConfig::default().with_act_threshold(30.0);
        let mut e = Encounter::new(roster, config).unwrap();
        assert!(e.advance_tick().next_actor.is_none());
        assert!(e.advance_tick().next_actor.is_none());
        assert_eq!(e.advance_tick().next_actor, Some(id("Solo")));
    }

    proptest! {
        #[test]
        fn act_always_zeroes_posture(value in 75.0f64..=100.0, ticks in 0usize..5) {
            let mut e = encounter();
            for _ in 0..ticks {
                e.advance_tick();
            }
            e.set_posture(&id("Mirra"), value).unwrap();
            e.act(&id("Mirra")).unwrap();
            prop_assert_eq!(readiness(&e, "Mirra"), 0.0);
        }

        #[test]
        fn react_rejected_at_or_below_threshold(value in 0.0f64..=75.0) {
            let mut e = encounter();
            e.set_posture(&id("Kael"), value).unwrap();
            let is_ineligible = matches!(
                e.react(&id("Kael")),
                Err(EncounterError::Ineligible { .. })
            );
            prop_assert!(is_ineligible);
            prop_assert_eq!(e.pending_reactions().count(), 0);
        }

        #[test]
        fn eligibility_holds_until_act(waits in 1usize..10) {
            let mut e = encounter();
            e.set_posture(&id("Mirra"), 75.0).unwrap();
            for _ in 0..waits {
                e.wait(&id("Mirra")).unwrap();
                e.advance_tick();
                prop_assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Eligible);
            }
            e.act(&id("Mirra")).unwrap();
            prop_assert_eq!(e.state_of(&id("Mirra")).unwrap(), TurnState::Idle);
        }
    }
}
