//! Interactive encounter session.
//!
//! `EncounterSession` wraps an [`Encounter`] and turns lines of operator
//! input into engine calls, returning the text to show. Posture is rendered
//! with two decimals here; the engine itself only deals in numbers.

use posture_core::{
    Encounter, EncounterConfig, EncounterResult, Participant, ParticipantId, Roster, TickReport,
};

use crate::command::{Command, parse_command};
use crate::error::SessionResult;

/// How many log entries `log` shows.
const LOG_WINDOW: usize = 10;

/// An interactive encounter driven by text commands.
#[derive(Debug)]
pub struct EncounterSession {
    encounter: Encounter,
}

impl EncounterSession {
    /// Start a session from a roster.
    pub fn new(roster: Roster, config: EncounterConfig) -> EncounterResult<Self> {
        Ok(Self {
            encounter: Encounter::new(roster, config)?,
        })
    }

    /// Wrap an existing encounter.
    pub fn from_encounter(encounter: Encounter) -> Self {
        Self { encounter }
    }

    /// The underlying encounter.
    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    /// Process a line of operator input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let command = parse_command(input)?;
        tracing::trace!(?command, "processing command");
        self.execute(command)
    }

    /// Run an already decoded command.
    pub fn execute(&mut self, command: Command) -> SessionResult<String> {
        match command {
            Command::Tick => Ok(self.do_tick()),
            Command::Act { name } => self.do_act(&name),
            Command::Wait { name } => self.do_wait(&name),
            Command::React { name } => self.do_react(&name),
            Command::Stamina { name, delta } => self.do_stamina(&name, delta),
            Command::Posture { name, value } => self.do_posture(&name, value),
            Command::Status => Ok(self.do_status()),
            Command::Log { name: None } => Ok(self.do_log()),
            Command::Log { name: Some(name) } => self.do_participant_log(&name),
            Command::Help => Ok(help_text().to_string()),
            Command::Quit => Ok("Goodbye!".to_string()),
        }
    }

    /// Map typed names onto participant ids. Unknown names pass through so
    /// the encounter reports them as not found.
    fn id_for(&self, name: &str) -> ParticipantId {
        self.encounter
            .resolve(name)
            .cloned()
            .unwrap_or_else(|| ParticipantId::new(name))
    }

    fn do_tick(&mut self) -> String {
        let report = self.encounter.advance_tick();
        render_tick(&report, self.encounter.participants())
    }

    fn do_act(&mut self, name: &str) -> SessionResult<String> {
        let id = self.id_for(name);
        let report = self.encounter.act(&id)?;
        let mut out = format!("{id} acts! Posture reset (spent {:.2}).", report.spent);
        if report.was_reaction {
            out.push_str(" Reaction resolved.");
        }
        Ok(out)
    }

    fn do_wait(&mut self, name: &str) -> SessionResult<String> {
        let id = self.id_for(name);
        let withdrew = self.encounter.wait(&id)?;
        let readiness = self.encounter.participant(&id)?.readiness();
        let mut out = format!("{id} waits, holding posture at {readiness:.2}.");
        if withdrew {
            out.push_str(" Reaction withdrawn.");
        }
        Ok(out)
    }

    fn do_react(&mut self, name: &str) -> SessionResult<String> {
        let id = self.id_for(name);
        let position = self.encounter.react(&id)?;
        if position == 1 {
            Ok(format!("{id} reacts and will act next!"))
        } else {
            Ok(format!(
                "{id} reacts and will act after {} pending reaction{}.",
                position - 1,
                if position == 2 { "" } else { "s" }
            ))
        }
    }

    fn do_stamina(&mut self, name: &str, delta: f64) -> SessionResult<String> {
        let id = self.id_for(name);
        let stamina = self.encounter.set_stamina(&id, delta)?;
        let increment = self.encounter.participant(&id)?.increment();
        Ok(format!(
            "{id}'s stamina is now {stamina:.0} (posture +{increment:.2}/turn)."
        ))
    }

    fn do_posture(&mut self, name: &str, value: f64) -> SessionResult<String> {
        let id = self.id_for(name);
        let readiness = self.encounter.set_posture(&id, value)?;
        Ok(format!("{id}'s posture set to {readiness:.2}."))
    }

    fn do_status(&self) -> String {
        let width = self
            .encounter
            .participants()
            .map(|p| p.id().as_str().len())
            .max()
            .unwrap_or(0);

        let mut out = format!("Turn {}\n", self.encounter.tick());
        for p in self.encounter.participants() {
            let state = self
                .encounter
                .state_of(p.id())
                .map(|s| s.to_string())
                .unwrap_or_default();
            out.push_str(&format!(
                "  {:<width$}  posture {:>6.2}  +{:.2}/turn  stamina {:>3.0}  {}\n",
                p.id().as_str(),
                p.readiness(),
                p.increment(),
                p.attributes().stamina,
                state,
            ));
        }

        match self.encounter.next_actor() {
            Some(id) => out.push_str(&format!("Next up: {id}\n")),
            None => out.push_str("Nobody can act yet.\n"),
        }

        let pending: Vec<_> = self
            .encounter
            .pending_reactions()
            .map(ParticipantId::as_str)
            .collect();
        if !pending.is_empty() {
            out.push_str(&format!("Pending reactions: {}\n", pending.join(", ")));
        }
        out.trim_end().to_string()
    }

    fn do_log(&self) -> String {
        let log = self.encounter.log();
        if log.is_empty() {
            return "Log is empty.".to_string();
        }
        let recent = log.recent(LOG_WINDOW);
        let mut out = format!(
            "Log ({} events, showing last {}):\n",
            log.len(),
            recent.len()
        );
        for event in recent {
            out.push_str(&format!("  [turn {:>3}] {}\n", event.tick, event.description));
        }
        out.trim_end().to_string()
    }

    fn do_participant_log(&self, name: &str) -> SessionResult<String> {
        let id = self.id_for(name);
        self.encounter.participant(&id)?;
        let events: Vec<_> = self.encounter.log().for_participant(&id).collect();
        if events.is_empty() {
            return Ok(format!("No events for {id}."));
        }
        let shown = &events[events.len().saturating_sub(LOG_WINDOW)..];
        let mut out = format!(
            "Log for {id} ({} events, showing last {}):\n",
            events.len(),
            shown.len()
        );
        for event in shown {
            out.push_str(&format!("  [turn {:>3}] {}\n", event.tick, event.description));
        }
        Ok(out.trim_end().to_string())
    }
}

/// Render the result of a tick: every participant's posture, then who may act.
pub fn render_tick<'a>(
    report: &TickReport,
    participants: impl Iterator<Item = &'a Participant>,
) -> String {
    let mut out = format!("--- Turn {} ---\n", report.tick);
    for p in participants {
        out.push_str(&format!("{}'s Posture: {:.2}\n", p.id(), p.readiness()));
    }
    match &report.next_actor {
        Some(id) if report.from_reaction => {
            out.push_str(&format!("\n{id} can act now! (reaction)"));
        }
        Some(id) => out.push_str(&format!("\n{id} can act now!")),
        None => {}
    }
    out.trim_end().to_string()
}

/// Command reference shown by `help`.
pub fn help_text() -> &'static str {
    "\
Encounter Commands:
  <enter> | tick              Advance one turn
  act <name>                  Act with an eligible participant (posture resets)
  wait <name>                 Hold an eligible participant's turn
  react <name> | <name>       Declare a reaction (posture must exceed 75)
  stamina <name> <delta>      Change stamina, e.g. stamina Kael -10
  posture <name> <value>      Override posture (capped at 100)
  status                      Show every participant
  log [name]                  Show recent events, optionally for one participant
  help                        Show this help
  quit                        Exit"
}
