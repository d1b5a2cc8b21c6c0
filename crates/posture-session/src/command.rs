//! Decoding operator input into typed commands.

use posture_core::EncounterError;

use crate::error::{SessionError, SessionResult};

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Advance the clock one tick.
    Tick,
    /// Have a participant act.
    Act {
        /// Participant name as typed.
        name: String,
    },
    /// Have a participant hold their turn.
    Wait {
        /// Participant name as typed.
        name: String,
    },
    /// Declare a reaction.
    React {
        /// Participant name as typed.
        name: String,
    },
    /// Change a participant's stamina by a delta.
    Stamina {
        /// Participant name as typed.
        name: String,
        /// Amount to add (negative to drain).
        delta: f64,
    },
    /// Override a participant's posture.
    Posture {
        /// Participant name as typed.
        name: String,
        /// New posture value.
        value: f64,
    },
    /// Show every participant's state.
    Status,
    /// Show recent encounter events, optionally only one participant's.
    Log {
        /// Participant name as typed, if filtering.
        name: Option<String>,
    },
    /// Show help.
    Help,
    /// End the session.
    Quit,
}

const TICK_VERBS: &[&str] = &["tick", "next", "t", "advance"];
const ACT_VERBS: &[&str] = &["act", "a"];
const WAIT_VERBS: &[&str] = &["wait", "w", "hold"];
const REACT_VERBS: &[&str] = &["react", "r"];
const STAMINA_VERBS: &[&str] = &["stamina", "st"];
const POSTURE_VERBS: &[&str] = &["posture", "set"];
const STATUS_VERBS: &[&str] = &["status", "s"];
const LOG_VERBS: &[&str] = &["log", "history"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a line of operator input.
///
/// An empty line advances the clock. Input that does not start with a known
/// verb is taken as a participant name declaring a reaction.
pub fn parse_command(input: &str) -> SessionResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Command::Tick);
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let verb = verb.as_str();
    let rest = &words[1..];

    if TICK_VERBS.contains(&verb) && rest.is_empty() {
        return Ok(Command::Tick);
    }
    if STATUS_VERBS.contains(&verb) && rest.is_empty() {
        return Ok(Command::Status);
    }
    if LOG_VERBS.contains(&verb) {
        let name = (!rest.is_empty()).then(|| rest.join(" "));
        return Ok(Command::Log { name });
    }
    if HELP_VERBS.contains(&verb) {
        return Ok(Command::Help);
    }
    if QUIT_VERBS.contains(&verb) && rest.is_empty() {
        return Ok(Command::Quit);
    }
    if ACT_VERBS.contains(&verb) {
        let name = require_name(rest, "act <name>")?;
        return Ok(Command::Act { name });
    }
    if WAIT_VERBS.contains(&verb) {
        let name = require_name(rest, "wait <name>")?;
        return Ok(Command::Wait { name });
    }
    if REACT_VERBS.contains(&verb) {
        let name = require_name(rest, "react <name>")?;
        return Ok(Command::React { name });
    }
    if STAMINA_VERBS.contains(&verb) {
        let (name, delta) = name_and_number(rest, "stamina <name> <delta>")?;
        return Ok(Command::Stamina { name, delta });
    }
    if POSTURE_VERBS.contains(&verb) {
        let (name, value) = name_and_number(rest, "posture <name> <value>")?;
        return Ok(Command::Posture { name, value });
    }

    Ok(Command::React {
        name: words.join(" "),
    })
}

fn require_name(rest: &[&str], usage: &str) -> SessionResult<String> {
    if rest.is_empty() {
        return Err(SessionError::InvalidCommand(format!("usage: {usage}")));
    }
    Ok(rest.join(" "))
}

/// Split `<name words...> <number>`: the number is always the last word.
fn name_and_number(rest: &[&str], usage: &str) -> SessionResult<(String, f64)> {
    let Some((number, name)) = rest.split_last() else {
        return Err(SessionError::InvalidCommand(format!("usage: {usage}")));
    };
    if name.is_empty() {
        return Err(SessionError::InvalidCommand(format!("usage: {usage}")));
    }
    let value = number.parse::<f64>().map_err(|_| {
        EncounterError::InvalidValue(format!("'{number}' is not a number"))
    })?;
    Ok((name.join(" "), value))
}
