//! Roster decoding.
//!
//! A roster is a JSON object keyed by participant name, each value holding
//! that participant's attributes:
//!
//! ```json
//! {
//!   "Kael":  { "Footwork": 8, "Agility": 6, "Skill": 3, "Stamina": 40 },
//!   "Mirra": { "Footwork": 6, "Agility": 9, "Skill": 7, "Stamina": 85 }
//! }
//! ```
//!
//! Document order is kept, since it decides display order and tie-breaks.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};

use crate::attributes::{Attributes, MAX_STAMINA, MIN_STAMINA};
use crate::error::{EncounterError, EncounterResult};
use crate::participant::ParticipantId;

/// An ordered list of participants and their starting attributes.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<(ParticipantId, Attributes)>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a roster from JSON text.
    pub fn from_json(json: &str) -> EncounterResult<Self> {
        let raw: RawRoster =
            serde_json::from_str(json).map_err(|e| EncounterError::InvalidRoster(e.to_string()))?;
        let mut roster = Self::new();
        for (name, attributes) in raw.0 {
            roster.add(name, attributes)?;
        }
        if roster.is_empty() {
            return Err(EncounterError::EmptyRoster);
        }
        Ok(roster)
    }

    /// Append a participant. Stamina outside 0..=100 is clamped.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        mut attributes: Attributes,
    ) -> EncounterResult<()> {
        let name = name.into();
        if self.entries.iter().any(|(id, _)| id.as_str() == name) {
            return Err(EncounterError::DuplicateParticipant(name));
        }
        if !attributes.footwork.is_finite()
            || !attributes.agility.is_finite()
            || !attributes.skill.is_finite()
            || !attributes.stamina.is_finite()
        {
            return Err(EncounterError::InvalidValue(format!(
                "{name} has a non-finite attribute"
            )));
        }
        let clamped = attributes.stamina.clamp(MIN_STAMINA, MAX_STAMINA);
        if clamped != attributes.stamina {
            tracing::warn!(
                participant = %name,
                stamina = attributes.stamina,
                "stamina out of range, clamped to {clamped}"
            );
            attributes.stamina = clamped;
        }
        self.entries.push((ParticipantId::new(name), attributes));
        Ok(())
    }

    /// Builder form of [`Roster::add`].
    pub fn with(mut self, name: impl Into<String>, attributes: Attributes) -> EncounterResult<Self> {
        self.add(name, attributes)?;
        Ok(self)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &Attributes)> {
        self.entries.iter().map(|(id, attrs)| (id, attrs))
    }
}

impl IntoIterator for Roster {
    type Item = (ParticipantId, Attributes);
    type IntoIter = std::vec::IntoIter<(ParticipantId, Attributes)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// JSON object decoded as a list of entries, keeping duplicates and order so
/// [`Roster::add`] can report them.
struct RawRoster(Vec<(String, Attributes)>);

impl<'de> Deserialize<'de> for RawRoster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawRosterVisitor)
    }
}

struct RawRosterVisitor;

impl<'de> Visitor<'de> for RawRosterVisitor {
    type Value = RawRoster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping participant names to attributes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(name) = map.next_key::<String>()? {
            let attributes: Attributes = map
                .next_value()
                .map_err(|e| de::Error::custom(format!("participant \"{name}\": {e}")))?;
            entries.push((name, attributes));
        }
        Ok(RawRoster(entries))
    }
}
