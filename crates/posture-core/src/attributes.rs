//! Participant attributes and the posture increment formula.
//!
//! The increment is the amount of posture a participant gains every tick.
//! It grows with Footwork, Agility and Skill above the baseline of 5 and is
//! reduced by 10% while Stamina is below 50.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Posture gained per tick before any bonus.
pub const BASE_INCREMENT: f64 = 10.0;
/// Attribute value at which bonuses start to apply.
pub const ATTRIBUTE_BASELINE: f64 = 5.0;
/// Bonus per Footwork point above the baseline.
pub const FOOTWORK_WEIGHT: f64 = 1.0;
/// Bonus per Agility point above the baseline.
pub const AGILITY_WEIGHT: f64 = 0.5;
/// Bonus (or malus) per Skill point relative to the baseline.
pub const SKILL_WEIGHT: f64 = 0.25;
/// Stamina below this value incurs the fatigue penalty.
pub const FATIGUE_STAMINA: f64 = 50.0;
/// Fraction of the increment lost while fatigued.
pub const FATIGUE_PENALTY: f64 = 0.10;
/// Lowest stamina a participant can have.
pub const MIN_STAMINA: f64 = 0.0;
/// Highest stamina a participant can have.
pub const MAX_STAMINA: f64 = 100.0;

/// A participant's combat attributes.
///
/// The four named fields feed the increment formula. Any other roster keys
/// are kept in `extra` so they can be displayed, but the engine ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Movement speed and positioning.
    #[serde(rename = "Footwork")]
    pub footwork: f64,
    /// Reflexes.
    #[serde(rename = "Agility")]
    pub agility: f64,
    /// Combat training. Below the baseline it slows the participant down.
    #[serde(rename = "Skill")]
    pub skill: f64,
    /// Remaining endurance, 0 to 100.
    #[serde(rename = "Stamina")]
    pub stamina: f64,
    /// Roster keys not used by the engine.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Attributes {
    /// Create an attribute set with no extra keys.
    pub fn new(footwork: f64, agility: f64, skill: f64, stamina: f64) -> Self {
        Self {
            footwork,
            agility,
            skill,
            stamina,
            extra: BTreeMap::new(),
        }
    }

    /// Returns true if the fatigue penalty applies.
    pub fn is_fatigued(&self) -> bool {
        self.stamina < FATIGUE_STAMINA
    }
}

/// Posture gained per tick for the given attributes, ignoring fatigue.
pub fn unpenalized_increment(attributes: &Attributes) -> f64 {
    let footwork_bonus = ((attributes.footwork - ATTRIBUTE_BASELINE) * FOOTWORK_WEIGHT).max(0.0);
    let agility_bonus = ((attributes.agility - ATTRIBUTE_BASELINE) * AGILITY_WEIGHT).max(0.0);
    let skill_bonus = (attributes.skill - ATTRIBUTE_BASELINE) * SKILL_WEIGHT;
    BASE_INCREMENT + footwork_bonus + agility_bonus + skill_bonus
}

/// Posture gained per tick for the given attributes.
///
/// Can be negative when Skill is far below the baseline.
pub fn compute_increment(attributes: &Attributes) -> f64 {
    let penalty = if attributes.is_fatigued() {
        FATIGUE_PENALTY
    } else {
        0.0
    };
    unpenalized_increment(attributes) * (1.0 - penalty)
}
