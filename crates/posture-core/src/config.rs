//! Configuration for an encounter.

use crate::error::{EncounterError, EncounterResult};

/// Thresholds and limits for an encounter.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    /// Posture at which a participant is offered a turn (inclusive).
    pub act_threshold: f64,
    /// Posture a participant must exceed to declare a reaction (exclusive).
    pub react_threshold: f64,
    /// Posture ceiling.
    pub max_readiness: f64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            act_threshold: 75.0,
            react_threshold: 75.0,
            max_readiness: 100.0,
            max_events: 0,
        }
    }
}

impl EncounterConfig {
    /// Set the posture at which turns are offered.
    pub fn with_act_threshold(mut self, threshold: f64) -> Self {
        self.act_threshold = threshold;
        self
    }

    /// Set the posture a participant must exceed to react.
    pub fn with_react_threshold(mut self, threshold: f64) -> Self {
        self.react_threshold = threshold;
        self
    }

    /// Set the posture ceiling.
    pub fn with_max_readiness(mut self, max: f64) -> Self {
        self.max_readiness = max;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Reject thresholds the engine cannot compare against: both thresholds
    /// must be finite and the ceiling finite and non-negative.
    pub fn validate(&self) -> EncounterResult<()> {
        for (name, value) in [
            ("act threshold", self.act_threshold),
            ("react threshold", self.react_threshold),
        ] {
            if !value.is_finite() {
                return Err(EncounterError::InvalidValue(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        if !self.max_readiness.is_finite() || self.max_readiness < 0.0 {
            return Err(EncounterError::InvalidValue(format!(
                "posture ceiling must be a non-negative number, got {}",
                self.max_readiness
            )));
        }
        Ok(())
    }
}
