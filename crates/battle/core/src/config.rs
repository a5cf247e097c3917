use std::time::Duration;

use crate::error::ConfigurationError;

/// Tunable battle parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Lower bound of the random damage multiplier applied to strength.
    pub min_damage_multiplier: f64,
    /// Upper bound (inclusive) of the random damage multiplier.
    pub max_damage_multiplier: f64,
    /// A retreat roll in `[0, 100)` succeeds when it is at least this value.
    pub retreat_threshold: u32,
    /// Pause after each action beat while animations play.
    pub turn_delay_ms: u64,
    /// Pause after the outcome message before the scene transition.
    pub outcome_delay_ms: u64,
}

impl BattleConfig {
    pub const DEFAULT_MIN_DAMAGE_MULTIPLIER: f64 = 1.0;
    pub const DEFAULT_MAX_DAMAGE_MULTIPLIER: f64 = 1.75;
    pub const DEFAULT_RETREAT_THRESHOLD: u32 = 30;
    pub const DEFAULT_TURN_DELAY_MS: u64 = 1200;
    pub const DEFAULT_OUTCOME_DELAY_MS: u64 = 1200;

    pub fn new() -> Self {
        Self {
            min_damage_multiplier: Self::DEFAULT_MIN_DAMAGE_MULTIPLIER,
            max_damage_multiplier: Self::DEFAULT_MAX_DAMAGE_MULTIPLIER,
            retreat_threshold: Self::DEFAULT_RETREAT_THRESHOLD,
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
            outcome_delay_ms: Self::DEFAULT_OUTCOME_DELAY_MS,
        }
    }

    /// Same rules with every delay set to zero.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.turn_delay_ms = 0;
        self.outcome_delay_ms = 0;
        self
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    pub fn outcome_delay(&self) -> Duration {
        Duration::from_millis(self.outcome_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let (min, max) = (self.min_damage_multiplier, self.max_damage_multiplier);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ConfigurationError::DamageRange { min, max });
        }
        if self.retreat_threshold > 100 {
            return Err(ConfigurationError::RetreatThreshold {
                threshold: self.retreat_threshold,
            });
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
