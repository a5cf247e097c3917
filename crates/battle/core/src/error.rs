//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`ActionError`, `TargetError`) live beside the
//! components that raise them; this module holds the pieces they share and
//! the [`ConfigurationError`] raised before an encounter can begin.

use crate::combatant::Side;

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: rejected input; the caller may try again with different input
/// - **Internal**: a state-machine bug, e.g. a dead combatant scheduled to act
/// - **Fatal**: the encounter cannot be set up or continued at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the same operation may succeed with corrected input.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Returns true if this error indicates a bug in the engine.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// The encounter cannot start with the supplied roster or settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("roster builder produced no {side} combatants")]
    EmptySide { side: Side },

    #[error("combatant '{name}' has non-positive max health {max_health}")]
    NonPositiveMaxHealth { name: String, max_health: i32 },

    #[error("combatant '{name}' has negative strength {strength}")]
    NegativeStrength { name: String, strength: i32 },

    #[error("combatant '{name}' has level 0")]
    ZeroLevel { name: String },

    #[error("damage multiplier range [{min}, {max}] is invalid")]
    DamageRange { min: f64, max: f64 },

    #[error("retreat threshold {threshold} exceeds 100")]
    RetreatThreshold { threshold: u32 },
}

impl CombatError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySide { .. } => "CONFIG_EMPTY_SIDE",
            Self::NonPositiveMaxHealth { .. } => "CONFIG_MAX_HEALTH",
            Self::NegativeStrength { .. } => "CONFIG_STRENGTH",
            Self::ZeroLevel { .. } => "CONFIG_LEVEL",
            Self::DamageRange { .. } => "CONFIG_DAMAGE_RANGE",
            Self::RetreatThreshold { .. } => "CONFIG_RETREAT_THRESHOLD",
        }
    }
}
