//! Error types surfaced by the battle engine.

use std::fmt;

use crate::action::ActionError;
use crate::combatant::CombatantId;
use crate::engine::BattlePhase;
use crate::error::{CombatError, ConfigurationError, ErrorSeverity};
use crate::targeting::TargetError;

/// Why a submitted intent was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentRejection {
    /// Another combatant is choosing right now.
    NotYourTurn { expected: CombatantId },
    /// The target hint is not a living combatant.
    TargetUnavailable(CombatantId),
    /// The target hint names a combatant on the actor's side.
    TargetNotHostile(CombatantId),
}

impl fmt::Display for IntentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotYourTurn { expected } => write!(f, "waiting on {expected}"),
            Self::TargetUnavailable(id) => write!(f, "target {id} is not alive"),
            Self::TargetNotHostile(id) => write!(f, "target {id} is not an enemy"),
        }
    }
}

/// Errors surfaced while driving an encounter.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BattleError {
    #[error("encounter configuration rejected: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("intent for {actor} rejected: {reason}")]
    IntentRejected {
        actor: CombatantId,
        reason: IntentRejection,
    },

    #[error("operation not allowed in phase {phase}")]
    WrongPhase { phase: BattlePhase },
}

impl CombatError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration(err) => err.severity(),
            Self::Action(err) => err.severity(),
            Self::Target(err) => err.severity(),
            Self::IntentRejected { .. } => ErrorSeverity::Validation,
            Self::WrongPhase { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(err) => err.error_code(),
            Self::Action(err) => err.error_code(),
            Self::Target(err) => err.error_code(),
            Self::IntentRejected { .. } => "INTENT_REJECTED",
            Self::WrongPhase { .. } => "WRONG_PHASE",
        }
    }
}
