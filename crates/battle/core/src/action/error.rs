use std::fmt;

use crate::combatant::CombatantId;
use crate::error::{CombatError, ErrorSeverity};

/// Why an action could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidActionReason {
    /// The actor is not in the roster (already removed).
    ActorMissing,
    /// The actor is in the roster with non-positive health.
    ActorDead,
    /// Only player combatants can retreat.
    NotAPlayer,
    /// The opposing sub-roster is empty.
    NoOpposingCombatants,
    /// The resolved target is not in the roster.
    TargetMissing(CombatantId),
    /// The resolved target fights on the actor's side.
    FriendlyTarget(CombatantId),
}

impl fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActorMissing => f.write_str("actor is not in the roster"),
            Self::ActorDead => f.write_str("actor is dead"),
            Self::NotAPlayer => f.write_str("actor is not a player combatant"),
            Self::NoOpposingCombatants => f.write_str("opposing side is empty"),
            Self::TargetMissing(id) => write!(f, "target {id} is not in the roster"),
            Self::FriendlyTarget(id) => write!(f, "target {id} is on the actor's side"),
        }
    }
}

/// Errors raised by the action resolver.
///
/// Every variant is a contract violation: the state machine must never
/// schedule an action that can fail this way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("invalid action by {actor}: {reason}")]
    InvalidAction {
        actor: CombatantId,
        reason: InvalidActionReason,
    },
}

impl ActionError {
    pub(crate) fn invalid(actor: CombatantId, reason: InvalidActionReason) -> Self {
        Self::InvalidAction { actor, reason }
    }
}

impl CombatError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAction { .. } => "INVALID_ACTION",
        }
    }
}
