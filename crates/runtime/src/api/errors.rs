//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine and party persistence failures so clients can bubble them up
//! with consistent context.
use battle_content::ContentError;
use battle_core::{BattleError, CombatantId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("party persistence failed")]
    Party(#[from] ContentError),

    #[error("runner requires an intent source before building")]
    MissingIntentSource,

    #[error("intent source has nothing left for {actor}")]
    IntentSourceExhausted { actor: CombatantId },

    #[error("intent for {actor} rejected {attempts} times in a row")]
    IntentRetriesExhausted { actor: CombatantId, attempts: u32 },

    #[error("intent selection for {actor} was aborted")]
    IntentAborted { actor: CombatantId },

    #[error("engine asked for an intent from unknown combatant {0}")]
    UnknownActor(CombatantId),

    #[error("intent source I/O failed")]
    Io(#[from] std::io::Error),

    #[error("encounter ended without an outcome")]
    MissingOutcome,
}
