//! Deterministic turn-based battle rules.
//!
//! `battle-core` owns one encounter between a player party and a group of
//! enemies: roster bookkeeping, initiative ordering, target repair, attack and
//! retreat resolution, and the phase state machine that ties them together.
//! All state mutation flows through [`engine::BattleEngine`], which exposes
//! the encounter as an externally driven sequence of [`engine::Step`]s so the
//! caller decides how (and whether) to wait between them.
pub mod action;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod rng;
pub mod roster;
pub mod targeting;
pub mod turn_order;

pub use action::{
    ActionError, ActionOutcome, AttackReport, Beat, InvalidActionReason, ResolvedAction,
    RetreatReport,
};
pub use combatant::{Combatant, CombatantId, CombatantSpec, Intent, Side};
pub use config::BattleConfig;
pub use engine::{BattleEngine, BattleError, BattlePhase, IntentRejection, Outcome, Step};
pub use error::{CombatError, ConfigurationError, ErrorSeverity};
pub use event::{BattleEvent, Effect};
pub use rng::{BattleRng, PcgRng, ScriptedRng};
pub use roster::{Roster, RosterBuilder, RosterSpec};
pub use targeting::{TargetError, resolve_target};
pub use turn_order::resolve_turn_order;
