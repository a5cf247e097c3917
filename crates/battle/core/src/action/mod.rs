//! Action resolver: executes one combatant's attack or retreat.
//!
//! Each resolver mutates the roster immediately and returns the visible
//! result as a list of [`Beat`]s. A beat is a batch of effects that belong
//! together on screen, followed by the pause the presentation needs before
//! the next beat may start.

mod attack;
mod error;
mod retreat;

pub use attack::{resolve_attack, roll_damage};
pub use error::{ActionError, InvalidActionReason};
pub use retreat::{RETREAT_FAILURE_MESSAGE, RETREAT_SUCCESS_MESSAGE, resolve_retreat};

use std::time::Duration;

use crate::combatant::CombatantId;
use crate::event::{BattleEvent, Effect};

/// Effects shown together, then a required pause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Beat {
    pub effects: Vec<Effect>,
    pub delay: Duration,
}

impl Beat {
    pub fn new(delay: Duration) -> Self {
        Self {
            effects: Vec::new(),
            delay,
        }
    }

    pub(crate) fn push(&mut self, effect: impl Into<Effect>) {
        self.effects.push(effect.into());
    }

    pub(crate) fn message(&mut self, text: impl Into<String>) {
        self.push(BattleEvent::message(text));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub damage: i32,
    /// Target health after the hit; may be negative.
    pub remaining_health: i32,
    /// The target died and was removed from the roster.
    pub defeated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetreatReport {
    pub actor: CombatantId,
    /// Percentile roll in `[0, 100)`.
    pub roll: u32,
    pub escaped: bool,
}

/// What a resolved action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Attack(AttackReport),
    Retreat(RetreatReport),
}

impl ActionOutcome {
    /// True if this was a successful retreat.
    pub fn escaped(&self) -> bool {
        matches!(self, ActionOutcome::Retreat(report) if report.escaped)
    }
}

/// Outcome plus the beats that present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAction {
    pub outcome: ActionOutcome,
    pub beats: Vec<Beat>,
}
