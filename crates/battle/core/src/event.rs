//! Effects the engine hands to its collaborators.

use crate::combatant::CombatantId;

/// Presentation event for the visual sink.
///
/// Fire-and-forget: the engine never reads anything back from the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    AttackPlayed(CombatantId),
    HitPlayed(CombatantId),
    HealthChanged { id: CombatantId, health: i32 },
    DeathPlayed(CombatantId),
    Message(String),
}

impl BattleEvent {
    pub fn message(text: impl Into<String>) -> Self {
        BattleEvent::Message(text.into())
    }
}

/// One immediate effect inside a [`crate::Step::Play`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Forward to the visual/event sink.
    Event(BattleEvent),

    /// Push a player combatant's new health to party persistence.
    SaveHealth { slot: usize, health: i32 },
}

impl From<BattleEvent> for Effect {
    fn from(event: BattleEvent) -> Self {
        Effect::Event(event)
    }
}
