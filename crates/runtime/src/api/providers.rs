//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`IntentSource`] implementations so encounters can
//! run with human input, scripted fixtures, or simple policies.
use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::{Combatant, Intent, Roster, Side};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// Trait for choosing a player combatant's intent for the current round.
///
/// Different implementations can handle:
/// - Player input (from a terminal or UI)
/// - Scripted/replayed intents
/// - Testing fixtures
#[async_trait]
pub trait IntentSource: Send + Sync {
    /// Choose an intent for `actor`, given a read-only view of the roster.
    ///
    /// A rejected intent is asked for again, so sources driven by humans can
    /// simply return whatever was typed.
    async fn choose_intent(&self, actor: &Combatant, roster: &Roster) -> Result<Intent>;
}

/// Replays a fixed queue of intents in order.
pub struct ScriptedIntentSource {
    queue: Mutex<VecDeque<Intent>>,
}

impl ScriptedIntentSource {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            queue: Mutex::new(intents.into_iter().collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl IntentSource for ScriptedIntentSource {
    async fn choose_intent(&self, actor: &Combatant, _roster: &Roster) -> Result<Intent> {
        self.queue
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::IntentSourceExhausted { actor: actor.id })
    }
}

/// Always attacks the first living enemy.
pub struct FirstEnemyIntentSource;

#[async_trait]
impl IntentSource for FirstEnemyIntentSource {
    async fn choose_intent(&self, _actor: &Combatant, roster: &Roster) -> Result<Intent> {
        Ok(roster
            .living(Side::Enemy)
            .next()
            .map_or(Intent::attack_any(), |enemy| Intent::attack(enemy.id)))
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{CombatantId, CombatantSpec, RosterSpec};

    use super::*;

    fn roster() -> Roster {
        Roster::from_spec(RosterSpec::new(
            vec![CombatantSpec::new("Ayla", 10, 3, 2)],
            vec![
                CombatantSpec::new("Slime", 10, 3, 1),
                CombatantSpec::new("Bat", 10, 3, 1),
            ],
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn scripted_source_drains_in_order() {
        let roster = roster();
        let actor = roster.get(CombatantId(0)).unwrap();
        let source = ScriptedIntentSource::new([Intent::Retreat, Intent::attack_any()]);

        assert_eq!(source.choose_intent(actor, &roster).await.unwrap(), Intent::Retreat);
        assert_eq!(source.remaining().await, 1);
        assert_eq!(
            source.choose_intent(actor, &roster).await.unwrap(),
            Intent::attack_any()
        );
        assert!(matches!(
            source.choose_intent(actor, &roster).await,
            Err(RuntimeError::IntentSourceExhausted { actor: CombatantId(0) })
        ));
    }

    #[tokio::test]
    async fn first_enemy_source_targets_lowest_living_enemy() {
        let mut roster = roster();
        let source = FirstEnemyIntentSource;
        let actor = roster.get(CombatantId(0)).unwrap().clone();

        assert_eq!(
            source.choose_intent(&actor, &roster).await.unwrap(),
            Intent::attack(CombatantId(1))
        );

        roster.remove(CombatantId(1));
        assert_eq!(
            source.choose_intent(&actor, &roster).await.unwrap(),
            Intent::attack(CombatantId(2))
        );
    }
}
