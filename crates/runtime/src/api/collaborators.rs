//! Outbound collaborators the runner reports to.

use async_trait::async_trait;
use battle_content::PartySession;
use battle_core::{BattleEvent, Outcome};

use super::errors::Result;

/// Receives presentation events. Fire-and-forget.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &BattleEvent);
}

/// Persists player health between encounters, keyed by roster slot.
pub trait PartyStore {
    fn save_health(&mut self, slot: usize, health: i32) -> Result<()>;
}

/// Notified exactly once when an encounter reaches its outcome.
#[async_trait]
pub trait SceneTransition: Send + Sync {
    async fn on_outcome(&self, outcome: Outcome) -> Result<()>;
}

impl PartyStore for PartySession {
    fn save_health(&mut self, slot: usize, health: i32) -> Result<()> {
        PartySession::save_health(self, slot, health)?;
        Ok(())
    }
}
