//! Topic-based event bus implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use battle_core::{BattleEvent, Outcome};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::api::{EventSink, Result, SceneTransition};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Attacks, hits, health changes, deaths and messages
    Battle,
    /// Encounter outcomes
    Outcome,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleEvent),
    Outcome(Outcome),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Outcome(_) => Topic::Outcome,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    battle: broadcast::Sender<Event>,
    outcome: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            battle: broadcast::channel(capacity).0,
            outcome: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Battle => &self.battle,
            Topic::Outcome => &self.outcome,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventBus {
    fn emit(&self, event: &BattleEvent) {
        self.publish(Event::Battle(event.clone()));
    }
}

#[async_trait]
impl SceneTransition for EventBus {
    async fn on_outcome(&self, outcome: Outcome) -> Result<()> {
        self.publish(Event::Outcome(outcome));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use battle_core::CombatantId;

    use super::*;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut topics = bus.subscribe_multiple(&[Topic::Battle, Topic::Outcome]);

        bus.emit(&BattleEvent::AttackPlayed(CombatantId(0)));
        bus.on_outcome(Outcome::Won).await.unwrap();

        let battle = topics.get_mut(&Topic::Battle).unwrap();
        assert_eq!(
            battle.recv().await.unwrap(),
            Event::Battle(BattleEvent::AttackPlayed(CombatantId(0)))
        );
        assert!(battle.try_recv().is_err());

        let outcome = topics.get_mut(&Topic::Outcome).unwrap();
        assert_eq!(outcome.recv().await.unwrap(), Event::Outcome(Outcome::Won));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::with_capacity(1).publish(Event::Outcome(Outcome::Lost));
    }
}
