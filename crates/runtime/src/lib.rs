//! Async orchestration around the battle engine.
//!
//! The engine in `battle-core` never blocks; it hands out steps and leaves
//! the waiting to its driver. This crate is that driver. [`EncounterRunner`]
//! pulls steps, asks an [`IntentSource`] when selection blocks, forwards
//! effects to event sinks and party persistence, and sleeps on a [`Clock`]
//! between beats.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the runner and its builder
//! - [`api`] exposes the collaborator traits clients implement
//! - [`clock`] abstracts waiting so tests never sleep
//! - [`events`] provides a topic-based event bus for presentation layers
pub mod api;
pub mod clock;
pub mod events;
pub mod runtime;

pub use api::{
    EventSink, FirstEnemyIntentSource, IntentSource, PartyStore, Result, RuntimeError,
    SceneTransition, ScriptedIntentSource,
};
pub use clock::{Clock, InstantClock, TokioClock};
pub use events::{Event, EventBus, Topic};
pub use runtime::{EncounterRunner, EncounterRunnerBuilder, RuntimeConfig};
