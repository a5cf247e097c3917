//! Public runtime API surface.
//!
//! This module gathers the traits and types consumers of the runtime crate
//! plug in, so [`crate::runtime`] can stay focused on driving the engine.

pub mod collaborators;
pub mod errors;
pub mod providers;

pub use collaborators::{EventSink, PartyStore, SceneTransition};
pub use errors::{Result, RuntimeError};
pub use providers::{FirstEnemyIntentSource, IntentSource, ScriptedIntentSource};
