//! Data-driven party, enemy and encounter content.
//!
//! This crate turns static content into the roster the battle engine fights
//! with, and keeps the party alive between encounters:
//! - Party member and enemy templates (data-driven via RON)
//! - Encounter tables that roll random enemy groups
//! - The roster builder handed to [`battle_core::BattleEngine::start`]
//! - Battle configuration (data-driven via TOML)
//!
//! Nothing here mutates an encounter in flight; the engine reports health
//! changes back through [`PartySession`].

pub mod encounter;
pub mod enemy;
pub mod error;
pub mod party;
pub mod roster;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{DEFAULT_MAX_ENEMIES, EncounterEntry, EncounterTable, generate_enemies};
pub use enemy::Enemy;
pub use error::ContentError;
pub use party::{Party, PartyMember};
pub use roster::{PartyRosterBuilder, PartySession};
pub use templates::{EnemyCatalog, EnemyTemplate, PartyCatalog, PartyMemberTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory};
