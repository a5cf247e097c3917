//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::encounter::EncounterTable;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};
use crate::templates::{EnemyCatalog, PartyCatalog};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── party.ron
/// ├── enemies.ron
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Load party member templates from `party.ron`.
    pub fn load_party(&self) -> LoadResult<PartyCatalog> {
        CatalogLoader::load_party(&self.data_dir.join("party.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyCatalog> {
        CatalogLoader::load_enemies(&self.data_dir.join("enemies.ron"))
    }

    /// Load the encounter table from `encounters.ron`.
    pub fn load_encounters(&self, enemies: &EnemyCatalog) -> LoadResult<EncounterTable> {
        CatalogLoader::load_encounters(&self.data_dir.join("encounters.ron"), enemies)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
