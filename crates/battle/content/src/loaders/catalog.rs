//! Party, enemy and encounter catalog loader.

use std::path::Path;

use crate::encounter::EncounterTable;
use crate::loaders::{LoadResult, read_file};
use crate::templates::{EnemyCatalog, PartyCatalog};

/// Loader for the RON catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load party member templates. The default member must be one of them
    /// and nobody may start at level 0.
    pub fn load_party(path: &Path) -> LoadResult<PartyCatalog> {
        let content = read_file(path)?;
        let catalog: PartyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party catalog RON: {}", e))?;

        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load_enemies(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        let catalog: EnemyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        Ok(catalog)
    }

    /// Load an encounter table and check it against the enemy catalog.
    pub fn load_encounters(path: &Path, enemies: &EnemyCatalog) -> LoadResult<EncounterTable> {
        let content = read_file(path)?;
        let table: EncounterTable = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter table RON: {}", e))?;

        table
            .validate(enemies)
            .map_err(|e| anyhow::anyhow!("Invalid encounter table {}: {}", path.display(), e))?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::encounter::DEFAULT_MAX_ENEMIES;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const ENEMIES: &str = r#"(
        enemies: [
            (name: "Slime", base_health: 20, base_strength: 5, base_initiative: 3),
        ],
    )"#;

    #[test]
    fn party_catalog_round_trips_from_ron() {
        let file = write(
            r#"(
                default_member: "Knight",
                members: [
                    (name: "Knight", starting_level: 1, base_health: 30, base_strength: 10, base_initiative: 5),
                ],
            )"#,
        );
        let catalog = CatalogLoader::load_party(file.path()).unwrap();
        assert_eq!(catalog.default_template().unwrap().base_strength, 10);
    }

    #[test]
    fn party_catalog_needs_its_default_member() {
        let file = write(r#"(default_member: "Bard", members: [])"#);
        assert!(CatalogLoader::load_party(file.path()).is_err());
    }

    #[test]
    fn party_catalog_rejects_level_zero_members() {
        let file = write(
            r#"(
                default_member: "Knight",
                members: [
                    (name: "Knight", starting_level: 0, base_health: 30, base_strength: 10, base_initiative: 5),
                ],
            )"#,
        );
        let err = CatalogLoader::load_party(file.path()).unwrap_err();
        assert!(err.to_string().contains("level 0"));
    }

    #[test]
    fn encounter_table_with_level_zero_fails() {
        let enemies = CatalogLoader::load_enemies(write(ENEMIES).path()).unwrap();
        let file = write(r#"(entries: [(enemy: "Slime", level_min: 0, level_max: 2)])"#);

        let err = CatalogLoader::load_encounters(file.path(), &enemies).unwrap_err();
        assert!(err.to_string().contains("level 0"));
    }

    #[test]
    fn encounter_table_defaults_max_enemies() {
        let enemies = CatalogLoader::load_enemies(write(ENEMIES).path()).unwrap();
        let file = write(r#"(entries: [(enemy: "Slime", level_min: 1, level_max: 2)])"#);

        let table = CatalogLoader::load_encounters(file.path(), &enemies).unwrap();
        assert_eq!(table.max_enemies, DEFAULT_MAX_ENEMIES);
        assert_eq!(table.entries.len(), 1);
    }

    #[test]
    fn encounter_table_with_unknown_enemy_fails() {
        let enemies = CatalogLoader::load_enemies(write(ENEMIES).path()).unwrap();
        let file = write(r#"(entries: [(enemy: "Dragon", level_min: 1, level_max: 2)])"#);

        let err = CatalogLoader::load_encounters(file.path(), &enemies).unwrap_err();
        assert!(err.to_string().contains("Dragon"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CatalogLoader::load_enemies(Path::new("/nonexistent/enemies.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/enemies.ron"));
    }
}
