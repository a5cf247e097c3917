//! Random encounter tables.

use battle_core::BattleRng;

use crate::enemy::Enemy;
use crate::error::ContentError;
use crate::templates::EnemyCatalog;

pub const DEFAULT_MAX_ENEMIES: usize = 3;

/// One enemy kind that can appear, with its level range (inclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterEntry {
    pub enemy: String,
    pub level_min: u32,
    pub level_max: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTable {
    pub entries: Vec<EncounterEntry>,
    #[cfg_attr(feature = "serde", serde(default = "default_max_enemies"))]
    pub max_enemies: usize,
}

#[cfg(feature = "serde")]
fn default_max_enemies() -> usize {
    DEFAULT_MAX_ENEMIES
}

impl EncounterTable {
    pub fn new(entries: Vec<EncounterEntry>) -> Self {
        Self {
            entries,
            max_enemies: DEFAULT_MAX_ENEMIES,
        }
    }

    /// Checks the table against the catalog before any roll is made.
    pub fn validate(&self, catalog: &EnemyCatalog) -> Result<(), ContentError> {
        if self.entries.is_empty() {
            return Err(ContentError::EmptyEncounterTable);
        }
        if self.max_enemies == 0 {
            return Err(ContentError::InvalidMaxEnemies(self.max_enemies));
        }
        for entry in &self.entries {
            catalog.find(&entry.enemy)?;
            if entry.level_min == 0 {
                return Err(ContentError::ZeroLevel(entry.enemy.clone()));
            }
            if entry.level_min > entry.level_max {
                return Err(ContentError::InvalidLevelRange {
                    enemy: entry.enemy.clone(),
                    min: entry.level_min,
                    max: entry.level_max,
                });
            }
        }
        Ok(())
    }
}

/// Rolls an enemy group: between one and `max_enemies` enemies, each a
/// uniformly chosen entry at a uniformly chosen level.
pub fn generate_enemies(
    table: &EncounterTable,
    catalog: &EnemyCatalog,
    rng: &mut impl BattleRng,
) -> Result<Vec<Enemy>, ContentError> {
    table.validate(catalog)?;

    let max = u32::try_from(table.max_enemies).unwrap_or(u32::MAX);
    let count = rng.range_inclusive(1, max);

    (0..count)
        .map(|_| {
            let entry = &table.entries[rng.index(table.entries.len())];
            let template = catalog.find(&entry.enemy)?;
            let level = rng.range_inclusive(entry.level_min, entry.level_max);
            Ok(Enemy::from_template(template, level))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use battle_core::{PcgRng, ScriptedRng};

    use super::*;
    use crate::templates::EnemyTemplate;

    fn catalog() -> EnemyCatalog {
        EnemyCatalog {
            enemies: vec![
                EnemyTemplate {
                    name: "Slime".into(),
                    base_health: 20,
                    base_strength: 5,
                    base_initiative: 3,
                },
                EnemyTemplate {
                    name: "Bat".into(),
                    base_health: 10,
                    base_strength: 4,
                    base_initiative: 8,
                },
            ],
        }
    }

    fn table() -> EncounterTable {
        EncounterTable::new(vec![
            EncounterEntry {
                enemy: "Slime".into(),
                level_min: 1,
                level_max: 3,
            },
            EncounterEntry {
                enemy: "Bat".into(),
                level_min: 2,
                level_max: 2,
            },
        ])
    }

    #[test]
    fn scripted_rolls_pick_count_entry_and_level() {
        // count 1 + 1 % 3 = 2, entry 1 (Bat, fixed level, no draw),
        // entry 0 (Slime), level 1 + 2 % 3 = 3.
        let mut rng = ScriptedRng::new(vec![1, 1, 0, 2]);
        let enemies = generate_enemies(&table(), &catalog(), &mut rng).unwrap();

        let picked: Vec<(&str, u32)> = enemies.iter().map(|e| (e.name.as_str(), e.level)).collect();
        assert_eq!(picked, vec![("Bat", 2), ("Slime", 3)]);
    }

    #[test]
    fn counts_and_levels_stay_in_range() {
        let mut rng = PcgRng::seeded(7);
        for _ in 0..500 {
            let enemies = generate_enemies(&table(), &catalog(), &mut rng).unwrap();
            assert!((1..=3).contains(&enemies.len()));
            for enemy in enemies {
                match enemy.name.as_str() {
                    "Slime" => assert!((1..=3).contains(&enemy.level)),
                    "Bat" => assert_eq!(enemy.level, 2),
                    other => panic!("unexpected enemy {other}"),
                }
            }
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut rng = ScriptedRng::repeat(0);
        let result = generate_enemies(&EncounterTable::new(vec![]), &catalog(), &mut rng);
        assert_eq!(result, Err(ContentError::EmptyEncounterTable));
    }

    #[test]
    fn unknown_enemy_is_rejected_before_rolling() {
        let table = EncounterTable::new(vec![EncounterEntry {
            enemy: "Dragon".into(),
            level_min: 1,
            level_max: 1,
        }]);
        let result = table.validate(&catalog());
        assert_eq!(result, Err(ContentError::UnknownEnemy("Dragon".into())));
    }

    #[test]
    fn inverted_level_range_is_rejected() {
        let table = EncounterTable::new(vec![EncounterEntry {
            enemy: "Slime".into(),
            level_min: 4,
            level_max: 2,
        }]);
        assert!(matches!(
            table.validate(&catalog()),
            Err(ContentError::InvalidLevelRange { .. })
        ));
    }

    #[test]
    fn level_zero_entry_is_rejected() {
        let table = EncounterTable::new(vec![EncounterEntry {
            enemy: "Slime".into(),
            level_min: 0,
            level_max: 2,
        }]);
        assert_eq!(
            table.validate(&catalog()),
            Err(ContentError::ZeroLevel("Slime".into()))
        );

        let mut rng = ScriptedRng::repeat(0);
        assert!(generate_enemies(&table, &catalog(), &mut rng).is_err());
    }
}
