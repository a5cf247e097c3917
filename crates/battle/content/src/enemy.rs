use battle_core::CombatantSpec;

use crate::templates::EnemyTemplate;

/// Each level adds half of the base value to every stat.
const LEVEL_MODIFIER: f64 = 0.5;

/// An enemy instantiated from a template at a given level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub max_health: i32,
    pub strength: i32,
    pub initiative: i32,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate, level: u32) -> Self {
        let modifier = LEVEL_MODIFIER * f64::from(level);
        Self {
            name: template.name.clone(),
            level,
            max_health: scale(template.base_health, modifier),
            strength: scale(template.base_strength, modifier),
            initiative: scale(template.base_initiative, modifier),
        }
    }

    pub fn combatant_spec(&self) -> CombatantSpec {
        CombatantSpec::new(
            self.name.clone(),
            self.max_health,
            self.strength,
            self.initiative,
        )
        .with_level(self.level)
    }
}

fn scale(base: i32, modifier: f64) -> i32 {
    let base = f64::from(base);
    (base + base * modifier).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> EnemyTemplate {
        EnemyTemplate {
            name: "Slime".into(),
            base_health: 20,
            base_strength: 5,
            base_initiative: 3,
        }
    }

    #[test]
    fn level_scales_every_stat() {
        let enemy = Enemy::from_template(&slime(), 1);
        assert_eq!(enemy.max_health, 30);
        // 5 * 1.5 = 7.5 rounds away from zero
        assert_eq!(enemy.strength, 8);
        assert_eq!(enemy.initiative, 5);
    }

    #[test]
    fn higher_levels_keep_growing() {
        let enemy = Enemy::from_template(&slime(), 4);
        assert_eq!(enemy.max_health, 60);
        assert_eq!(enemy.strength, 15);
        assert_eq!(enemy.initiative, 9);
    }

    #[test]
    fn spawns_at_full_health() {
        let spec = Enemy::from_template(&slime(), 2).combatant_spec();
        assert_eq!(spec.current_health, spec.max_health);
        assert_eq!(spec.level, 2);
    }
}
