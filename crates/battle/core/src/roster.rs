//! Live roster of an encounter, partitioned by side.

use crate::combatant::{Combatant, CombatantId, CombatantSpec, Side};
use crate::error::ConfigurationError;

/// Raw roster produced by an external roster builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterSpec {
    pub players: Vec<CombatantSpec>,
    pub enemies: Vec<CombatantSpec>,
}

impl RosterSpec {
    pub fn new(players: Vec<CombatantSpec>, enemies: Vec<CombatantSpec>) -> Self {
        Self { players, enemies }
    }
}

/// Supplies the initial combatants for an encounter.
///
/// Stat formulas (level scaling, carried-over damage) live behind this trait;
/// the engine only sees finished [`CombatantSpec`]s.
pub trait RosterBuilder {
    fn build_initial_roster(&mut self) -> RosterSpec;
}

/// A prepared spec builds itself exactly once; a second call yields an empty
/// roster.
impl RosterBuilder for RosterSpec {
    fn build_initial_roster(&mut self) -> RosterSpec {
        std::mem::take(self)
    }
}

/// Ordered sequence of living combatants plus the per-side id lists.
///
/// Both side lists are subsets of `combatants` and keep build order. Removal
/// updates all three in one call, so no view can observe a combatant that is
/// gone from another.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: Vec<Combatant>,
    players: Vec<CombatantId>,
    enemies: Vec<CombatantId>,
}

impl Roster {
    /// Assigns ids (players first, then enemies, starting at 0) and slots.
    ///
    /// Specs that arrive already dead are left out of the roster.
    pub fn from_spec(spec: RosterSpec) -> Result<Self, ConfigurationError> {
        let mut roster = Self::default();
        let mut next_id = 0u32;

        for (side, specs) in [(Side::Player, spec.players), (Side::Enemy, spec.enemies)] {
            let mut slot = 0;
            for spec in specs {
                validate_spec(&spec)?;
                if spec.current_health <= 0 {
                    continue;
                }

                let id = CombatantId(next_id);
                next_id += 1;

                roster
                    .combatants
                    .push(Combatant::from_spec(id, side, slot, spec));
                roster.side_mut(side).push(id);
                slot += 1;
            }

            if roster.side(side).is_empty() {
                return Err(ConfigurationError::EmptySide { side });
            }
        }

        Ok(roster)
    }

    /// Every living combatant in build order.
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    /// True if `id` is still in the roster with positive health.
    pub fn is_alive(&self, id: CombatantId) -> bool {
        self.get(id).is_some_and(Combatant::is_alive)
    }

    /// Ids of one side's sub-roster, in slot order.
    pub fn side(&self, side: Side) -> &[CombatantId] {
        match side {
            Side::Player => &self.players,
            Side::Enemy => &self.enemies,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<CombatantId> {
        match side {
            Side::Player => &mut self.players,
            Side::Enemy => &mut self.enemies,
        }
    }

    /// Living combatants of one side, in slot order.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &Combatant> + '_ {
        self.side(side)
            .iter()
            .filter_map(|&id| self.get(id))
            .filter(|c| c.is_alive())
    }

    pub fn is_side_empty(&self, side: Side) -> bool {
        self.side(side).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    /// Removes a combatant from the full roster and its side list together.
    pub fn remove(&mut self, id: CombatantId) -> Option<Combatant> {
        let index = self.combatants.iter().position(|c| c.id == id)?;
        let removed = self.combatants.remove(index);
        self.side_mut(removed.side).retain(|&other| other != id);
        Some(removed)
    }

    /// Empties every view at once (successful retreat).
    pub fn clear(&mut self) {
        self.combatants.clear();
        self.players.clear();
        self.enemies.clear();
    }

    pub fn clear_intents(&mut self) {
        for combatant in &mut self.combatants {
            combatant.clear_intent();
        }
    }
}

fn validate_spec(spec: &CombatantSpec) -> Result<(), ConfigurationError> {
    if spec.max_health <= 0 {
        return Err(ConfigurationError::NonPositiveMaxHealth {
            name: spec.name.clone(),
            max_health: spec.max_health,
        });
    }
    if spec.strength < 0 {
        return Err(ConfigurationError::NegativeStrength {
            name: spec.name.clone(),
            strength: spec.strength,
        });
    }
    if spec.level == 0 {
        return Err(ConfigurationError::ZeroLevel {
            name: spec.name.clone(),
        });
    }
    Ok(())
}
