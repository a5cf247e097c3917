//! Combatant identity, vitals and per-round intent.

use std::fmt;

/// Stable identifier for one combatant within a single encounter.
///
/// Ids are handed out by [`crate::Roster`] in build order and are never
/// reused, so a stale id can only ever fail a liveness lookup; it can never
/// alias a different combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the encounter a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side this one attacks.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Action chosen for the current round.
///
/// A combatant with no intent simply passes when its turn comes up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Attack, optionally aimed at a specific opponent.
    ///
    /// The target is only a hint: it was alive when chosen but is
    /// re-validated when the attack resolves.
    Attack { target: Option<CombatantId> },

    /// Try to flee the encounter with the whole party.
    Retreat,
}

impl Intent {
    pub const fn attack(target: CombatantId) -> Self {
        Intent::Attack {
            target: Some(target),
        }
    }

    pub const fn attack_any() -> Self {
        Intent::Attack { target: None }
    }
}

/// Stats handed to the roster by an external roster builder.
///
/// Everything a [`Combatant`] needs except the id and slot, which the roster
/// assigns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub max_health: i32,
    pub current_health: i32,
    pub strength: i32,
    pub initiative: i32,
    pub level: u32,
}

impl CombatantSpec {
    /// Spec for a fresh combatant at full health.
    pub fn new(name: impl Into<String>, max_health: i32, strength: i32, initiative: i32) -> Self {
        Self {
            name: name.into(),
            max_health,
            current_health: max_health,
            strength,
            initiative,
            level: 1,
        }
    }

    /// Carries over damage from an earlier encounter (builder pattern).
    #[must_use]
    pub fn with_current_health(mut self, current_health: i32) -> Self {
        self.current_health = current_health;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

/// One fighter and its mutable combat state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,

    /// Position in the side sub-roster at encounter start.
    ///
    /// Fixed for the combatant's lifetime; party persistence is keyed by it.
    pub slot: usize,

    pub max_health: i32,
    /// May drop below zero; anything `<= 0` is dead.
    pub current_health: i32,
    pub strength: i32,
    pub initiative: i32,
    pub level: u32,

    pub intent: Option<Intent>,
}

impl Combatant {
    pub fn from_spec(id: CombatantId, side: Side, slot: usize, spec: CombatantSpec) -> Self {
        Self {
            id,
            name: spec.name,
            side,
            slot,
            max_health: spec.max_health,
            current_health: spec.current_health,
            strength: spec.strength,
            initiative: spec.initiative,
            level: spec.level,
            intent: None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Subtracts `amount` from current health and returns the new value.
    ///
    /// The result is not clamped: overkill damage leaves negative health.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        self.current_health -= amount;
        self.current_health
    }

    /// Health clamped to `[0, max_health]` for presentation.
    pub fn display_health(&self) -> i32 {
        self.current_health.clamp(0, self.max_health)
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = Some(intent);
    }

    pub fn clear_intent(&mut self) {
        self.intent = None;
    }

    pub fn is_hostile_to(&self, other: &Combatant) -> bool {
        self.side != other.side
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Combatant {
        Combatant::from_spec(
            CombatantId(0),
            Side::Player,
            0,
            CombatantSpec::new("Knight", 20, 6, 4),
        )
    }

    #[test]
    fn damage_can_drive_health_negative() {
        let mut knight = knight();

        assert_eq!(knight.apply_damage(15), 5);
        assert!(knight.is_alive());

        assert_eq!(knight.apply_damage(9), -4);
        assert!(!knight.is_alive());
        assert_eq!(knight.display_health(), 0);
    }

    #[test]
    fn zero_health_counts_as_dead() {
        let mut knight = knight();
        knight.apply_damage(20);
        assert_eq!(knight.current_health, 0);
        assert!(!knight.is_alive());
    }

    #[test]
    fn intent_can_be_set_and_cleared() {
        let mut knight = knight();
        knight.set_intent(Intent::attack(CombatantId(3)));
        assert_eq!(
            knight.intent,
            Some(Intent::Attack {
                target: Some(CombatantId(3))
            })
        );

        knight.set_intent(Intent::Retreat);
        assert_eq!(knight.intent, Some(Intent::Retreat));

        knight.clear_intent();
        assert_eq!(knight.intent, None);
    }

    #[test]
    fn sides_oppose_each_other() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
        assert_eq!(Side::Enemy.to_string(), "enemy");
    }
}
