//! Target validation and repair.

use crate::combatant::{Combatant, CombatantId, Side};
use crate::error::{CombatError, ErrorSeverity};
use crate::rng::BattleRng;
use crate::roster::Roster;

/// Target selection failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("{attacker} has no living {side} combatant to target")]
    NoValidTarget { attacker: CombatantId, side: Side },
}

impl CombatError for TargetError {
    fn severity(&self) -> ErrorSeverity {
        // The engine checks for an empty side after every action, so reaching
        // this means the state machine skipped a terminal check.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoValidTarget { .. } => "NO_VALID_TARGET",
        }
    }
}

/// Resolves the combatant an attack actually lands on.
///
/// Enemies ignore `stored` and pick a random living player. Players keep
/// `stored` while it still names a living enemy and otherwise fall back to a
/// random living enemy: the hint may have died, been removed, or never
/// pointed at the opposing side to begin with.
pub fn resolve_target(
    attacker: &Combatant,
    stored: Option<CombatantId>,
    roster: &Roster,
    rng: &mut impl BattleRng,
) -> Result<CombatantId, TargetError> {
    let opposing = attacker.side.opponent();

    if attacker.side == Side::Player
        && let Some(target) = stored.and_then(|id| roster.get(id))
        && target.side == opposing
        && target.is_alive()
    {
        return Ok(target.id);
    }

    let candidates: Vec<CombatantId> = roster.living(opposing).map(|c| c.id).collect();
    if candidates.is_empty() {
        return Err(TargetError::NoValidTarget {
            attacker: attacker.id,
            side: opposing,
        });
    }

    Ok(candidates[rng.index(candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatantSpec;
    use crate::rng::ScriptedRng;
    use crate::roster::RosterSpec;

    fn roster() -> Roster {
        Roster::from_spec(RosterSpec::new(
            vec![
                CombatantSpec::new("Ayla", 10, 3, 1),
                CombatantSpec::new("Bram", 10, 3, 1),
            ],
            vec![
                CombatantSpec::new("Slime", 10, 3, 1),
                CombatantSpec::new("Bat", 10, 3, 1),
                CombatantSpec::new("Rat", 10, 3, 1),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn player_keeps_a_living_enemy_target() {
        let roster = roster();
        let ayla = roster.get(CombatantId(0)).unwrap();
        let mut rng = ScriptedRng::repeat(0);

        let target = resolve_target(ayla, Some(CombatantId(3)), &roster, &mut rng).unwrap();
        assert_eq!(target, CombatantId(3));
        assert_eq!(rng.draws(), 0, "a valid hint needs no random draw");
    }

    #[test]
    fn player_repairs_a_removed_target() {
        let mut roster = roster();
        roster.remove(CombatantId(3));
        let ayla = roster.get(CombatantId(0)).unwrap().clone();
        let mut rng = ScriptedRng::repeat(1);

        let target = resolve_target(&ayla, Some(CombatantId(3)), &roster, &mut rng).unwrap();
        // Remaining enemies are [#2, #4]; index 1 picks #4.
        assert_eq!(target, CombatantId(4));
    }

    #[test]
    fn player_repairs_a_same_side_target() {
        let roster = roster();
        let ayla = roster.get(CombatantId(0)).unwrap();
        let mut rng = ScriptedRng::repeat(0);

        let target = resolve_target(ayla, Some(CombatantId(1)), &roster, &mut rng).unwrap();
        assert_eq!(target, CombatantId(2));
    }

    #[test]
    fn player_without_hint_picks_random_enemy() {
        let roster = roster();
        let ayla = roster.get(CombatantId(0)).unwrap();
        let mut rng = ScriptedRng::repeat(2);

        let target = resolve_target(ayla, None, &roster, &mut rng).unwrap();
        assert_eq!(target, CombatantId(4));
    }

    #[test]
    fn enemy_ignores_its_stored_target() {
        let roster = roster();
        let slime = roster.get(CombatantId(2)).unwrap();
        let mut rng = ScriptedRng::repeat(1);

        let target = resolve_target(slime, Some(CombatantId(0)), &roster, &mut rng).unwrap();
        assert_eq!(target, CombatantId(1));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn empty_opposing_side_fails_loudly() {
        let mut roster = roster();
        roster.remove(CombatantId(0));
        roster.remove(CombatantId(1));
        let slime = roster.get(CombatantId(2)).unwrap().clone();

        let result = resolve_target(&slime, None, &roster, &mut ScriptedRng::repeat(0));
        assert_eq!(
            result,
            Err(TargetError::NoValidTarget {
                attacker: CombatantId(2),
                side: Side::Player,
            })
        );
    }
}
