use std::cmp::Reverse;

use crate::combatant::{Combatant, CombatantId};

/// Orders combatants by initiative, highest first.
///
/// Equal initiative keeps input order (`sort_by_key` is stable), so the
/// result is fully determined by the roster's build order.
pub fn resolve_turn_order(combatants: &[Combatant]) -> Vec<CombatantId> {
    let mut ordered: Vec<&Combatant> = combatants.iter().filter(|c| c.is_alive()).collect();
    ordered.sort_by_key(|c| Reverse(c.initiative));
    ordered.into_iter().map(|c| c.id).collect()
}
