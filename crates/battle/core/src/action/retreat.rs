use crate::action::{ActionError, ActionOutcome, Beat, InvalidActionReason, ResolvedAction, RetreatReport};
use crate::combatant::{CombatantId, Side};
use crate::config::BattleConfig;
use crate::rng::BattleRng;
use crate::roster::Roster;

pub const RETREAT_SUCCESS_MESSAGE: &str = "Your party ran away";
pub const RETREAT_FAILURE_MESSAGE: &str = "Your party failed to flee";

/// Resolves a retreat attempt by a player combatant.
///
/// The whole party flees together: a roll of at least
/// [`BattleConfig::retreat_threshold`] clears the roster. A failed roll only
/// costs the actor its turn.
pub fn resolve_retreat(
    actor: CombatantId,
    roster: &mut Roster,
    config: &BattleConfig,
    rng: &mut impl BattleRng,
) -> Result<ResolvedAction, ActionError> {
    let combatant = roster
        .get(actor)
        .ok_or(ActionError::invalid(actor, InvalidActionReason::ActorMissing))?;
    if !combatant.is_alive() {
        return Err(ActionError::invalid(actor, InvalidActionReason::ActorDead));
    }
    if combatant.side != Side::Player {
        return Err(ActionError::invalid(actor, InvalidActionReason::NotAPlayer));
    }

    let roll = rng.roll_percent();
    let escaped = roll >= config.retreat_threshold;

    let mut beat = Beat::new(config.turn_delay());
    if escaped {
        beat.message(RETREAT_SUCCESS_MESSAGE);
        roster.clear();
    } else {
        beat.message(RETREAT_FAILURE_MESSAGE);
    }

    Ok(ResolvedAction {
        outcome: ActionOutcome::Retreat(RetreatReport {
            actor,
            roll,
            escaped,
        }),
        beats: vec![beat],
    })
}
