use crate::action::{ActionError, ActionOutcome, AttackReport, Beat, InvalidActionReason, ResolvedAction};
use crate::combatant::{CombatantId, Side};
use crate::config::BattleConfig;
use crate::event::{BattleEvent, Effect};
use crate::rng::BattleRng;
use crate::roster::Roster;

/// Rolls attack damage: `round(strength * U(min, max))`.
///
/// Never negative; zero strength always deals zero.
pub fn roll_damage(strength: i32, config: &BattleConfig, rng: &mut impl BattleRng) -> i32 {
    let multiplier = rng.uniform(config.min_damage_multiplier, config.max_damage_multiplier);
    let damage = (f64::from(strength) * multiplier).round() as i32;
    damage.max(0)
}

/// Resolves `attacker` hitting `target`.
///
/// The target must already be validated by [`crate::resolve_target`]. A
/// killing blow removes the target from the roster before this returns and
/// adds a second beat for the death.
pub fn resolve_attack(
    attacker: CombatantId,
    target: CombatantId,
    roster: &mut Roster,
    config: &BattleConfig,
    rng: &mut impl BattleRng,
) -> Result<ResolvedAction, ActionError> {
    let (attacker_name, strength, attacker_side) = {
        let actor = roster
            .get(attacker)
            .ok_or(ActionError::invalid(attacker, InvalidActionReason::ActorMissing))?;
        if !actor.is_alive() {
            return Err(ActionError::invalid(attacker, InvalidActionReason::ActorDead));
        }
        (actor.name.clone(), actor.strength, actor.side)
    };

    if roster.is_side_empty(attacker_side.opponent()) {
        return Err(ActionError::invalid(
            attacker,
            InvalidActionReason::NoOpposingCombatants,
        ));
    }

    let victim = roster.get_mut(target).ok_or(ActionError::invalid(
        attacker,
        InvalidActionReason::TargetMissing(target),
    ))?;
    if victim.side == attacker_side {
        return Err(ActionError::invalid(
            attacker,
            InvalidActionReason::FriendlyTarget(target),
        ));
    }

    let damage = roll_damage(strength, config, rng);
    let remaining_health = victim.apply_damage(damage);
    let target_name = victim.name.clone();
    let target_slot = victim.slot;
    let target_side = victim.side;

    let mut hit = Beat::new(config.turn_delay());
    hit.push(BattleEvent::AttackPlayed(attacker));
    hit.push(BattleEvent::HitPlayed(target));
    hit.push(BattleEvent::HealthChanged {
        id: target,
        health: remaining_health,
    });
    hit.message(format!(
        "{attacker_name} attacked {target_name} for {damage} damage"
    ));
    if target_side == Side::Player {
        hit.push(Effect::SaveHealth {
            slot: target_slot,
            health: remaining_health,
        });
    }

    let mut beats = vec![hit];

    let defeated = remaining_health <= 0;
    if defeated {
        let mut death = Beat::new(config.turn_delay());
        death.push(BattleEvent::DeathPlayed(target));
        death.message(format!("{target_name} has been defeated"));
        beats.push(death);

        roster.remove(target);
    }

    Ok(ResolvedAction {
        outcome: ActionOutcome::Attack(AttackReport {
            attacker,
            target,
            damage,
            remaining_health,
            defeated,
        }),
        beats,
    })
}
