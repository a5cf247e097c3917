//! Encounter state machine.
//!
//! The [`BattleEngine`] is the only owner of the roster. It walks the phases
//! `Start → Selection ⇄ Resolution → Won | Lost | Retreated` and hands the
//! driver one [`Step`] at a time. It never sleeps or blocks: each
//! [`Step::Play`] carries the delay the driver must honour before calling
//! [`BattleEngine::advance`] again, and [`Step::AwaitIntent`] repeats until
//! [`BattleEngine::submit_intent`] answers it.

mod errors;
mod phase;

pub use errors::{BattleError, IntentRejection};
pub use phase::{BattlePhase, Outcome, Step};

use std::collections::VecDeque;

use crate::action::{ActionOutcome, resolve_attack, resolve_retreat};
use crate::combatant::{CombatantId, Intent, Side};
use crate::config::BattleConfig;
use crate::event::{BattleEvent, Effect};
use crate::rng::BattleRng;
use crate::roster::{Roster, RosterBuilder};
use crate::targeting::resolve_target;
use crate::turn_order::resolve_turn_order;

/// Drives a single encounter from roster construction to its outcome.
///
/// The engine is consumed by the encounter: once [`Step::Finished`] has been
/// yielded, [`advance`](Self::advance) returns `None` forever.
pub struct BattleEngine<R> {
    config: BattleConfig,
    rng: R,
    phase: BattlePhase,
    roster: Roster,

    /// Initiative order computed once at start. Removed combatants stay in
    /// the snapshot and are skipped by a liveness lookup.
    turn_order: Vec<CombatantId>,
    round: u32,
    selection_cursor: usize,
    resolution_cursor: usize,

    /// Steps already decided but not yet handed to the driver.
    pending: VecDeque<Step>,
    outcome: Option<Outcome>,
    finished: bool,
}

impl<R: BattleRng> BattleEngine<R> {
    /// Creates an engine in [`BattlePhase::Start`].
    pub fn new(config: BattleConfig, rng: R) -> Result<Self, BattleError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            phase: BattlePhase::Start,
            roster: Roster::default(),
            turn_order: Vec::new(),
            round: 0,
            selection_cursor: 0,
            resolution_cursor: 0,
            pending: VecDeque::new(),
            outcome: None,
            finished: false,
        })
    }

    /// Creates an engine and immediately runs the `Start` phase.
    pub fn start(
        builder: &mut (impl RosterBuilder + ?Sized),
        config: BattleConfig,
        rng: R,
    ) -> Result<Self, BattleError> {
        let mut engine = Self::new(config, rng)?;
        engine.begin(builder)?;
        Ok(engine)
    }

    /// Builds the roster, fixes the turn order and enters `Selection`.
    pub fn begin(&mut self, builder: &mut (impl RosterBuilder + ?Sized)) -> Result<(), BattleError> {
        if self.phase != BattlePhase::Start {
            return Err(BattleError::WrongPhase { phase: self.phase });
        }

        self.roster = Roster::from_spec(builder.build_initial_roster())?;
        self.turn_order = resolve_turn_order(self.roster.combatants());
        self.round = 1;
        self.selection_cursor = 0;
        self.phase = BattlePhase::Selection;
        Ok(())
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn turn_order(&self) -> &[CombatantId] {
        &self.turn_order
    }

    /// Current round, starting at 1 once the encounter has begun.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The player combatant whose intent selection is waiting on, if any.
    pub fn awaiting_intent(&self) -> Option<CombatantId> {
        if self.phase != BattlePhase::Selection {
            return None;
        }
        self.roster
            .side(Side::Player)
            .get(self.selection_cursor)
            .copied()
    }

    /// Records the intent of the combatant selection is waiting on.
    ///
    /// An attack hint must name a living enemy right now; it is re-validated
    /// again when the attack resolves. The last submission of a round moves
    /// the engine into `Resolution`.
    pub fn submit_intent(&mut self, actor: CombatantId, intent: Intent) -> Result<(), BattleError> {
        let expected = self
            .awaiting_intent()
            .ok_or(BattleError::WrongPhase { phase: self.phase })?;
        if actor != expected {
            return Err(BattleError::IntentRejected {
                actor,
                reason: IntentRejection::NotYourTurn { expected },
            });
        }

        if let Intent::Attack {
            target: Some(target),
        } = intent
        {
            let reason = match self.roster.get(target) {
                Some(c) if !c.is_alive() => Some(IntentRejection::TargetUnavailable(target)),
                Some(c) if c.side != Side::Enemy => Some(IntentRejection::TargetNotHostile(target)),
                Some(_) => None,
                None => Some(IntentRejection::TargetUnavailable(target)),
            };
            if let Some(reason) = reason {
                return Err(BattleError::IntentRejected { actor, reason });
            }
        }

        if let Some(combatant) = self.roster.get_mut(actor) {
            combatant.set_intent(intent);
        }
        self.selection_cursor += 1;

        if self.selection_cursor >= self.roster.side(Side::Player).len() {
            self.enter_resolution();
        }
        Ok(())
    }

    /// Produces the next step, or `None` once the encounter is over.
    pub fn advance(&mut self) -> Result<Option<Step>, BattleError> {
        if let Some(step) = self.pending.pop_front() {
            return Ok(Some(step));
        }

        match self.phase {
            BattlePhase::Start => Err(BattleError::WrongPhase { phase: self.phase }),
            BattlePhase::Selection => self.selection_step().map(Some),
            BattlePhase::Resolution => self.resolve_next().map(Some),
            BattlePhase::Won | BattlePhase::Lost | BattlePhase::Retreated => {
                if self.finished {
                    return Ok(None);
                }
                self.finished = true;
                Ok(self.outcome.map(Step::Finished))
            }
        }
    }

    fn selection_step(&mut self) -> Result<Step, BattleError> {
        match self.awaiting_intent() {
            Some(actor) => Ok(Step::AwaitIntent { actor }),
            None => {
                self.enter_resolution();
                self.resolve_next()
            }
        }
    }

    /// Enemy AI: every living enemy attacks a random player.
    fn enter_resolution(&mut self) {
        let enemies: Vec<CombatantId> = self.roster.side(Side::Enemy).to_vec();
        for id in enemies {
            if let Some(enemy) = self.roster.get_mut(id) {
                enemy.set_intent(Intent::attack_any());
            }
        }
        self.resolution_cursor = 0;
        self.phase = BattlePhase::Resolution;
    }

    /// Dispatches the next living combatant's action and returns its first beat.
    fn resolve_next(&mut self) -> Result<Step, BattleError> {
        loop {
            let Some(&actor) = self.turn_order.get(self.resolution_cursor) else {
                self.finish_round();
                return self.selection_step();
            };
            self.resolution_cursor += 1;

            let intent = match self.roster.get(actor) {
                Some(combatant) if combatant.is_alive() => combatant.intent,
                _ => continue,
            };
            let Some(intent) = intent else {
                continue;
            };

            let resolved = match intent {
                Intent::Attack { target } => {
                    let target = match self.roster.get(actor) {
                        Some(attacker) => {
                            resolve_target(attacker, target, &self.roster, &mut self.rng)?
                        }
                        None => continue,
                    };
                    resolve_attack(actor, target, &mut self.roster, &self.config, &mut self.rng)?
                }
                Intent::Retreat => {
                    resolve_retreat(actor, &mut self.roster, &self.config, &mut self.rng)?
                }
            };

            self.pending
                .extend(resolved.beats.into_iter().map(Step::from));

            if let Some(outcome) = self.terminal_outcome(&resolved.outcome) {
                self.enter_terminal(outcome);
            }

            if let Some(step) = self.pending.pop_front() {
                return Ok(step);
            }
        }
    }

    /// Checked after every single action, not only at round end.
    ///
    /// A successful retreat empties both sides, so it is recognised from the
    /// action itself before the emptiness checks could misread it as a win.
    fn terminal_outcome(&self, outcome: &ActionOutcome) -> Option<Outcome> {
        if outcome.escaped() {
            Some(Outcome::Retreated)
        } else if self.roster.is_side_empty(Side::Enemy) {
            Some(Outcome::Won)
        } else if self.roster.is_side_empty(Side::Player) {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    fn enter_terminal(&mut self, outcome: Outcome) {
        self.phase = outcome.into();
        self.outcome = Some(outcome);
        self.pending.push_back(Step::Play {
            effects: vec![Effect::Event(BattleEvent::message(outcome.message()))],
            delay: self.config.outcome_delay(),
        });
    }

    fn finish_round(&mut self) {
        self.roster.clear_intents();
        self.selection_cursor = 0;
        self.resolution_cursor = 0;
        self.round += 1;
        self.phase = BattlePhase::Selection;
    }
}
