use std::time::Duration;

use crate::action::Beat;
use crate::combatant::CombatantId;
use crate::event::Effect;

/// Stage of the encounter state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    Start,
    Selection,
    Resolution,
    Won,
    Lost,
    Retreated,
}

impl BattlePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Retreated)
    }
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
    Retreated,
}

impl Outcome {
    /// Text shown while the outcome is on screen.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You won!",
            Self::Lost => "You lost!",
            Self::Retreated => "You escaped!",
        }
    }
}

impl From<Outcome> for BattlePhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => BattlePhase::Won,
            Outcome::Lost => BattlePhase::Lost,
            Outcome::Retreated => BattlePhase::Retreated,
        }
    }
}

/// One unit of the externally driven encounter sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Selection is blocked until the driver submits an intent for `actor`.
    AwaitIntent { actor: CombatantId },

    /// Apply `effects` now, then wait `delay` before advancing again.
    Play { effects: Vec<Effect>, delay: Duration },

    /// Terminal outcome. Yielded exactly once, after which the sequence ends.
    Finished(Outcome),
}

impl From<Beat> for Step {
    fn from(beat: Beat) -> Self {
        Step::Play {
            effects: beat.effects,
            delay: beat.delay,
        }
    }
}
