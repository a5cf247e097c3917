//! Encounter runner.
//!
//! The runner owns the collaborators and turns the engine's step sequence
//! into real effects: intents are requested from the [`IntentSource`],
//! events fan out to every [`EventSink`], health reports go to the
//! [`PartyStore`], and the [`Clock`] supplies the pauses between beats.

use battle_content::{Enemy, PartySession};
use battle_core::{
    BattleConfig, BattleEngine, BattleRng, CombatError, Effect, Outcome, Side, Step,
};

use crate::api::{EventSink, IntentSource, PartyStore, Result, RuntimeError, SceneTransition};
use crate::clock::{Clock, TokioClock};
use crate::events::EventBus;

/// Runtime configuration shared by every encounter a runner drives.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    /// Consecutive rejected intents tolerated for one combatant.
    pub max_intent_attempts: u32,
}

impl RuntimeConfig {
    /// Event bus sized for this configuration.
    pub fn event_bus(&self) -> EventBus {
        EventBus::with_capacity(self.event_buffer_size)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 256,
            max_intent_attempts: 3,
        }
    }
}

/// Drives encounters to completion.
pub struct EncounterRunner {
    config: RuntimeConfig,
    intents: Box<dyn IntentSource>,
    sinks: Vec<Box<dyn EventSink>>,
    clock: Box<dyn Clock>,
    transition: Option<Box<dyn SceneTransition>>,
}

impl EncounterRunner {
    /// Create a new runner builder
    pub fn builder() -> EncounterRunnerBuilder {
        EncounterRunnerBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Starts an encounter between the session's fighters and `enemies`, then
    /// runs it to its outcome.
    pub async fn fight<R: BattleRng>(
        &self,
        session: &mut PartySession,
        enemies: &[Enemy],
        rng: R,
    ) -> Result<Outcome> {
        let mut builder = session.roster_builder(enemies);
        let engine = BattleEngine::start(&mut builder, self.config.battle.clone(), rng)?;
        self.run(engine, session).await
    }

    /// Runs an already started engine until it yields its outcome.
    pub async fn run<R: BattleRng>(
        &self,
        mut engine: BattleEngine<R>,
        party: &mut dyn PartyStore,
    ) -> Result<Outcome> {
        tracing::info!(
            players = engine.roster().side(Side::Player).len(),
            enemies = engine.roster().side(Side::Enemy).len(),
            "Encounter started"
        );

        let mut outcome = None;
        let mut rejected = 0;

        while let Some(step) = engine.advance()? {
            match step {
                Step::AwaitIntent { actor } => {
                    let combatant = engine
                        .roster()
                        .get(actor)
                        .ok_or(RuntimeError::UnknownActor(actor))?;
                    let intent = self.intents.choose_intent(combatant, engine.roster()).await?;
                    tracing::debug!("{} chose {:?}", combatant.name, intent);

                    match engine.submit_intent(actor, intent) {
                        Ok(()) => rejected = 0,
                        Err(err) if err.severity().is_recoverable() => {
                            rejected += 1;
                            tracing::warn!(
                                code = err.error_code(),
                                attempt = rejected,
                                "Intent rejected: {}",
                                err
                            );
                            if rejected >= self.config.max_intent_attempts {
                                return Err(RuntimeError::IntentRetriesExhausted {
                                    actor,
                                    attempts: rejected,
                                });
                            }
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                Step::Play { effects, delay } => {
                    for effect in effects {
                        match effect {
                            Effect::Event(event) => {
                                tracing::debug!("Round {}: {:?}", engine.round(), event);
                                for sink in &self.sinks {
                                    sink.emit(&event);
                                }
                            }
                            Effect::SaveHealth { slot, health } => {
                                party.save_health(slot, health)?;
                            }
                        }
                    }
                    self.clock.wait(delay).await;
                }
                Step::Finished(result) => {
                    tracing::info!(outcome = %result, rounds = engine.round(), "Encounter finished");
                    if let Some(transition) = &self.transition {
                        transition.on_outcome(result).await?;
                    }
                    outcome = Some(result);
                }
            }
        }

        outcome.ok_or(RuntimeError::MissingOutcome)
    }
}

/// Builder for [`EncounterRunner`].
pub struct EncounterRunnerBuilder {
    config: RuntimeConfig,
    intents: Option<Box<dyn IntentSource>>,
    sinks: Vec<Box<dyn EventSink>>,
    clock: Option<Box<dyn Clock>>,
    transition: Option<Box<dyn SceneTransition>>,
}

impl EncounterRunnerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            intents: None,
            sinks: Vec::new(),
            clock: None,
            transition: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the player intent source (required)
    pub fn intent_source(mut self, source: impl IntentSource + 'static) -> Self {
        self.intents = Some(Box::new(source));
        self
    }

    /// Add an event sink. Every sink sees every event, in registration order.
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Replace the default [`TokioClock`]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn transition(mut self, transition: impl SceneTransition + 'static) -> Self {
        self.transition = Some(Box::new(transition));
        self
    }

    /// Build the runner
    pub fn build(self) -> Result<EncounterRunner> {
        let intents = self.intents.ok_or(RuntimeError::MissingIntentSource)?;
        self.config.battle.validate().map_err(battle_core::BattleError::from)?;

        Ok(EncounterRunner {
            config: self.config,
            intents,
            sinks: self.sinks,
            clock: self.clock.unwrap_or_else(|| Box::new(TokioClock)),
            transition: self.transition,
        })
    }
}
