use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use battle_content::{Enemy, EnemyTemplate, Party, PartyCatalog, PartyMemberTemplate, PartySession};
use battle_core::{
    BattleConfig, BattleEngine, BattleEvent, CombatantId, CombatantSpec, Intent, Outcome,
    RosterSpec, ScriptedRng,
};
use battle_runtime::{
    EncounterRunner, Event, EventSink, FirstEnemyIntentSource, InstantClock, PartyStore,
    Result, RuntimeConfig, RuntimeError, SceneTransition, ScriptedIntentSource, Topic,
};

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<BattleEvent>>>);

impl RecordingSink {
    fn events(&self) -> Vec<BattleEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &BattleEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[derive(Clone, Default)]
struct RecordingTransition(Arc<Mutex<Vec<Outcome>>>);

#[async_trait]
impl SceneTransition for RecordingTransition {
    async fn on_outcome(&self, outcome: Outcome) -> Result<()> {
        self.0.lock().unwrap().push(outcome);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingStore(Vec<(usize, i32)>);

impl PartyStore for RecordingStore {
    fn save_health(&mut self, slot: usize, health: i32) -> Result<()> {
        self.0.push((slot, health));
        Ok(())
    }
}

fn engine(
    players: Vec<CombatantSpec>,
    enemies: Vec<CombatantSpec>,
    roll: u32,
) -> BattleEngine<ScriptedRng> {
    BattleEngine::start(
        &mut RosterSpec::new(players, enemies),
        BattleConfig::default(),
        ScriptedRng::repeat(roll),
    )
    .unwrap()
}

#[tokio::test]
async fn runner_drives_a_win_and_waits_between_beats() {
    let clock = InstantClock::new();
    let sink = RecordingSink::default();
    let transition = RecordingTransition::default();
    let runner = EncounterRunner::builder()
        .intent_source(FirstEnemyIntentSource)
        .sink(sink.clone())
        .clock(clock.clone())
        .transition(transition.clone())
        .build()
        .unwrap();

    let mut store = RecordingStore::default();
    let outcome = runner
        .run(
            engine(
                vec![CombatantSpec::new("Hero", 30, 10, 5)],
                vec![CombatantSpec::new("Slime", 20, 5, 3)],
                0,
            ),
            &mut store,
        )
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(*transition.0.lock().unwrap(), vec![Outcome::Won]);
    // Round 1: Hero hit, Slime hit. Round 2: Hero hit, Slime death, outcome.
    assert_eq!(clock.waits(), vec![Duration::from_millis(1200); 5]);
    assert_eq!(store.0, vec![(0, 25)]);
    assert_eq!(
        sink.events().last(),
        Some(&BattleEvent::message("You won!"))
    );
}

#[tokio::test]
async fn rejected_intents_are_retried_then_abort() {
    // Targets a fellow player every time.
    let runner = EncounterRunner::builder()
        .intent_source(ScriptedIntentSource::new([
            Intent::attack(CombatantId(1)),
            Intent::attack(CombatantId(1)),
            Intent::attack(CombatantId(1)),
        ]))
        .clock(InstantClock::new())
        .build()
        .unwrap();

    let result = runner
        .run(
            engine(
                vec![
                    CombatantSpec::new("Ayla", 30, 10, 5),
                    CombatantSpec::new("Bram", 30, 10, 5),
                ],
                vec![CombatantSpec::new("Slime", 20, 5, 3)],
                0,
            ),
            &mut RecordingStore::default(),
        )
        .await;

    assert!(matches!(
        result,
        Err(RuntimeError::IntentRetriesExhausted {
            actor: CombatantId(0),
            attempts: 3
        })
    ));
}

#[tokio::test]
async fn one_rejection_then_a_valid_intent_recovers() {
    let runner = EncounterRunner::builder()
        .intent_source(ScriptedIntentSource::new([
            Intent::attack(CombatantId(9)),
            Intent::Retreat,
        ]))
        .clock(InstantClock::new())
        .build()
        .unwrap();

    let outcome = runner
        .run(
            engine(
                vec![CombatantSpec::new("Hero", 30, 10, 5)],
                vec![CombatantSpec::new("Slime", 20, 5, 3)],
                99,
            ),
            &mut RecordingStore::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Retreated);
}

#[tokio::test]
async fn exhausted_script_surfaces_as_error() {
    let runner = EncounterRunner::builder()
        .intent_source(ScriptedIntentSource::new([]))
        .clock(InstantClock::new())
        .build()
        .unwrap();

    let result = runner
        .run(
            engine(
                vec![CombatantSpec::new("Hero", 30, 10, 5)],
                vec![CombatantSpec::new("Slime", 20, 5, 3)],
                0,
            ),
            &mut RecordingStore::default(),
        )
        .await;

    assert!(matches!(
        result,
        Err(RuntimeError::IntentSourceExhausted { .. })
    ));
}

#[test]
fn builder_requires_an_intent_source() {
    assert!(matches!(
        EncounterRunner::builder().build(),
        Err(RuntimeError::MissingIntentSource)
    ));
}

#[test]
fn builder_rejects_invalid_battle_config() {
    let mut config = RuntimeConfig::default();
    config.battle.retreat_threshold = 101;

    let result = EncounterRunner::builder()
        .config(config)
        .intent_source(FirstEnemyIntentSource)
        .build();
    assert!(matches!(result, Err(RuntimeError::Battle(_))));
}

#[tokio::test]
async fn event_bus_sees_battle_and_outcome_topics() {
    let config = RuntimeConfig::default();
    let bus = config.event_bus();
    let mut battle_rx = bus.subscribe(Topic::Battle);
    let mut outcome_rx = bus.subscribe(Topic::Outcome);

    let runner = EncounterRunner::builder()
        .config(config)
        .intent_source(ScriptedIntentSource::new([Intent::Retreat]))
        .sink(bus.clone())
        .transition(bus)
        .clock(InstantClock::new())
        .build()
        .unwrap();

    runner
        .run(
            engine(
                vec![CombatantSpec::new("Hero", 30, 10, 5)],
                vec![CombatantSpec::new("Slime", 20, 5, 3)],
                50,
            ),
            &mut RecordingStore::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        battle_rx.recv().await.unwrap(),
        Event::Battle(BattleEvent::message("Your party ran away"))
    );
    assert_eq!(
        battle_rx.recv().await.unwrap(),
        Event::Battle(BattleEvent::message("You escaped!"))
    );
    assert_eq!(outcome_rx.recv().await.unwrap(), Event::Outcome(Outcome::Retreated));
}

fn party() -> Party {
    let catalog = PartyCatalog {
        default_member: "Knight".into(),
        members: vec![PartyMemberTemplate {
            name: "Knight".into(),
            starting_level: 1,
            base_health: 30,
            base_strength: 10,
            base_initiative: 5,
        }],
    };
    Party::starting(&catalog).unwrap()
}

fn ogre() -> Enemy {
    Enemy::from_template(
        &EnemyTemplate {
            name: "Ogre".into(),
            base_health: 40,
            base_strength: 10,
            base_initiative: 6,
        },
        1,
    )
}

#[tokio::test]
async fn party_health_persists_across_encounters() {
    let runner = EncounterRunner::builder()
        .intent_source(ScriptedIntentSource::new([Intent::Retreat, Intent::Retreat]))
        .clock(InstantClock::new())
        .build()
        .unwrap();

    // The level 1 ogre (strength 15, initiative 9) outpaces both knights;
    // the first retreat roll fails (20), the second succeeds (50).
    let mut session = PartySession::new(party());
    let rng = ScriptedRng::new(vec![0, 0, 20, 50]);
    let outcome = runner.fight(&mut session, &[ogre()], rng).await.unwrap();
    assert_eq!(outcome, Outcome::Retreated);

    let party = session.into_party();
    let health: Vec<i32> = party.members().iter().map(|m| m.current_health).collect();
    assert_eq!(health, vec![15, 30]);

    // Next encounter starts from the saved health.
    let mut session = PartySession::new(party);
    let mut builder = session.roster_builder(&[ogre()]);
    let engine = BattleEngine::start(
        &mut builder,
        BattleConfig::default(),
        ScriptedRng::repeat(0),
    )
    .unwrap();
    assert_eq!(engine.roster().get(CombatantId(0)).unwrap().current_health, 15);
}
