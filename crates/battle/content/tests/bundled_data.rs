//! The data directory shipped with the repository must load cleanly.

use std::path::PathBuf;

use battle_content::{ContentFactory, Party, PartySession, generate_enemies};
use battle_core::{BattleConfig, BattleEngine, PcgRng};

fn factory() -> ContentFactory {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    ContentFactory::new(data_dir)
}

#[test]
fn bundled_config_matches_defaults() {
    let config = factory().load_config().unwrap();
    assert_eq!(config, BattleConfig::default());
}

#[test]
fn bundled_catalogs_load_and_roll_encounters() {
    let factory = factory();
    let party = Party::starting(&factory.load_party().unwrap()).unwrap();
    let enemies = factory.load_enemies().unwrap();
    let table = factory.load_encounters(&enemies).unwrap();

    let mut rng = PcgRng::seeded(42);
    for _ in 0..50 {
        let group = generate_enemies(&table, &enemies, &mut rng).unwrap();
        let mut session = PartySession::new(party.clone());
        let mut builder = session.roster_builder(&group);

        let engine = BattleEngine::start(&mut builder, factory.load_config().unwrap(), &mut rng);
        assert!(engine.is_ok());
    }
}
