//! Battle client binary.
//!
//! Composition root: loads content from the data directory, builds the
//! encounter runner with terminal input and output, then fights random
//! encounters until the party is wiped or the player quits.
//!
//! ```bash
//! BATTLE_SEED=7 BATTLE_FAST=1 cargo run -p battle-client
//! ```

mod config;
mod console;
mod input;
mod logging;

use anyhow::Result;
use battle_content::{ContentFactory, Party, PartySession, generate_enemies};
use battle_core::{Outcome, PcgRng};
use battle_runtime::{EncounterRunner, RuntimeConfig, RuntimeError, TokioClock};

use crate::config::ClientConfig;
use crate::console::ConsoleSink;
use crate::input::StdinIntentSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting battle client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let mut battle = factory.load_config()?;
    if config.fast {
        battle = battle.without_delays();
    }
    let party_catalog = factory.load_party()?;
    let enemy_catalog = factory.load_enemies()?;
    let encounters = factory.load_encounters(&enemy_catalog)?;

    let runtime_config = RuntimeConfig {
        battle,
        ..RuntimeConfig::default()
    };
    let runner = EncounterRunner::builder()
        .config(runtime_config)
        .intent_source(StdinIntentSource::new())
        .sink(ConsoleSink)
        .clock(TokioClock)
        .build()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Seed: {}", seed);
    let mut rng = PcgRng::seeded(seed);

    let mut party = Party::starting(&party_catalog)?;
    let mut encounter = 1u32;

    loop {
        let enemies = generate_enemies(&encounters, &enemy_catalog, &mut rng)?;
        let names: Vec<String> = enemies
            .iter()
            .map(|enemy| format!("{} (lv {})", enemy.name, enemy.level))
            .collect();
        println!("\n=== Encounter {} ===", encounter);
        println!("Enemies appear: {}", names.join(", "));

        let mut session = PartySession::new(party);
        let result = runner.fight(&mut session, &enemies, &mut rng).await;
        party = session.into_party();

        match result {
            Ok(Outcome::Lost) => {
                println!("Your party has fallen after {} encounters.", encounter);
                break;
            }
            Ok(outcome) => {
                tracing::info!("Encounter {} ended: {}", encounter, outcome);
                for member in party.members() {
                    println!("  {}: {}/{} HP", member.name, member.current_health, member.max_health);
                }
            }
            Err(RuntimeError::IntentAborted { .. }) => {
                println!("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }

        if party.is_wiped() {
            break;
        }
        encounter += 1;
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
