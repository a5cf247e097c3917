//! Line-based player input.

use async_trait::async_trait;
use battle_core::{Combatant, CombatantId, Intent, Roster, Side};
use battle_runtime::{IntentSource, RuntimeError};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// What one line of input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Choose(Intent),
    Quit,
}

/// Parses `<n>` / `a <n>` (attack the n-th listed enemy), `a` (any enemy),
/// `r` (retreat) or `q` (quit). Enemy numbers are 1-based.
pub fn parse_command(line: &str, enemies: &[CombatantId]) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?.to_ascii_lowercase();

    let pick = |word: &str| {
        let n: usize = word.parse().ok()?;
        let id = enemies.get(n.checked_sub(1)?)?;
        Some(Command::Choose(Intent::attack(*id)))
    };

    let command = match first.as_str() {
        "r" | "retreat" => Command::Choose(Intent::Retreat),
        "q" | "quit" => Command::Quit,
        "a" | "attack" => match words.next() {
            Some(word) => pick(word)?,
            None => Command::Choose(Intent::attack_any()),
        },
        other => pick(other)?,
    };

    if words.next().is_some() {
        return None;
    }
    Some(command)
}

/// Prompts on stdout and reads intents from stdin.
pub struct StdinIntentSource {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinIntentSource {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdinIntentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentSource for StdinIntentSource {
    async fn choose_intent(
        &self,
        actor: &Combatant,
        roster: &Roster,
    ) -> battle_runtime::Result<Intent> {
        let enemies: Vec<&Combatant> = roster.living(Side::Enemy).collect();
        let ids: Vec<CombatantId> = enemies.iter().map(|enemy| enemy.id).collect();

        println!();
        for (n, enemy) in enemies.iter().enumerate() {
            println!(
                "  [{}] {} (lv {}) {}/{} HP",
                n + 1,
                enemy.name,
                enemy.level,
                enemy.display_health(),
                enemy.max_health
            );
        }

        let mut lines = self.lines.lock().await;
        loop {
            println!(
                "{} ({}/{} HP): attack [1-{}], [r]etreat or [q]uit?",
                actor.name,
                actor.display_health(),
                actor.max_health,
                ids.len()
            );

            let Some(line) = lines.next_line().await? else {
                return Err(RuntimeError::IntentAborted { actor: actor.id });
            };
            match parse_command(&line, &ids) {
                Some(Command::Choose(intent)) => return Ok(intent),
                Some(Command::Quit) => return Err(RuntimeError::IntentAborted { actor: actor.id }),
                None => println!("Unrecognised choice '{}'", line.trim()),
            }
        }
    }
}
