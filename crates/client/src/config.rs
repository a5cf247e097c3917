//! Client configuration read from the process environment.

use std::env;
use std::path::PathBuf;

/// Settings for one client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Fixed seed for reproducible sessions; drawn from entropy when unset.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    /// Skip the pauses between beats.
    pub fast: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            session_id: None,
            fast: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: `data`)
    /// - `BATTLE_SEED` - RNG seed (default: random)
    /// - `BATTLE_SESSION_ID` - Log session name (default: timestamp)
    /// - `BATTLE_FAST` - Disable beat delays (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("BATTLE_DATA_DIR") {
            config.data_dir = dir;
        }
        config.seed = read_env::<u64>("BATTLE_SEED");
        config.session_id = read_env::<String>("BATTLE_SESSION_ID").filter(|id| !id.is_empty());
        if let Some(fast) = read_env_bool("BATTLE_FAST") {
            config.fast = fast;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
