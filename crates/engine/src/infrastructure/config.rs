//! Engine configuration, read from the environment.
//!
//! `main` loads `.env` through dotenvy before calling [`EngineConfig::from_env`].

use crate::infrastructure::combat_resolver::DEFAULT_RESOLVER_URL;

/// Store token of the sparring partner used when no opponent is named.
pub const DEFAULT_PRACTICE_TARGET_TOKEN: &str = "target_hash";

/// Player the console session acts as.
pub const DEFAULT_PLAYER_TOKEN: &str = "truckthunders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// `RESOLVER_URL`
    pub resolver_url: String,
    /// `INTERPRETER_URL`. Unset means the offline interpreter.
    pub interpreter_url: Option<String>,
    /// `PRACTICE_TARGET_TOKEN`
    pub practice_target_token: String,
    /// `PLAYER_TOKEN`
    pub player_token: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolver_url: DEFAULT_RESOLVER_URL.to_string(),
            interpreter_url: None,
            practice_target_token: DEFAULT_PRACTICE_TARGET_TOKEN.to_string(),
            player_token: DEFAULT_PLAYER_TOKEN.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            resolver_url: get("RESOLVER_URL").unwrap_or(defaults.resolver_url),
            interpreter_url: get("INTERPRETER_URL"),
            practice_target_token: get("PRACTICE_TARGET_TOKEN")
                .unwrap_or(defaults.practice_target_token),
            player_token: get("PLAYER_TOKEN").unwrap_or(defaults.player_token),
        }
    }
}
