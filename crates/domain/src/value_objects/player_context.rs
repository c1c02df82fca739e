//! Player context - the mode a player is in.
//!
//! The context decides which action set is legal and what `Player::target`
//! means: an opponent token in combat, a game id in a text adventure, and
//! nothing at home.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerContext {
    /// A player's own room. New players start here.
    #[default]
    Home,
    /// Fighting the player named by `target`.
    Combat,
    /// Playing the game named by `target` through the interpreter.
    TextAdventure,
}

impl PlayerContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Combat => "combat",
            Self::TextAdventure => "text_adventure",
        }
    }
}

impl fmt::Display for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerContext {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "home" => Ok(Self::Home),
            "combat" => Ok(Self::Combat),
            "text_adventure" => Ok(Self::TextAdventure),
            other => Err(DomainError::parse(format!("Unknown player context: {other}"))),
        }
    }
}
