//! Character classes a player can pick between.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    #[default]
    Dreamer,
    Chosen,
    Forsaken,
    Cloistered,
}

impl CharacterClass {
    /// Every selectable class, in the order they are offered to players.
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Dreamer,
            CharacterClass::Chosen,
            CharacterClass::Forsaken,
            CharacterClass::Cloistered,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dreamer => "dreamer",
            Self::Chosen => "chosen",
            Self::Forsaken => "forsaken",
            Self::Cloistered => "cloistered",
        }
    }

    /// One-line flavour text shown in the class list.
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Dreamer => "sees the world as it could be, and hits it until it complies",
            Self::Chosen => "was picked for greatness by someone with questionable judgement",
            Self::Forsaken => "was left behind and has been holding a grudge ever since",
            Self::Cloistered => "spent years indoors studying exactly this kind of fight",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CharacterClass::all()
            .iter()
            .copied()
            .find(|class| class.as_str() == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown character class: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_class() {
        for class in CharacterClass::all() {
            assert_eq!(class.as_str().parse::<CharacterClass>(), Ok(*class));
        }
    }

    #[test]
    fn class_names_are_case_sensitive() {
        assert!("Dreamer".parse::<CharacterClass>().is_err());
        assert!("".parse::<CharacterClass>().is_err());
    }
}
