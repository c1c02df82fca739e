//! The combat move vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A move a combatant can make in one exchange.
///
/// The resolver reads the move from each combatant's `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatAction {
    Attack,
    Area,
    Block,
    Disrupt,
    Dodge,
}

impl CombatAction {
    /// All moves, in the order used when picking one at random.
    pub const ALL: [CombatAction; 5] = [
        CombatAction::Attack,
        CombatAction::Area,
        CombatAction::Block,
        CombatAction::Disrupt,
        CombatAction::Dodge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Area => "area",
            Self::Block => "block",
            Self::Disrupt => "disrupt",
            Self::Dodge => "dodge",
        }
    }

    /// Pick a move by index. Out-of-range indices wrap around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for CombatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
