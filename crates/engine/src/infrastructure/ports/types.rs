//! Data exchanged across the external service ports.

use operator_domain::Player;

/// Outcome of one combat exchange, as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResolution {
    pub initiator: Player,
    pub opponent: Player,
    pub messages: Vec<String>,
}

/// One command sent to a running text adventure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTurn {
    pub game: String,
    /// Every command since the game started, including `command`.
    pub history: Vec<String>,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameTurnReply {
    pub messages: Vec<String>,
    /// The command ended the game.
    pub finished: bool,
}
