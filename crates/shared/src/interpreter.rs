//! Text adventure interpreter wire format.

use serde::{Deserialize, Serialize};

/// One turn of a game. The interpreter is stateless and replays `history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterRequest {
    pub game: String,
    pub history: Vec<String>,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterpreterReply {
    #[serde(default)]
    pub messages: Vec<String>,
    /// Set when the command ended the game.
    #[serde(default)]
    pub finished: bool,
}
