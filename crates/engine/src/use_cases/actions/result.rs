//! The shape every action handler returns.

use operator_domain::{Player, PlayerDiff};

/// The second party touched by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentUpdate {
    /// Store key of the opponent.
    pub token: String,
    pub player: Player,
    pub diff: PlayerDiff,
}

/// Outcome of one action.
///
/// `player_diff` and `opponent.diff` are authoritative for persistence; the
/// snapshots are what the diffs produce when applied to the records read at
/// the start of the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub player: Player,
    pub player_diff: PlayerDiff,
    /// `None` when the action has no second-party effect.
    pub opponent: Option<OpponentUpdate>,
    pub messages: Vec<String>,
}

impl ActionResult {
    /// Nothing changed; just tell the player something.
    pub fn message_only(player: Player, messages: Vec<String>) -> Self {
        Self {
            player,
            player_diff: PlayerDiff::default(),
            opponent: None,
            messages,
        }
    }

    /// The acting player changed from `before` to `after`.
    pub fn changed(before: &Player, after: Player, messages: Vec<String>) -> Self {
        Self {
            player_diff: PlayerDiff::between(before, &after),
            player: after,
            opponent: None,
            messages,
        }
    }

    pub fn with_opponent(mut self, opponent: OpponentUpdate) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn opponent_diff(&self) -> Option<&PlayerDiff> {
        self.opponent.as_ref().map(|o| &o.diff)
    }
}
