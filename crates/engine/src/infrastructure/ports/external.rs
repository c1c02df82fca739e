//! External service port traits (combat resolver, game catalog, interpreter).

use async_trait::async_trait;
use operator_domain::Player;

use super::error::{InterpreterError, ResolverError};
use super::types::{CombatResolution, GameTurn, GameTurnReply};

/// The remote authority on combat outcomes.
///
/// Called once per exchange and awaited to completion; the engine never
/// persists anything from a combat that did not resolve.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CombatResolverPort: Send + Sync {
    async fn resolve(
        &self,
        initiator: Player,
        opponent: Player,
    ) -> Result<CombatResolution, ResolverError>;
}

/// Playable text adventures, as interpreter story file names (`zork2.z5`).
#[cfg_attr(test, mockall::automock)]
pub trait GameCatalogPort: Send + Sync {
    /// Story files in catalog order.
    fn games(&self) -> Vec<String>;
}

/// Runs text adventure turns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterpreterPort: Send + Sync {
    async fn play(&self, turn: GameTurn) -> Result<GameTurnReply, InterpreterError>;
}
