//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The player store (could swap the in-memory map for a real key-value store)
//! - The combat resolver and the text adventure interpreter (remote services)
//! - The game catalog
//! - Random (for testing)

mod error;
mod external;
mod repos;
mod testing;
pub mod types;

pub use error::{InterpreterError, RepoError, ResolverError};
pub use external::{CombatResolverPort, GameCatalogPort, InterpreterPort};
pub use repos::PlayerRepo;
pub use testing::RandomPort;
pub use types::{CombatResolution, GameTurn, GameTurnReply};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCombatResolverPort, MockGameCatalogPort, MockInterpreterPort};
#[cfg(test)]
pub use repos::MockPlayerRepo;
#[cfg(test)]
pub use testing::MockRandomPort;
