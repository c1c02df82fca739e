//! Store port.

use async_trait::async_trait;
use operator_domain::{Player, PlayerDiff};

use super::error::RepoError;

/// Player records keyed by a stable token.
///
/// There is no conditional write: concurrent diffs to the same record land
/// in arrival order and the last one wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Load a snapshot. Text-encoded `status_effects` are already decoded.
    async fn get(&self, token: &str) -> Result<Option<Player>, RepoError>;

    /// Overwrite the fields present in `diff`.
    async fn apply_diff(&self, token: &str, diff: &PlayerDiff) -> Result<(), RepoError>;
}
