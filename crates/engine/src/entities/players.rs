//! Player entity operations.

use std::sync::Arc;

use operator_domain::{Player, PlayerDiff};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

/// Player entity operations.
///
/// Reads snapshots and writes diffs. There is no whole-record save: the diff
/// is the only thing that reaches the store.
pub struct Players {
    repo: Arc<dyn PlayerRepo>,
}

impl Players {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, token: &str) -> Result<Option<Player>, RepoError> {
        self.repo.get(token).await
    }

    /// Persist a diff. Empty diffs never reach the store.
    pub async fn save_diff(&self, token: &str, diff: &PlayerDiff) -> Result<(), RepoError> {
        if diff.is_empty() {
            return Ok(());
        }
        tracing::info!(
            token = %token,
            fields = ?diff.changed_fields(),
            "Persisting player diff"
        );
        self.repo.apply_diff(token, diff).await
    }
}
