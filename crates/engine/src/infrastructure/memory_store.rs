//! In-memory player store.
//!
//! Records seeded with [`InMemoryPlayerRepo::insert`] keep `status_effects`
//! as JSON text, the way the persistent store does, so the decoding path runs
//! on every read. Diff writes store the decoded sequence form.

use async_trait::async_trait;
use dashmap::DashMap;

use operator_domain::{Player, PlayerDiff};
use operator_shared::StoredPlayer;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

#[derive(Debug, Default)]
pub struct InMemoryPlayerRepo {
    records: DashMap<String, StoredPlayer>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a player under `token`, replacing any existing record.
    pub fn insert(&self, token: impl Into<String>, player: &Player) {
        self.records
            .insert(token.into(), StoredPlayer::encoded(player));
    }

    /// The raw record under `token`.
    pub fn record(&self, token: &str) -> Option<StoredPlayer> {
        self.records.get(token).map(|entry| entry.value().clone())
    }
}

fn decode(token: &str, record: StoredPlayer) -> Result<Player, RepoError> {
    Player::try_from(record)
        .map_err(|e| RepoError::unreadable(token, e))
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn get(&self, token: &str) -> Result<Option<Player>, RepoError> {
        match self.record(token) {
            Some(record) => decode(token, record).map(Some),
            None => Ok(None),
        }
    }

    async fn apply_diff(&self, token: &str, diff: &PlayerDiff) -> Result<(), RepoError> {
        let mut entry = self
            .records
            .get_mut(token)
            .ok_or_else(|| RepoError::MissingRecord(token.to_string()))?;

        let mut player = decode(token, entry.value().clone())?;
        diff.apply(&mut player);
        *entry.value_mut() = StoredPlayer::from(player);

        tracing::debug!(
            token = %token,
            fields = ?diff.changed_fields(),
            "Applied player diff"
        );
        Ok(())
    }
}
