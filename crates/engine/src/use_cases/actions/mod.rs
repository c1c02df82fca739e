//! Player action use cases.
//!
//! A typed command is routed through the action set for the player's
//! context and dispatched to one of the handlers below. Every handler
//! returns an [`ActionResult`]; only [`PerformAction`] writes to the store.

mod combat;
mod common;
mod home;
mod perform;
mod result;
pub mod router;
mod text_adventure;

pub use combat::CombatActions;
pub use home::HomeActions;
pub use perform::PerformAction;
pub use result::{ActionResult, OpponentUpdate};
pub use router::{build_action_set, route, ActionHandler, ActionLayer, ActionSet, Route};
pub use text_adventure::TextAdventureActions;

use std::sync::Arc;

use operator_domain::DomainError;

use crate::infrastructure::ports::{RepoError, ResolverError};

/// Container for action use cases.
pub struct ActionUseCases {
    pub perform: Arc<PerformAction>,
}

impl ActionUseCases {
    pub fn new(perform: Arc<PerformAction>) -> Self {
        Self { perform }
    }
}

/// Failures that abort an action. Game-logic misses are messages, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Combat resolver error: {0}")]
    Resolver(#[from] ResolverError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
