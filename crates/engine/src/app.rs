//! Application state and composition.

use std::sync::Arc;

use crate::entities::{Games, Players};
use crate::infrastructure::ports::{
    CombatResolverPort, GameCatalogPort, InterpreterPort, PlayerRepo, RandomPort,
};
use crate::infrastructure::random::SystemRandom;
use crate::use_cases::actions::{
    ActionUseCases, CombatActions, HomeActions, PerformAction, TextAdventureActions,
};

/// Main application state.
///
/// Holds the entity modules and use cases, wired over whichever adapters
/// the caller hands in.
pub struct App {
    pub entities: Entities,
    pub use_cases: UseCases,
}

/// Container for entity modules.
pub struct Entities {
    pub players: Arc<Players>,
    pub games: Arc<Games>,
}

/// Container for all use cases.
pub struct UseCases {
    pub actions: ActionUseCases,
}

/// Adapters the engine runs on.
pub struct Ports {
    pub player_repo: Arc<dyn PlayerRepo>,
    pub resolver: Arc<dyn CombatResolverPort>,
    pub catalog: Arc<dyn GameCatalogPort>,
    pub interpreter: Arc<dyn InterpreterPort>,
}

impl App {
    pub fn new(ports: Ports, practice_target_token: impl Into<String>) -> Self {
        Self::with_random(ports, Arc::new(SystemRandom::new()), practice_target_token)
    }

    /// Build with an explicit random source.
    pub fn with_random(
        ports: Ports,
        random: Arc<dyn RandomPort>,
        practice_target_token: impl Into<String>,
    ) -> Self {
        let players = Arc::new(Players::new(ports.player_repo));
        let games = Arc::new(Games::new(ports.catalog));

        let home = Arc::new(HomeActions::new(
            players.clone(),
            games.clone(),
            practice_target_token.into(),
        ));
        let combat = Arc::new(CombatActions::new(
            players.clone(),
            ports.resolver,
            random,
        ));
        let text_adventure = Arc::new(TextAdventureActions::new(ports.interpreter));
        let perform = Arc::new(PerformAction::new(
            players.clone(),
            games.clone(),
            home,
            combat,
            text_adventure,
        ));

        Self {
            entities: Entities { players, games },
            use_cases: UseCases {
                actions: ActionUseCases::new(perform),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::BundledGameCatalog;
    use crate::infrastructure::interpreter::OfflineInterpreter;
    use crate::infrastructure::memory_store::InMemoryPlayerRepo;
    use crate::infrastructure::ports::MockCombatResolverPort;
    use crate::infrastructure::random::FixedRandom;
    use operator_domain::{Player, PlayerContext};

    #[tokio::test]
    async fn composed_app_runs_a_command_end_to_end() {
        let repo = Arc::new(InMemoryPlayerRepo::new());
        repo.insert("truckthunders", &Player::new("truckthunders"));
        repo.insert("dummy", &Player::new("Target Dummy"));

        let app = App::with_random(
            Ports {
                player_repo: repo,
                resolver: Arc::new(MockCombatResolverPort::new()),
                catalog: Arc::new(BundledGameCatalog::new()),
                interpreter: Arc::new(OfflineInterpreter::new()),
            },
            Arc::new(FixedRandom(0)),
            "dummy",
        );

        let result = app
            .use_cases
            .actions
            .perform
            .execute("truckthunders", "fight")
            .await
            .expect("start combat");

        assert_eq!(result.player.context, PlayerContext::Combat);
        assert_eq!(result.player.target, "dummy");
        let stored = app
            .entities
            .players
            .get("dummy")
            .await
            .expect("read")
            .expect("present");
        assert_eq!(stored.target, "truckthunders");
    }
}
