//! Combat actions: one exchange with the resolver, or running away.

use std::sync::Arc;

use operator_domain::{CombatAction, Player, PlayerDiff};

use crate::entities::Players;
use crate::infrastructure::ports::{CombatResolverPort, RandomPort};

use super::result::{ActionResult, OpponentUpdate};
use super::ActionError;

pub struct CombatActions {
    players: Arc<Players>,
    resolver: Arc<dyn CombatResolverPort>,
    random: Arc<dyn RandomPort>,
}

impl CombatActions {
    pub fn new(
        players: Arc<Players>,
        resolver: Arc<dyn CombatResolverPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            players,
            resolver,
            random,
        }
    }

    /// Resolve one exchange between `player` and their target.
    ///
    /// The resolver decides every number. This only picks the opponent's
    /// move, diffs both sides and applies the death reset: a dead side is
    /// revived at full hit points, and a dead initiator is also sent home.
    /// The opponent is never sent home here.
    ///
    /// # Errors
    /// A resolver failure fails the whole action; nothing is persisted.
    pub async fn resolve_combat(
        &self,
        player: Player,
        combat_action: CombatAction,
    ) -> Result<ActionResult, ActionError> {
        let opponent_token = player.target.clone();
        let Some(opponent) = self.players.get(&opponent_token).await? else {
            tracing::warn!(
                player = %player.name,
                opponent = %opponent_token,
                "Combat target not found"
            );
            return Ok(ActionResult::message_only(
                player,
                vec!["ERROR. This is embarrassing. Could not find opponent in database.".to_string()],
            ));
        };

        let mut initiator = player.clone();
        initiator.action = combat_action.as_str().to_string();

        let mut defender = opponent.clone();
        let reaction = CombatAction::from_index(self.random.gen_index(CombatAction::ALL.len()));
        defender.action = reaction.as_str().to_string();

        tracing::debug!(
            player = %player.name,
            opponent = %opponent.name,
            action = %combat_action,
            reaction = %reaction,
            "Resolving combat exchange"
        );

        let resolution = self.resolver.resolve(initiator, defender).await?;

        let mut player_diff = PlayerDiff::between(&player, &resolution.initiator);
        let mut opponent_diff = PlayerDiff::between(&opponent, &resolution.opponent);
        let mut messages = resolution.messages;

        let initiator_died = resolution.initiator.is_dead();
        let opponent_died = resolution.opponent.is_dead();

        if initiator_died {
            player_diff.revive(player.max_hit_points);
            player_diff.send_home();
            messages.push(format!("{} died! Rezzing. Die less you scrub.", player.name));
        }
        if opponent_died {
            opponent_diff.revive(opponent.max_hit_points);
            messages.push(format!("{} died! Rezzing. Great job winning.", opponent.name));
        }
        if !initiator_died && !opponent_died {
            messages.push(format!(
                "{} has {} HP left.",
                resolution.opponent.name, resolution.opponent.hit_points
            ));
        }

        if initiator_died || opponent_died {
            tracing::info!(
                player = %player.name,
                opponent = %opponent.name,
                initiator_died,
                opponent_died,
                "Combat ended in a death"
            );
        }

        Ok(ActionResult {
            player: player_diff.applied_to(&player),
            player_diff,
            opponent: None,
            messages,
        }
        .with_opponent(OpponentUpdate {
            token: opponent_token,
            player: opponent_diff.applied_to(&opponent),
            diff: opponent_diff,
        }))
    }

    /// combat → home. The opponent is left as is.
    pub fn flee(&self, player: Player) -> Result<ActionResult, ActionError> {
        let mut fled = player.clone();
        fled.flee()?;
        Ok(ActionResult::changed(
            &player,
            fled,
            vec!["You ran away!".to_string()],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        CombatResolution, MockCombatResolverPort, MockPlayerRepo, MockRandomPort, ResolverError,
    };
    use crate::infrastructure::random::FixedRandom;
    use mockall::predicate::eq;
    use operator_domain::PlayerContext;

    const TOKEN: &str = "truckthunders";
    const TARGET: &str = "target_hash";

    fn fighter() -> Player {
        let mut player = Player::new(TOKEN);
        player.engage(TARGET).expect("home → combat");
        player.action = "attack".to_string();
        player
    }

    fn dummy() -> Player {
        let mut dummy = Player::new("Target Dummy").with_max_hit_points(20);
        dummy.accept_challenge(TOKEN).expect("home → combat");
        dummy
    }

    fn repo_with_dummy() -> MockPlayerRepo {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get()
            .returning(|token| Ok((token == TARGET).then(dummy)));
        repo
    }

    /// A resolver that hands back whatever `outcome` does to the two snapshots.
    fn resolver_with<F>(outcome: F) -> MockCombatResolverPort
    where
        F: Fn(&mut Player, &mut Player) + Send + 'static,
    {
        let mut resolver = MockCombatResolverPort::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(move |mut initiator, mut opponent| {
                outcome(&mut initiator, &mut opponent);
                Ok(CombatResolution {
                    initiator,
                    opponent,
                    messages: vec!["Blows are exchanged.".to_string()],
                })
            });
        resolver
    }

    fn combat_actions(repo: MockPlayerRepo, resolver: MockCombatResolverPort) -> CombatActions {
        CombatActions::new(
            Arc::new(Players::new(Arc::new(repo))),
            Arc::new(resolver),
            Arc::new(FixedRandom(2)),
        )
    }

    #[tokio::test]
    async fn surviving_exchange_reports_remaining_hit_points() {
        let actions = combat_actions(
            repo_with_dummy(),
            resolver_with(|_, opponent| opponent.hit_points -= 4),
        );

        let result = actions
            .resolve_combat(fighter(), CombatAction::Attack)
            .await
            .expect("resolved");

        assert!(result.player_diff.is_empty());
        let opponent = result.opponent.expect("opponent update");
        assert_eq!(opponent.diff.hit_points, Some(16));
        assert_eq!(opponent.diff.action.as_deref(), Some("block"));
        assert_eq!(
            result.messages,
            vec![
                "Blows are exchanged.".to_string(),
                "Target Dummy has 16 HP left.".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn opponent_reaction_comes_from_the_random_port() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_index()
            .with(eq(CombatAction::ALL.len()))
            .times(1)
            .returning(|_| 4);
        let mut resolver = MockCombatResolverPort::new();
        resolver
            .expect_resolve()
            .withf(|initiator, opponent| initiator.action == "area" && opponent.action == "dodge")
            .times(1)
            .returning(|initiator, opponent| {
                Ok(CombatResolution {
                    initiator,
                    opponent,
                    messages: Vec::new(),
                })
            });

        let actions = CombatActions::new(
            Arc::new(Players::new(Arc::new(repo_with_dummy()))),
            Arc::new(resolver),
            Arc::new(random),
        );
        let result = actions
            .resolve_combat(fighter(), CombatAction::Area)
            .await
            .expect("resolved");

        let opponent = result.opponent.expect("opponent update");
        assert_eq!(opponent.diff.action.as_deref(), Some("dodge"));
    }

    #[tokio::test]
    async fn initiator_death_revives_and_sends_home() {
        let mut player = fighter();
        player.hit_points = 5;
        player.ex = 3;
        let actions = combat_actions(
            repo_with_dummy(),
            resolver_with(|initiator, _| {
                initiator.hit_points = -3;
                initiator.status_effects = vec!["burning".to_string()];
            }),
        );

        let result = actions
            .resolve_combat(player, CombatAction::Attack)
            .await
            .expect("resolved");

        let diff = &result.player_diff;
        assert_eq!(diff.hit_points, Some(10));
        assert_eq!(diff.ex, Some(0));
        assert_eq!(diff.status_effects, Some(Vec::new()));
        assert_eq!(diff.context, Some(PlayerContext::Home));
        assert_eq!(diff.target.as_deref(), Some(""));
        assert_eq!(result.player.context, PlayerContext::Home);
        assert!(result
            .messages
            .contains(&"truckthunders died! Rezzing. Die less you scrub.".to_string()));

        let opponent = result.opponent.expect("opponent update");
        assert_eq!(opponent.diff.context, None);
        assert_eq!(opponent.player.context, PlayerContext::Combat);
    }

    #[tokio::test]
    async fn opponent_death_does_not_send_the_initiator_home() {
        let actions = combat_actions(
            repo_with_dummy(),
            resolver_with(|_, opponent| opponent.hit_points = 0),
        );

        let result = actions
            .resolve_combat(fighter(), CombatAction::Attack)
            .await
            .expect("resolved");

        assert_eq!(result.player.context, PlayerContext::Combat);
        assert_eq!(result.player_diff.context, None);

        let opponent = result.opponent.expect("opponent update");
        assert_eq!(opponent.diff.hit_points, Some(20));
        assert_eq!(opponent.diff.ex, Some(0));
        assert_eq!(opponent.diff.status_effects, Some(Vec::new()));
        assert_eq!(opponent.diff.context, None);
        assert_eq!(opponent.diff.target, None);
        assert!(result
            .messages
            .contains(&"Target Dummy died! Rezzing. Great job winning.".to_string()));
    }

    #[tokio::test]
    async fn both_dying_applies_both_resets() {
        let actions = combat_actions(
            repo_with_dummy(),
            resolver_with(|initiator, opponent| {
                initiator.hit_points = -1;
                opponent.hit_points = -2;
            }),
        );

        let result = actions
            .resolve_combat(fighter(), CombatAction::Attack)
            .await
            .expect("resolved");

        assert_eq!(result.player_diff.context, Some(PlayerContext::Home));
        assert_eq!(result.player.hit_points, 10);
        let opponent = result.opponent.expect("opponent update");
        assert_eq!(opponent.player.hit_points, 20);
        assert_eq!(opponent.player.context, PlayerContext::Combat);
        assert!(!result.messages.iter().any(|m| m.contains("HP left")));
    }

    #[tokio::test]
    async fn missing_opponent_is_a_message_not_an_error() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        let mut resolver = MockCombatResolverPort::new();
        resolver.expect_resolve().times(0);

        let player = fighter();
        let result = combat_actions(repo, resolver)
            .resolve_combat(player.clone(), CombatAction::Attack)
            .await
            .expect("message");

        assert_eq!(result.player, player);
        assert!(result.player_diff.is_empty());
        assert!(result.opponent.is_none());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].contains("Could not find opponent"));
    }

    #[tokio::test]
    async fn resolver_failure_fails_the_action() {
        let mut resolver = MockCombatResolverPort::new();
        resolver
            .expect_resolve()
            .returning(|_, _| Err(ResolverError::RequestFailed("connection refused".into())));

        let err = combat_actions(repo_with_dummy(), resolver)
            .resolve_combat(fighter(), CombatAction::Attack)
            .await
            .expect_err("hard failure");

        assert!(matches!(err, ActionError::Resolver(_)));
    }

    #[test]
    fn flee_goes_home_and_leaves_the_opponent_alone() {
        let mut resolver = MockCombatResolverPort::new();
        resolver.expect_resolve().times(0);
        let mut repo = MockPlayerRepo::new();
        repo.expect_get().times(0);

        let result = combat_actions(repo, resolver)
            .flee(fighter())
            .expect("flee");

        assert_eq!(result.player.context, PlayerContext::Home);
        assert_eq!(result.player_diff.context, Some(PlayerContext::Home));
        assert_eq!(result.player_diff.target.as_deref(), Some(""));
        assert!(result.opponent.is_none());
        assert_eq!(result.messages, vec!["You ran away!".to_string()]);
    }
}
