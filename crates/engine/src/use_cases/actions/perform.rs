//! Perform action use case - the single entry point for a typed command.

use std::sync::Arc;

use operator_domain::{CombatAction, PlayerDiff};

use crate::entities::{Games, Players};

use super::common;
use super::result::ActionResult;
use super::router::{build_action_set, route, ActionHandler};
use super::{ActionError, CombatActions, HomeActions, TextAdventureActions};

/// Runs one command for one player and persists the outcome.
pub struct PerformAction {
    players: Arc<Players>,
    games: Arc<Games>,
    home: Arc<HomeActions>,
    combat: Arc<CombatActions>,
    text_adventure: Arc<TextAdventureActions>,
}

impl PerformAction {
    pub fn new(
        players: Arc<Players>,
        games: Arc<Games>,
        home: Arc<HomeActions>,
        combat: Arc<CombatActions>,
        text_adventure: Arc<TextAdventureActions>,
    ) -> Self {
        Self {
            players,
            games,
            home,
            combat,
            text_adventure,
        }
    }

    /// Perform `action_text` for the player stored under `token`.
    ///
    /// # Steps
    /// 1. Load the player snapshot
    /// 2. Record the command in `action`
    /// 3. Route it through the action set for the player's context
    /// 4. Run the handler
    /// 5. Persist the opponent's diff, then the player's
    ///
    /// `action` always ends up as the trimmed command text, whatever the
    /// handler's own diff says about it.
    ///
    /// # Errors
    /// * `ActionError::PlayerNotFound` - no record under `token`
    /// * `ActionError::Resolver` - the combat resolver failed; nothing was written
    /// * `ActionError::Repo` - a store read or write failed; a failed
    ///   opponent write leaves both records untouched
    pub async fn execute(&self, token: &str, action_text: &str) -> Result<ActionResult, ActionError> {
        let loaded = self
            .players
            .get(token)
            .await?
            .ok_or_else(|| ActionError::PlayerNotFound(token.to_string()))?;

        let text = action_text.trim();
        let mut player = loaded.clone();
        player.action = text.to_string();

        let titles = self.games.titles();
        let set = build_action_set(player.context, &titles);
        let routed = route(text, &set);

        tracing::debug!(
            token = %token,
            context = %player.context,
            key = ?routed.key,
            handler = ?routed.handler,
            "Routed action"
        );

        let key = routed.key.as_deref().unwrap_or_default();
        let argument = routed.argument.as_str();

        let mut result = match routed.handler {
            ActionHandler::GetInfo => common::get_info(player),
            ActionHandler::ClassOptions => common::class_options(player),
            ActionHandler::ChangeClass => common::change_class(player, argument),
            ActionHandler::WhichGame => self.home.which_game(player, argument)?,
            ActionHandler::PlayTextAdventure => self.home.play_text_adventure(player, key)?,
            ActionHandler::StartCombat => self.home.start_combat(token, player, argument).await?,
            ActionHandler::DescribeHome => self.home.describe_home(player),
            ActionHandler::QuitMessage => self.home.quit_message(player),
            ActionHandler::ResolveCombat => match combat_action_for(key) {
                Some(combat_action) => self.combat.resolve_combat(player, combat_action).await?,
                None => common::unrecognized(player, text, &set),
            },
            ActionHandler::Flee => self.combat.flee(player)?,
            ActionHandler::GameCommand => self.text_adventure.play_turn(player, text).await?,
            ActionHandler::Unrecognized => common::unrecognized(player, text, &set),
        };

        // A handler may report its own `action`; the stored one is what was typed.
        result.player_diff.action = None;
        if loaded.action != text {
            result.player_diff = result.player_diff.merge(PlayerDiff::action(text));
        }
        result.player.action = text.to_string();

        if let Some(opponent) = &result.opponent {
            self.players.save_diff(&opponent.token, &opponent.diff).await?;
        }
        if let Err(e) = self.players.save_diff(token, &result.player_diff).await {
            if let Some(opponent) = &result.opponent {
                tracing::error!(
                    token = %token,
                    opponent = %opponent.token,
                    error = %e,
                    "Opponent diff saved but player diff failed"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            token = %token,
            action = %text,
            context = %result.player.context,
            messages = result.messages.len(),
            "Action performed"
        );

        Ok(result)
    }
}

fn combat_action_for(key: &str) -> Option<CombatAction> {
    CombatAction::ALL
        .into_iter()
        .find(|combat_action| combat_action.as_str() == key)
}
