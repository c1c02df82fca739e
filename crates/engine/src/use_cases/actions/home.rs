//! Home actions: pick a text adventure, pick a fight, look around.

use std::sync::Arc;

use operator_domain::{Player, PlayerContext, PlayerDiff};

use crate::entities::{Games, Players};

use super::result::{ActionResult, OpponentUpdate};
use super::ActionError;

pub struct HomeActions {
    players: Arc<Players>,
    games: Arc<Games>,
    /// Opponent used when a fight names nobody.
    practice_target_token: String,
}

impl HomeActions {
    pub fn new(players: Arc<Players>, games: Arc<Games>, practice_target_token: String) -> Self {
        Self {
            players,
            games,
            practice_target_token,
        }
    }

    /// home → combat.
    ///
    /// `argument` names the opponent's token; empty picks the practice
    /// target. Both sides end up in combat targeting each other.
    pub async fn start_combat(
        &self,
        token: &str,
        player: Player,
        argument: &str,
    ) -> Result<ActionResult, ActionError> {
        let opponent_token = if argument.is_empty() {
            self.practice_target_token.as_str()
        } else {
            argument
        };

        if opponent_token == token {
            return Ok(ActionResult::message_only(
                player,
                vec!["You can't fight yourself. Well, you can, but not here.".to_string()],
            ));
        }

        let Some(opponent) = self.players.get(opponent_token).await? else {
            tracing::warn!(player = %token, opponent = %opponent_token, "Opponent not found");
            return Ok(ActionResult::message_only(
                player,
                vec!["ERROR. This is embarrassing. Could not find opponent in database.".to_string()],
            ));
        };

        if opponent.context == PlayerContext::TextAdventure {
            let message = format!(
                "{} is busy playing {}. Try again later.",
                opponent.name, opponent.target
            );
            return Ok(ActionResult::message_only(player, vec![message]));
        }

        let mut engaged = player.clone();
        engaged.engage(opponent_token)?;
        let mut challenged = opponent.clone();
        challenged.accept_challenge(token)?;

        let messages = vec![
            "Starting trouble in your own home? Sounds good to me. Getting you a target to fight."
                .to_string(),
            format!("You're in combat with {}!", opponent.name),
        ];

        tracing::info!(player = %token, opponent = %opponent_token, "Combat started");

        let mut player_diff = PlayerDiff::between(&player, &engaged);
        player_diff.context = Some(PlayerContext::Combat);
        player_diff.target = Some(opponent_token.to_string());

        let mut opponent_diff = PlayerDiff::between(&opponent, &challenged);
        opponent_diff.context = Some(PlayerContext::Combat);
        opponent_diff.target = Some(token.to_string());

        Ok(ActionResult {
            player: engaged,
            player_diff,
            opponent: None,
            messages,
        }
        .with_opponent(OpponentUpdate {
            token: opponent_token.to_string(),
            player: challenged,
            diff: opponent_diff,
        }))
    }

    /// List the catalog. A trailing title (`play zork2`) starts that game instead.
    pub fn which_game(&self, player: Player, argument: &str) -> Result<ActionResult, ActionError> {
        if !argument.is_empty() {
            return self.play_text_adventure(player, argument);
        }
        let messages = vec![
            "Which game would you like to play?".to_string(),
            "You can select from this list by saying, for example: zork2".to_string(),
            "Select from any of the following games:".to_string(),
            self.games.titles().join(", "),
        ];
        Ok(ActionResult::message_only(player, messages))
    }

    /// home → text_adventure for `title`.
    ///
    /// An exact title wins; otherwise the first catalog game containing it.
    pub fn play_text_adventure(
        &self,
        player: Player,
        title: &str,
    ) -> Result<ActionResult, ActionError> {
        let found = if self.games.is_known(title) {
            Some(title.to_string())
        } else {
            self.games.find(title)
        };
        let Some(game) = found else {
            let message = format!(
                "Could not find {title}...Are you sure you typed that correctly? Here's the game list: {}",
                self.games.titles().join(", ")
            );
            return Ok(ActionResult::message_only(player, vec![message]));
        };

        let mut playing = player.clone();
        playing.start_game(&game)?;

        let mut player_diff = PlayerDiff::between(&player, &playing);
        player_diff.history = Some(Vec::new());

        tracing::info!(player = %player.name, game = %game, "Starting text adventure");

        let message = format!(
            "You found {game}! You initialize the program and begin playing. \
             What is your first command? Look is normally a good start. \
             If you want to stop playing {game}, type the word quit"
        );

        Ok(ActionResult {
            player: playing,
            player_diff,
            opponent: None,
            messages: vec![message],
        })
    }

    pub fn describe_home(&self, player: Player) -> ActionResult {
        let messages = vec![
            "You are in your home, a small room apart from the rest of the world.".to_string(),
            "There is a bed, a dresser, and a small hologram which displays the words, 'Say Play a Game to Begin!'".to_string(),
            "There is also a target dummy in one corner.".to_string(),
        ];
        ActionResult::message_only(player, messages)
    }

    pub fn quit_message(&self, player: Player) -> ActionResult {
        ActionResult::message_only(
            player,
            vec![
                "To quit, press the logout button above! If this was a mistake, try looking around or going outside."
                    .to_string(),
            ],
        )
    }
}
