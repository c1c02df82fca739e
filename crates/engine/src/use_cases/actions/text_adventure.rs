//! Commands typed while a text adventure is running.

use std::sync::Arc;

use operator_domain::Player;

use crate::infrastructure::ports::{GameTurn, InterpreterPort};

use super::result::ActionResult;
use super::ActionError;

pub struct TextAdventureActions {
    interpreter: Arc<dyn InterpreterPort>,
}

impl TextAdventureActions {
    pub fn new(interpreter: Arc<dyn InterpreterPort>) -> Self {
        Self { interpreter }
    }

    /// Forward `command` to the interpreter.
    ///
    /// The command joins `history` before the interpreter sees it. When the
    /// interpreter says the game is over the player goes home. If the
    /// interpreter can't be reached the player is told so and nothing changes.
    pub async fn play_turn(
        &self,
        player: Player,
        command: &str,
    ) -> Result<ActionResult, ActionError> {
        let mut playing = player.clone();
        playing.record_command(command)?;

        let turn = GameTurn {
            game: playing.target.clone(),
            history: playing.history.clone(),
            command: command.to_string(),
        };

        let reply = match self.interpreter.play(turn).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    player = %player.name,
                    game = %player.target,
                    error = %e,
                    "Interpreter call failed"
                );
                let message = format!(
                    "The screen for {} fizzles out. Try that again in a moment.",
                    player.target
                );
                return Ok(ActionResult::message_only(player, vec![message]));
            }
        };

        let mut messages = reply.messages;
        if messages.is_empty() {
            messages.push(format!("Nothing happens in {}.", player.target));
        }
        if reply.finished {
            tracing::info!(player = %player.name, game = %player.target, "Text adventure finished");
            playing.finish_game()?;
            messages.push("You are back in your home.".to_string());
        }

        Ok(ActionResult::changed(&player, playing, messages))
    }
}
