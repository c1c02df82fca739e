//! Text adventure interpreter adapters.

use async_trait::async_trait;
use reqwest::Client;

use operator_shared::{InterpreterReply, InterpreterRequest};

use crate::infrastructure::ports::{GameTurn, GameTurnReply, InterpreterError, InterpreterPort};

/// Remote interpreter reached over HTTP.
#[derive(Clone)]
pub struct HttpInterpreter {
    client: Client,
    url: String,
}

impl HttpInterpreter {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl InterpreterPort for HttpInterpreter {
    async fn play(&self, turn: GameTurn) -> Result<GameTurnReply, InterpreterError> {
        let request = InterpreterRequest {
            game: turn.game,
            history: turn.history,
            command: turn.command,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InterpreterError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| InterpreterError::RequestFailed(e.to_string()))?;
            return Err(InterpreterError::RequestFailed(format!("{status}: {error_text}")));
        }

        let reply: InterpreterReply = response
            .json()
            .await
            .map_err(|e| InterpreterError::InvalidResponse(e.to_string()))?;

        Ok(GameTurnReply {
            messages: reply.messages,
            finished: reply.finished,
        })
    }
}

/// Stand-in used when no interpreter is configured.
///
/// `quit` ends the game; anything else reports that the console is dark.
#[derive(Debug, Clone, Default)]
pub struct OfflineInterpreter;

impl OfflineInterpreter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterpreterPort for OfflineInterpreter {
    async fn play(&self, turn: GameTurn) -> Result<GameTurnReply, InterpreterError> {
        if turn.command.trim() == "quit" {
            return Ok(GameTurnReply {
                messages: vec![format!("You switch off {}.", turn.game)],
                finished: true,
            });
        }

        Ok(GameTurnReply {
            messages: vec![format!(
                "The screen for {} flickers but stays dark. Type quit to stop playing.",
                turn.game
            )],
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(command: &str) -> GameTurn {
        GameTurn {
            game: "zork1".to_string(),
            history: vec![command.to_string()],
            command: command.to_string(),
        }
    }

    #[tokio::test]
    async fn offline_interpreter_finishes_on_quit() {
        let reply = OfflineInterpreter::new().play(turn("quit")).await.expect("reply");

        assert!(reply.finished);
        assert_eq!(reply.messages, vec!["You switch off zork1.".to_string()]);
    }

    #[tokio::test]
    async fn offline_interpreter_keeps_other_commands_in_game() {
        let reply = OfflineInterpreter::new().play(turn("look")).await.expect("reply");

        assert!(!reply.finished);
        assert!(reply.messages[0].contains("zork1"));
    }
}
