//! Combat resolver wire format.
//!
//! Request: `{"body": {"Player1": {..}, "Player2": {..}}}`.
//! Reply: either the bare result `{"Player1", "Player2", "message"}` or a
//! function-invocation envelope `{"statusCode": 200, "body": "<result as JSON text>"}`.

use serde::{Deserialize, Serialize};

use operator_domain::Player;

use crate::error::WireError;
use crate::stored::StoredPlayer;

/// Both combatants' full state. `Player1` is always the initiator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRequest {
    #[serde(rename = "Player1")]
    pub player1: Player,
    #[serde(rename = "Player2")]
    pub player2: Player,
}

/// The invocation payload wrapping a `CombatRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatInvocation {
    pub body: CombatRequest,
}

impl CombatInvocation {
    pub fn new(initiator: Player, opponent: Player) -> Self {
        Self {
            body: CombatRequest {
                player1: initiator,
                player2: opponent,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatResult {
    #[serde(rename = "Player1")]
    pub player1: StoredPlayer,
    #[serde(rename = "Player2")]
    pub player2: StoredPlayer,
    #[serde(default)]
    pub message: Vec<String>,
}

impl CombatResult {
    /// Decode both combatants into domain snapshots.
    pub fn into_players(self) -> Result<(Player, Player, Vec<String>), WireError> {
        let initiator = Player::try_from(self.player1)?;
        let opponent = Player::try_from(self.player2)?;
        Ok((initiator, opponent, self.message))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeBody {
    Text(String),
    Object(CombatResult),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CombatReply {
    Envelope {
        #[serde(rename = "statusCode")]
        status_code: u16,
        body: EnvelopeBody,
    },
    Direct(CombatResult),
}

impl CombatReply {
    pub fn parse(bytes: &[u8]) -> Result<Self, WireError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Unwrap the envelope, if any. Non-2xx envelope statuses are errors.
    pub fn into_result(self) -> Result<CombatResult, WireError> {
        match self {
            Self::Direct(result) => Ok(result),
            Self::Envelope { status_code, body } => {
                if !(200..300).contains(&status_code) {
                    let body = match body {
                        EnvelopeBody::Text(text) => text,
                        EnvelopeBody::Object(_) => String::from("<combat result>"),
                    };
                    return Err(WireError::RemoteStatus { status_code, body });
                }
                match body {
                    EnvelopeBody::Text(text) => Ok(serde_json::from_str(&text)?),
                    EnvelopeBody::Object(result) => Ok(result),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use operator_domain::PlayerContext;
    use serde_json::json;

    fn result_json() -> serde_json::Value {
        json!({
            "Player1": {
                "name": "truckthunders", "character_class": "dreamer",
                "max_hit_points": 10, "max_ex": 10, "hit_points": 7, "ex": 2,
                "status_effects": [], "action": "attack", "enhanced": false,
                "auth_token": "", "context": "combat", "target": "target_hash", "history": []
            },
            "Player2": {
                "name": "Target Dummy", "character_class": "dreamer",
                "max_hit_points": 20, "max_ex": 0, "hit_points": 15, "ex": 0,
                "status_effects": "[\"stunned\"]", "action": "block", "enhanced": false,
                "auth_token": "", "context": "combat", "target": "truckthunders", "history": []
            },
            "message": ["truckthunders attacks!", "Target Dummy blocks."]
        })
    }

    #[test]
    fn request_uses_numbered_player_keys_inside_body() {
        let invocation =
            CombatInvocation::new(Player::new("truckthunders"), Player::new("Target Dummy"));
        let value = serde_json::to_value(&invocation).expect("serialize");

        assert_eq!(value["body"]["Player1"]["name"], "truckthunders");
        assert_eq!(value["body"]["Player2"]["name"], "Target Dummy");
        assert_eq!(value["body"]["Player1"]["status_effects"], json!([]));
    }

    #[test]
    fn parses_a_bare_result() {
        let bytes = serde_json::to_vec(&result_json()).expect("bytes");
        let result = CombatReply::parse(&bytes)
            .and_then(CombatReply::into_result)
            .expect("direct reply");
        let (initiator, opponent, messages) = result.into_players().expect("players");

        assert_eq!(initiator.hit_points, 7);
        assert_eq!(opponent.status_effects, vec!["stunned".to_string()]);
        assert_eq!(opponent.context, PlayerContext::Combat);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn unwraps_an_envelope_with_text_body() {
        let envelope = json!({
            "statusCode": 200,
            "body": result_json().to_string(),
            "headers": { "Access-Control-Allow-Origin": "*" }
        });
        let bytes = serde_json::to_vec(&envelope).expect("bytes");

        let result = CombatReply::parse(&bytes)
            .and_then(CombatReply::into_result)
            .expect("enveloped reply");

        assert_eq!(result.message[0], "truckthunders attacks!");
    }

    #[test]
    fn failing_envelope_status_is_an_error() {
        let envelope = json!({ "statusCode": 500, "body": "resolver exploded" });
        let bytes = serde_json::to_vec(&envelope).expect("bytes");

        let err = CombatReply::parse(&bytes)
            .and_then(CombatReply::into_result)
            .expect_err("500 envelope");

        assert!(matches!(err, WireError::RemoteStatus { status_code: 500, .. }));
    }
}
