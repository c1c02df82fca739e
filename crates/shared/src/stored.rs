//! Stored player records.
//!
//! The store keeps `status_effects` as JSON text, but older records and the
//! combat resolver hand back a plain list. `StoredPlayer` accepts either and
//! is the only way a wire payload becomes a `Player`.

use serde::{Deserialize, Serialize};

use operator_domain::{
    decode_status_effects, encode_status_effects, CharacterClass, Player, PlayerContext,
};

use crate::error::WireError;

/// `status_effects` as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusEffectsField {
    List(Vec<String>),
    Encoded(String),
}

impl StatusEffectsField {
    pub fn decode(self) -> Vec<String> {
        match self {
            Self::List(effects) => effects,
            Self::Encoded(raw) => {
                tracing::debug!(raw = %raw, "Decoding text-encoded status_effects");
                decode_status_effects(&raw)
            }
        }
    }
}

impl Default for StatusEffectsField {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub name: String,
    #[serde(default)]
    pub character_class: CharacterClass,
    pub max_hit_points: i32,
    #[serde(default)]
    pub max_ex: i32,
    pub hit_points: i32,
    #[serde(default)]
    pub ex: i32,
    #[serde(default)]
    pub status_effects: StatusEffectsField,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub enhanced: bool,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub context: PlayerContext,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub history: Vec<String>,
}

impl StoredPlayer {
    /// Parse a stored record from JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self, WireError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build the record the store persists, with `status_effects` as text.
    pub fn encoded(player: &Player) -> Self {
        Self {
            status_effects: StatusEffectsField::Encoded(encode_status_effects(
                &player.status_effects,
            )),
            ..Self::from(player.clone())
        }
    }
}

impl TryFrom<StoredPlayer> for Player {
    type Error = WireError;

    fn try_from(stored: StoredPlayer) -> Result<Self, Self::Error> {
        let player = Player {
            name: stored.name,
            character_class: stored.character_class,
            max_hit_points: stored.max_hit_points,
            max_ex: stored.max_ex,
            hit_points: stored.hit_points,
            ex: stored.ex,
            status_effects: stored.status_effects.decode(),
            action: stored.action,
            enhanced: stored.enhanced,
            auth_token: stored.auth_token,
            context: stored.context,
            target: stored.target,
            history: stored.history,
        };
        player.validate()?;
        Ok(player)
    }
}

impl From<Player> for StoredPlayer {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            character_class: player.character_class,
            max_hit_points: player.max_hit_points,
            max_ex: player.max_ex,
            hit_points: player.hit_points,
            ex: player.ex,
            status_effects: StatusEffectsField::List(player.status_effects),
            action: player.action,
            enhanced: player.enhanced,
            auth_token: player.auth_token,
            context: player.context,
            target: player.target,
            history: player.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(status_effects: serde_json::Value) -> serde_json::Value {
        json!({
            "name": "Target Dummy",
            "character_class": "dreamer",
            "max_hit_points": 20,
            "max_ex": 5,
            "hit_points": 14,
            "ex": 1,
            "status_effects": status_effects,
            "action": "block",
            "enhanced": false,
            "auth_token": "",
            "context": "combat",
            "target": "truckthunders",
            "history": []
        })
    }

    #[test]
    fn text_encoded_status_effects_decode_to_a_sequence() {
        let stored = StoredPlayer::from_json(record(json!("[\"stunned\"]"))).expect("parse");
        let player = Player::try_from(stored).expect("valid");

        assert_eq!(player.status_effects, vec!["stunned".to_string()]);
    }

    #[test]
    fn list_status_effects_pass_through() {
        let stored =
            StoredPlayer::from_json(record(json!(["stunned", "burning"]))).expect("parse");
        let player = Player::try_from(stored).expect("valid");

        assert_eq!(
            player.status_effects,
            vec!["stunned".to_string(), "burning".to_string()]
        );
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let stored = StoredPlayer::from_json(json!({
            "name": "newbie",
            "max_hit_points": 10,
            "hit_points": 10
        }))
        .expect("parse");
        let player = Player::try_from(stored).expect("valid");

        assert_eq!(player.context, PlayerContext::Home);
        assert!(player.status_effects.is_empty());
        assert!(player.history.is_empty());
    }

    #[test]
    fn invalid_records_are_rejected() {
        let mut value = record(json!([]));
        value["max_hit_points"] = json!(0);
        let stored = StoredPlayer::from_json(value).expect("parse");

        assert!(matches!(Player::try_from(stored), Err(WireError::Invalid(_))));
    }

    #[test]
    fn encoded_records_store_status_effects_as_text() {
        let mut player = Player::new("truckthunders");
        player.status_effects = vec!["burning".to_string()];

        let stored = StoredPlayer::encoded(&player);

        assert_eq!(
            stored.status_effects,
            StatusEffectsField::Encoded("[\"burning\"]".to_string())
        );
        assert_eq!(Player::try_from(stored).expect("valid"), player);
    }
}
