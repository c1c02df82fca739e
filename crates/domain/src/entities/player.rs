//! Player entity and the context state machine.
//!
//! A `Player` is a snapshot: built from a store read at the start of an
//! action, mutated locally, then compared against the snapshot it started from to produce a
//! `PlayerDiff`. Nothing holds a `Player` across actions.
//!
//! # Context transitions
//!
//! ```text
//!            engage / accept_challenge
//!   home  ─────────────────────────────▶  combat ─┐ accept_challenge
//!     ▲  ◀─────────────────────────────     ▲     │ (re-target)
//!     │        flee / death reset           └─────┘
//!     │
//!     │ start_game            finish_game
//!     └──────────▶ text_adventure ──────────▶ home
//! ```
//!
//! Death resets are applied to diffs by the combat orchestrator rather than
//! through these methods, see `PlayerDiff::revive` and `PlayerDiff::send_home`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{CharacterClass, PlayerContext};

/// Hit points given to a freshly created player.
pub const DEFAULT_MAX_HIT_POINTS: i32 = 10;
/// Ex capacity given to a freshly created player.
pub const DEFAULT_MAX_EX: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub character_class: CharacterClass,
    pub max_hit_points: i32,
    pub max_ex: i32,
    /// May dip to zero or below after a resolution, until the death reset.
    pub hit_points: i32,
    pub ex: i32,
    pub status_effects: Vec<String>,
    /// The most recent raw command.
    pub action: String,
    pub enhanced: bool,
    /// Opaque to the core.
    pub auth_token: String,
    pub context: PlayerContext,
    /// Opponent token in combat, game id in a text adventure, empty at home.
    pub target: String,
    /// Commands sent to the current text adventure.
    pub history: Vec<String>,
}

impl Player {
    /// Create a new player at home with full hit points.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            character_class: CharacterClass::default(),
            max_hit_points: DEFAULT_MAX_HIT_POINTS,
            max_ex: DEFAULT_MAX_EX,
            hit_points: DEFAULT_MAX_HIT_POINTS,
            ex: 0,
            status_effects: Vec::new(),
            action: String::new(),
            enhanced: false,
            auth_token: String::new(),
            context: PlayerContext::Home,
            target: String::new(),
            history: Vec::new(),
        }
    }

    /// Set max and current hit points together.
    pub fn with_max_hit_points(mut self, max_hit_points: i32) -> Self {
        self.max_hit_points = max_hit_points;
        self.hit_points = max_hit_points;
        self
    }

    /// Check the numeric invariants a stored record must satisfy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_hit_points <= 0 {
            return Err(DomainError::validation(format!(
                "{}: max_hit_points must be positive, got {}",
                self.name, self.max_hit_points
            )));
        }
        if self.max_ex < 0 || self.ex < 0 {
            return Err(DomainError::validation(format!(
                "{}: ex values must not be negative (ex={}, max_ex={})",
                self.name, self.ex, self.max_ex
            )));
        }
        Ok(())
    }

    pub fn is_dead(&self) -> bool {
        self.hit_points <= 0
    }

    // =========================================================================
    // Context transitions
    // =========================================================================

    /// home → combat for the player starting the fight.
    pub fn engage(&mut self, opponent_token: &str) -> Result<(), DomainError> {
        if self.context != PlayerContext::Home {
            return Err(DomainError::invalid_transition(self.context, "start combat"));
        }
        self.context = PlayerContext::Combat;
        self.target = opponent_token.to_string();
        Ok(())
    }

    /// The opponent's side of `engage`.
    ///
    /// An opponent already in combat is re-targeted at the challenger. The
    /// last writer wins if two challengers overlap.
    pub fn accept_challenge(&mut self, challenger_token: &str) -> Result<(), DomainError> {
        match self.context {
            PlayerContext::Home | PlayerContext::Combat => {
                self.context = PlayerContext::Combat;
                self.target = challenger_token.to_string();
                Ok(())
            }
            PlayerContext::TextAdventure => Err(DomainError::invalid_transition(
                self.context,
                "be challenged",
            )),
        }
    }

    /// combat → home. Clears the opponent.
    pub fn flee(&mut self) -> Result<(), DomainError> {
        if self.context != PlayerContext::Combat {
            return Err(DomainError::invalid_transition(self.context, "flee"));
        }
        self.context = PlayerContext::Home;
        self.target.clear();
        Ok(())
    }

    /// home → text_adventure. Starts the game with an empty history.
    pub fn start_game(&mut self, game_id: &str) -> Result<(), DomainError> {
        if self.context != PlayerContext::Home {
            return Err(DomainError::invalid_transition(self.context, "start a game"));
        }
        self.context = PlayerContext::TextAdventure;
        self.target = game_id.to_string();
        self.history.clear();
        Ok(())
    }

    /// Append a command to the running game's history (text_adventure self-loop).
    pub fn record_command(&mut self, command: &str) -> Result<(), DomainError> {
        if self.context != PlayerContext::TextAdventure {
            return Err(DomainError::invalid_transition(self.context, "send a game command"));
        }
        self.history.push(command.to_string());
        Ok(())
    }

    /// text_adventure → home, once the interpreter reports the game is over.
    pub fn finish_game(&mut self) -> Result<(), DomainError> {
        if self.context != PlayerContext::TextAdventure {
            return Err(DomainError::invalid_transition(self.context, "finish a game"));
        }
        self.context = PlayerContext::Home;
        self.target.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_home_and_healthy() {
        let player = Player::new("truckthunders").with_max_hit_points(12);

        assert_eq!(player.context, PlayerContext::Home);
        assert_eq!(player.hit_points, 12);
        assert_eq!(player.ex, 0);
        assert!(player.target.is_empty());
        assert!(player.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_max_hit_points() {
        let mut player = Player::new("ghost");
        player.max_hit_points = 0;

        assert!(player.validate().is_err());
    }

    #[test]
    fn engage_then_flee_round_trips_to_home() {
        let mut player = Player::new("truckthunders");

        player.engage("target_hash").expect("home → combat");
        assert_eq!(player.context, PlayerContext::Combat);
        assert_eq!(player.target, "target_hash");

        player.flee().expect("combat → home");
        assert_eq!(player.context, PlayerContext::Home);
        assert!(player.target.is_empty());
    }

    #[test]
    fn cannot_engage_from_combat_or_flee_from_home() {
        let mut player = Player::new("truckthunders");
        assert!(player.flee().is_err());

        player.engage("a").expect("home → combat");
        let err = player.engage("b").expect_err("combat → combat via engage");
        assert!(err.is_invalid_transition());
        assert_eq!(player.target, "a");
    }

    #[test]
    fn accept_challenge_retargets_but_refuses_players_in_games() {
        let mut dummy = Player::new("Target Dummy");
        dummy.accept_challenge("first").expect("home → combat");
        dummy.accept_challenge("second").expect("combat → combat");
        assert_eq!(dummy.target, "second");

        let mut gamer = Player::new("gamer");
        gamer.start_game("zork1").expect("home → text_adventure");
        assert!(gamer.accept_challenge("first").is_err());
        assert_eq!(gamer.target, "zork1");
    }

    #[test]
    fn start_game_clears_history_and_finish_returns_home() {
        let mut player = Player::new("truckthunders");
        player.history = vec!["stale".to_string()];

        player.start_game("zork2").expect("home → text_adventure");
        assert!(player.history.is_empty());
        assert_eq!(player.target, "zork2");

        player.record_command("look").expect("self-loop");
        assert_eq!(player.history, vec!["look".to_string()]);

        player.finish_game().expect("text_adventure → home");
        assert_eq!(player.context, PlayerContext::Home);
        assert!(player.target.is_empty());
    }

    #[test]
    fn history_only_grows_inside_a_game() {
        let mut player = Player::new("truckthunders");
        assert!(player.record_command("look").is_err());
        assert!(player.history.is_empty());
    }

    #[test]
    fn deserializes_the_stored_field_names() {
        let json = r#"{
            "name": "truckthunders",
            "character_class": "dreamer",
            "max_hit_points": 10,
            "max_ex": 10,
            "hit_points": 4,
            "ex": 2,
            "status_effects": ["stunned"],
            "action": "attack",
            "enhanced": false,
            "auth_token": "abc",
            "context": "combat",
            "target": "target_hash",
            "history": []
        }"#;

        let player: Player = serde_json::from_str(json).expect("valid player");
        assert_eq!(player.context, PlayerContext::Combat);
        assert_eq!(player.status_effects, vec!["stunned".to_string()]);
    }
}
