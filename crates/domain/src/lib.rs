//! Operator Domain - the player model and its rules.
//!
//! - `entities` - the `Player` snapshot and its context state machine
//! - `value_objects` - contexts, classes, combat moves, status effect decoding
//! - `diff` - field diffs, the unit of persistence

pub mod diff;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use diff::PlayerDiff;
pub use entities::{Player, DEFAULT_MAX_EX, DEFAULT_MAX_HIT_POINTS};
pub use error::DomainError;
pub use value_objects::{
    decode_status_effects, encode_status_effects, CharacterClass, CombatAction, PlayerContext,
};
