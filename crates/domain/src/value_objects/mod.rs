//! Value objects - Immutable objects defined by their attributes

mod character_class;
mod combat_action;
mod player_context;
mod status_effects;

pub use character_class::CharacterClass;
pub use combat_action::CombatAction;
pub use player_context::PlayerContext;
pub use status_effects::{decode_status_effects, encode_status_effects};
