//! Domain entities - Core business objects with identity

mod player;

pub use player::{Player, DEFAULT_MAX_EX, DEFAULT_MAX_HIT_POINTS};
