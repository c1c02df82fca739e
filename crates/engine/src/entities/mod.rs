//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps a port and provides the building blocks for use cases.

pub mod games;
pub mod players;

pub use games::Games;
pub use players::Players;
