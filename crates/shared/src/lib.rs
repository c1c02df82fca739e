//! Operator Shared - wire records exchanged with the engine's collaborators.
//!
//! - `stored` - player records as the store keeps them
//! - `combat` - combat resolver request/reply
//! - `interpreter` - text adventure interpreter request/reply
//!
//! No business logic lives here; records only convert into domain snapshots.

pub mod combat;
pub mod error;
pub mod interpreter;
pub mod stored;

pub use combat::{CombatInvocation, CombatReply, CombatRequest, CombatResult, EnvelopeBody};
pub use error::WireError;
pub use interpreter::{InterpreterReply, InterpreterRequest};
pub use stored::{StatusEffectsField, StoredPlayer};
