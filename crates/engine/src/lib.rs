//! Operator Engine library.
//!
//! Turns one typed command from one player into a persisted outcome.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping the store and the game catalog
//! - `use_cases/` - Action routing and the per-context handlers
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
