//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod actions;

pub use actions::{ActionError, ActionResult, ActionUseCases, PerformAction};
