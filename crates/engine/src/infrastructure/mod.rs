//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod catalog;
pub mod combat_resolver;
pub mod config;
pub mod interpreter;
pub mod memory_store;
pub mod ports;
pub mod random;
