//! Command-line adapter for the bot deployment toolkit.
//!
//! The binary's modules live in a library crate so handler logic is
//! testable without spawning the binary.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, EnvCommand, TopKind};
pub use error::CliError;
pub use parser::Cli;
