//! `SQLite` repository implementation for the bot's member-stats store.
//!
//! The bot keeps one table, `users`, with cumulative counters per member.
//! This crate owns schema setup and the `StatsRepository` implementation;
//! everything above it talks through the trait from `clubkit-core`.

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StatsFactory;

// Re-export repository implementation
pub use repositories::SqliteStatsRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
