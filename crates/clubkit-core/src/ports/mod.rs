//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No process/filesystem implementation details
//! - Intent-based methods for the bot runner (not implementation-leaking)

pub mod bot_runner;
pub mod stats_repository;
pub mod system_probe;

use thiserror::Error;

pub use bot_runner::{BotHandle, BotLaunchConfig, BotRunner, DEFAULT_ENTRY_POINT};
pub use stats_repository::{DEFAULT_LEADERBOARD_LIMIT, StatsRepository};
pub use system_probe::{Dependency, DependencyStatus, SystemProbePort};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (sqlx
/// errors) and provides a clean interface for callers to handle storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested member was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An operation would violate a balance invariant.
    #[error("Insufficient funds: user {user_id} has {balance}, needs {required}")]
    InsufficientFunds {
        user_id: i64,
        balance: i64,
        required: i64,
    },

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Domain-specific errors for bot process operations.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No usable Python interpreter was found.
    #[error("No Python interpreter found: {0}")]
    InterpreterMissing(String),

    /// Failed to start the bot process.
    #[error("Failed to start: {0}")]
    StartFailed(String),

    /// Failed to stop the bot process.
    #[error("Failed to stop: {0}")]
    StopFailed(String),

    /// The bot is not running.
    #[error("Bot is not running")]
    NotRunning,

    /// The bot is already running.
    #[error("Bot already running with PID {0}")]
    AlreadyRunning(u32),

    /// Environment provisioning (venv, dependency install) failed.
    #[error("Environment setup failed: {0}")]
    SetupFailed(String),

    /// Internal process error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own surfaces (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Process operation failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Path resolution or filesystem layout error.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
