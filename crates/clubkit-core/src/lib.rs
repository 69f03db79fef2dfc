//! Core domain types and port definitions for clubkit.
//!
//! This crate contains the pure domain of the deployment toolkit: the bot's
//! environment-backed settings, the member-stats records stored in the bot
//! database, and the trait seams (`ports`) that the db, runtime, and CLI
//! crates implement. No sqlx, no process spawning, no terminal I/O here.

pub mod domain;
pub mod paths;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{LeaderboardEntry, LeaderboardKind, MemberStats};
pub use ports::{
    BotHandle, BotLaunchConfig, BotRunner, CoreError, DEFAULT_ENTRY_POINT,
    DEFAULT_LEADERBOARD_LIMIT, Dependency, DependencyStatus, ProcessError, RepositoryError,
    StatsRepository, SystemProbePort,
};
pub use settings::{BotSettings, SettingsError, validate_settings};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, EnvProvision, PathError, ResolvedPaths, database_path,
    ensure_directory, env_example_path, env_file_path, persist_env_value, pid_file_path,
    provision_env_file, requirements_manifest, resolve_deploy_root, scaffold_workspace,
    venv_dir, verify_writable,
};
