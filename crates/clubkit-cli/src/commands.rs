//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Subcommand, ValueEnum};

use clubkit_core::{DEFAULT_LEADERBOARD_LIMIT, LeaderboardKind};

/// Available commands for the bot deployment toolkit.
#[derive(Subcommand)]
pub enum Commands {
    /// Check system dependencies required to run the bot
    CheckDeps,

    /// Show resolved paths for the deploy root
    Paths,

    /// Prepare a deploy root: directories, .env, venv, dependencies, database
    Setup,

    /// Create the bot database and schema
    InitDb,

    /// Inspect and edit the deployment's .env configuration
    Env {
        #[command(subcommand)]
        command: EnvCommand,
    },

    /// Launch the bot
    Start {
        /// Fail instead of copying env.example when .env is missing
        #[arg(long)]
        strict: bool,

        /// Run in the background, tracked by a pid file
        #[arg(short, long)]
        detach: bool,

        /// Skip venv creation and dependency installation
        #[arg(long)]
        skip_install: bool,
    },

    /// Stop a detached bot
    Stop,

    /// Show whether a detached bot is running
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a leaderboard from the bot database
    Top {
        /// Ranking to show
        #[arg(value_enum, default_value_t = TopKind::Voice)]
        kind: TopKind,

        /// Number of entries
        #[arg(short, long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: u32,
    },
}

/// Subcommands for `.env` management.
#[derive(Subcommand)]
pub enum EnvCommand {
    /// Create .env from env.example if it does not exist
    Init,

    /// Print the effective configuration (token redacted)
    Show {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a key in the .env file
    Set {
        /// Variable name, e.g. GUILD_ID
        key: String,
        /// Value to store
        value: String,
    },
}

/// Leaderboard selector for the `top` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopKind {
    /// Rank by voice minutes
    Voice,
    /// Rank by message count
    Messages,
    /// Rank by currency balance
    Balance,
}

impl From<TopKind> for LeaderboardKind {
    fn from(kind: TopKind) -> Self {
        match kind {
            TopKind::Voice => LeaderboardKind::Voice,
            TopKind::Messages => LeaderboardKind::Messages,
            TopKind::Balance => LeaderboardKind::Balance,
        }
    }
}
