//! Bot runner trait definition.
//!
//! This port defines the interface for launching and supervising the bot
//! process. Implementations handle interpreter resolution, virtual
//! environment provisioning, and pid tracking internally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProcessError;

/// Default entry point script, relative to the deploy root.
pub const DEFAULT_ENTRY_POINT: &str = "main.py";

/// Intent-based configuration for a bot launch.
///
/// Deliberately carries no paths: the deploy root and entry point are fixed
/// when the runner is constructed, so a launch can never spawn from one
/// root while tracking its pid under another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BotLaunchConfig {
    /// Create the venv and install dependencies before launching.
    pub provision_env: bool,
}

impl BotLaunchConfig {
    /// Launch config with full environment provisioning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provision_env: true,
        }
    }

    /// Skip venv creation and dependency installation.
    #[must_use]
    pub fn without_provisioning(mut self) -> Self {
        self.provision_env = false;
        self
    }
}

impl Default for BotLaunchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running (detached) bot process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotHandle {
    /// Process ID.
    pub pid: u32,
    /// Unix timestamp (seconds) when the bot was started.
    pub started_at: u64,
}

/// Supervisor for the bot process.
///
/// # Design Rules
///
/// - Express **intent**, not implementation detail
/// - No CLI concerns in signatures
/// - Must support a mock runner for handler tests
#[async_trait]
pub trait BotRunner: Send + Sync {
    /// Run the bot in the foreground and wait for it to exit.
    ///
    /// Returns the bot's exit code so the caller can propagate it.
    async fn run_foreground(&self, config: &BotLaunchConfig) -> Result<i32, ProcessError>;

    /// Start the bot detached, recording a pid file.
    ///
    /// Returns `Err(ProcessError::AlreadyRunning)` if a live bot is already
    /// tracked for this deploy root.
    async fn start_detached(&self, config: &BotLaunchConfig) -> Result<BotHandle, ProcessError>;

    /// Stop a detached bot, SIGTERM first then SIGKILL.
    async fn stop(&self) -> Result<(), ProcessError>;

    /// Current detached-bot status, `None` when not running.
    ///
    /// Stale pid files (dead or reused pids) are cleaned up as a side
    /// effect.
    async fn status(&self) -> Result<Option<BotHandle>, ProcessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_config_defaults_to_provisioning() {
        assert!(BotLaunchConfig::new().provision_env);
        assert!(!BotLaunchConfig::new().without_provisioning().provision_env);
    }
}
