//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Deploy-root resolution and `.env` loading
//! - Database pool and repository (via clubkit-db)
//! - Bot runner (via clubkit-runtime)
//!
//! Command handlers receive the composed `CliContext` and delegate to it.
//! The database is opened lazily so commands like `check-deps` never touch
//! (or create) the database file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clubkit_core::paths::resolve_deploy_root;
use clubkit_core::{BotRunner, BotSettings, DEFAULT_ENTRY_POINT, StatsRepository, database_path};
use clubkit_db::{StatsFactory, setup_database};
use clubkit_runtime::LocalBotRunner;
use tracing::debug;

use crate::error::CliError;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Resolved deploy root all paths hang off.
    pub deploy_root: PathBuf,
    /// Settings loaded from the deploy root's `.env` and the environment.
    pub settings: BotSettings,
    /// Bot process supervisor.
    pub runner: Arc<dyn BotRunner>,
}

impl CliContext {
    /// Access the deploy root.
    #[must_use]
    pub fn deploy_root(&self) -> &Path {
        &self.deploy_root
    }

    /// The resolved database file for this deployment.
    #[must_use]
    pub fn database_file(&self) -> PathBuf {
        database_path(&self.deploy_root, &self.settings.database_path)
    }

    /// Open the bot database, creating file and schema when missing.
    ///
    /// Deliberately lazy: only handlers that read or write stats call this.
    pub async fn stats_repository(&self) -> Result<Arc<dyn StatsRepository>, CliError> {
        let pool = setup_database(&self.database_file()).await?;
        Ok(StatsFactory::stats_repository(pool))
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves the deploy root (--dir flag, then $CLUBKIT_HOME, then cwd)
/// 2. Loads the deploy root's `.env` into the process environment
/// 3. Reads the bot settings from the environment
/// 4. Creates the bot runner
pub fn bootstrap(dir_override: Option<&Path>) -> Result<CliContext, CliError> {
    let deploy_root = resolve_deploy_root(dir_override)?;

    // Missing .env is fine at this stage; `start` enforces its own policy
    let env_file = deploy_root.join(".env");
    if dotenvy::from_path(&env_file).is_ok() {
        debug!(path = %env_file.display(), "Loaded .env");
    }

    let settings = BotSettings::from_env();

    let runner: Arc<dyn BotRunner> = Arc::new(LocalBotRunner::new(
        deploy_root.clone(),
        DEFAULT_ENTRY_POINT.to_string(),
    ));

    Ok(CliContext {
        deploy_root,
        settings,
        runner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bootstrap_resolves_explicit_dir() {
        let temp = tempdir().unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();
        assert_eq!(ctx.deploy_root, temp.path());
    }

    #[test]
    fn bootstrap_fails_for_missing_dir() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        assert!(bootstrap(Some(&missing)).is_err());
    }

    #[test]
    fn database_file_joins_relative_config() {
        let temp = tempdir().unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();
        assert!(ctx.database_file().ends_with("club.db"));
    }
}
