//! Resolved-path snapshot for diagnostics.
//!
//! The `paths` command prints this; it is the "golden truth" for debugging
//! deployments where the bot and the toolkit disagree about locations.

use std::fmt;
use std::path::{Path, PathBuf};

use super::database::database_path;
use super::env_file::{env_example_path, env_file_path};
use super::workspace::{pid_file_path, requirements_manifest, venv_dir};

/// Every path clubkit resolves for a deploy root, in one place.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// The deploy root itself.
    pub deploy_root: PathBuf,
    /// The `.env` secrets file.
    pub env_file: PathBuf,
    /// The `env.example` template.
    pub env_example: PathBuf,
    /// Resolved database file.
    pub database: PathBuf,
    /// Virtual environment directory.
    pub venv: PathBuf,
    /// Dependency manifest chosen for installs, if any exists.
    pub requirements: Option<PathBuf>,
    /// Detached-bot pid file.
    pub pid_file: PathBuf,
    /// Log directory.
    pub logs: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths for a deploy root.
    ///
    /// `database_config` is the raw `DATABASE_PATH` setting.
    #[must_use]
    pub fn resolve(root: &Path, database_config: &str) -> Self {
        Self {
            deploy_root: root.to_path_buf(),
            env_file: env_file_path(root),
            env_example: env_example_path(root),
            database: database_path(root, database_config),
            venv: venv_dir(root),
            requirements: requirements_manifest(root),
            pid_file: pid_file_path(root),
            logs: root.join("logs"),
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "deploy_root  = {}", self.deploy_root.display())?;
        writeln!(f, "env_file     = {}", self.env_file.display())?;
        writeln!(f, "env_example  = {}", self.env_example.display())?;
        writeln!(f, "database     = {}", self.database.display())?;
        writeln!(f, "venv         = {}", self.venv.display())?;
        match &self.requirements {
            Some(path) => writeln!(f, "requirements = {}", path.display())?,
            None => writeln!(f, "requirements = (none found)")?,
        }
        writeln!(f, "pid_file     = {}", self.pid_file.display())?;
        write!(f, "logs         = {}", self.logs.display())
    }
}
