//! Path utilities for the bot deploy root and its well-known files.
//!
//! This module provides the canonical path resolution for all clubkit
//! components:
//! - Deploy root (where the bot sources and `.env` live)
//! - Database location
//! - Virtual environment and dependency manifests
//! - Workspace asset/data/log directories
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - the CLI handles user prompts separately
//! - Everything resolves relative to an explicit deploy root; only
//!   `resolve_deploy_root` consults the environment

mod database;
mod ensure;
mod env_file;
mod error;
mod resolver;
mod root;
mod workspace;

// Error type
pub use error::PathError;

// Deploy root resolution
pub use root::resolve_deploy_root;

// Database
pub use database::database_path;

// Env file provisioning
pub use env_file::{EnvProvision, env_example_path, env_file_path, persist_env_value, provision_env_file};

// Workspace layout
pub use workspace::{
    WORKSPACE_DIRS, pid_file_path, requirements_manifest, scaffold_workspace, venv_dir,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

// Resolved-path snapshot for diagnostics
pub use resolver::ResolvedPaths;
