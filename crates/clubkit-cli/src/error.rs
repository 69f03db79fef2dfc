//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from domain errors to exit codes and user-facing messages.

use clubkit_core::settings::SettingsError;
use clubkit_core::{CoreError, PathError, ProcessError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// General error without a more specific category.
    #[error("{0}")]
    General(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::General(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Database(_) => 73, // EX_CANTCREAT (closest fit)
            CliError::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Process(proc_err) => proc_err.into(),
            CoreError::Settings(settings_err) => settings_err.into(),
            CoreError::Path(path_err) => path_err.into(),
            CoreError::Configuration(msg) => CliError::Config(msg),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        CliError::Database(err.to_string())
    }
}

impl From<ProcessError> for CliError {
    fn from(err: ProcessError) -> Self {
        CliError::Process(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::TemplateMissing(_) | PathError::EnvFileError { .. } => {
                CliError::Config(err.to_string())
            }
            _ => CliError::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Database(format!("{err:#}"))
    }
}
