//! Command builder for the bot process.
//!
//! Builds and spawns the Python entry point with the same environment the
//! container image provides: unbuffered output and a UTF-8 locale.

use std::path::Path;
use std::process::Stdio;

use clubkit_core::ProcessError;
use tokio::process::{Child, Command};
use tracing::debug;

/// Locale exported to the bot, matching the container image.
pub const BOT_LOCALE: &str = "ru_RU.UTF-8";

/// Stdio routing for the spawned bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the launcher's stdin/stdout/stderr (foreground runs).
    Inherit,
    /// Append stdout/stderr to the deployment's log file (detached runs).
    LogFile,
}

/// Build and spawn the bot process.
///
/// The child runs from the deploy root so the bot's relative paths
/// (`.env`, `club.db`, `assets/`) resolve the same way the launcher
/// scripts ran it.
///
/// # Errors
///
/// Returns [`ProcessError::StartFailed`] when the log file cannot be
/// opened or the process fails to spawn.
pub fn build_and_spawn(
    interpreter: &Path,
    root: &Path,
    entry_point: &str,
    mode: StdioMode,
) -> Result<Child, ProcessError> {
    let mut cmd = Command::new(interpreter);
    cmd.arg(entry_point)
        .current_dir(root)
        .env("PYTHONUNBUFFERED", "1")
        .env("LANG", BOT_LOCALE)
        .env("LANGUAGE", BOT_LOCALE)
        .env("LC_ALL", BOT_LOCALE);

    match mode {
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        StdioMode::LogFile => {
            let log_path = root.join("logs").join("bot.log");
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ProcessError::StartFailed(format!("failed to create log directory: {e}"))
                })?;
            }
            let log = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .map_err(|e| {
                    ProcessError::StartFailed(format!(
                        "failed to open {}: {e}",
                        log_path.display()
                    ))
                })?;
            let log_err = log.try_clone().map_err(|e| {
                ProcessError::StartFailed(format!("failed to clone log handle: {e}"))
            })?;
            cmd.stdin(Stdio::null())
                .stdout(Stdio::from(log))
                .stderr(Stdio::from(log_err));
        }
    }

    debug!(
        interpreter = %interpreter.display(),
        entry_point,
        "Spawning bot process"
    );

    cmd.spawn()
        .map_err(|e| ProcessError::StartFailed(format!("failed to spawn bot: {e}")))
}
