//! Local bot process supervisor.
//!
//! Implements the `BotRunner` port against the host OS: resolves the
//! interpreter, provisions the venv when asked, spawns the entry point,
//! and tracks detached runs through the deployment's pid file.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use clubkit_core::{BotHandle, BotLaunchConfig, BotRunner, ProcessError};
use tracing::{info, warn};

use crate::command::{StdioMode, build_and_spawn};
use crate::interpreter::resolve_interpreter;
use crate::pidfile::{delete_pidfile, is_our_bot, pid_exists, read_pidfile, write_pidfile};
use crate::venv::{ensure_venv, install_dependencies};

#[cfg(unix)]
use std::time::Duration;

/// Grace period between SIGTERM and SIGKILL.
#[cfg(unix)]
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// `BotRunner` backed by the local OS.
pub struct LocalBotRunner {
    deploy_root: PathBuf,
    entry_point: String,
}

impl LocalBotRunner {
    #[must_use]
    pub fn new(deploy_root: PathBuf, entry_point: String) -> Self {
        Self {
            deploy_root,
            entry_point,
        }
    }

    /// Pid file state, ignoring dead and reused pids.
    ///
    /// Sweeps the pid file when the recorded pid is gone or belongs to an
    /// unrelated process.
    fn live_handle(&self) -> io::Result<Option<BotHandle>> {
        let data = match read_pidfile(&self.deploy_root) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Removing malformed pid file");
                delete_pidfile(&self.deploy_root)?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if !pid_exists(data.pid) || !is_our_bot(data.pid, &self.entry_point) {
            info!(pid = data.pid, "Sweeping stale pid file");
            delete_pidfile(&self.deploy_root)?;
            return Ok(None);
        }

        Ok(Some(BotHandle {
            pid: data.pid,
            started_at: data.started_at,
        }))
    }

    async fn provision(&self, config: &BotLaunchConfig) -> Result<(), ProcessError> {
        if config.provision_env {
            ensure_venv(&self.deploy_root).await?;
            install_dependencies(&self.deploy_root).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BotRunner for LocalBotRunner {
    async fn run_foreground(&self, config: &BotLaunchConfig) -> Result<i32, ProcessError> {
        self.provision(config).await?;
        let interpreter = resolve_interpreter(&self.deploy_root)?;

        let mut child = build_and_spawn(
            &interpreter,
            &self.deploy_root,
            &self.entry_point,
            StdioMode::Inherit,
        )?;
        let status = child
            .wait()
            .await
            .map_err(|e| ProcessError::Internal(format!("failed to wait on bot: {e}")))?;

        // Signal deaths have no code; treat them as failure
        Ok(status.code().unwrap_or(1))
    }

    async fn start_detached(&self, config: &BotLaunchConfig) -> Result<BotHandle, ProcessError> {
        if let Some(handle) = self
            .live_handle()
            .map_err(|e| ProcessError::Internal(e.to_string()))?
        {
            return Err(ProcessError::AlreadyRunning(handle.pid));
        }

        self.provision(config).await?;
        let interpreter = resolve_interpreter(&self.deploy_root)?;

        let child = build_and_spawn(
            &interpreter,
            &self.deploy_root,
            &self.entry_point,
            StdioMode::LogFile,
        )?;
        let pid = child
            .id()
            .ok_or_else(|| ProcessError::StartFailed("bot exited before tracking".to_string()))?;

        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        write_pidfile(&self.deploy_root, pid, started_at)
            .map_err(|e| ProcessError::StartFailed(format!("failed to write pid file: {e}")))?;

        info!(pid, "Bot started");
        Ok(BotHandle { pid, started_at })
    }

    async fn stop(&self) -> Result<(), ProcessError> {
        let Some(handle) = self
            .live_handle()
            .map_err(|e| ProcessError::Internal(e.to_string()))?
        else {
            return Err(ProcessError::NotRunning);
        };

        terminate(handle.pid)
            .await
            .map_err(|e| ProcessError::StopFailed(e.to_string()))?;

        delete_pidfile(&self.deploy_root)
            .map_err(|e| ProcessError::StopFailed(format!("failed to remove pid file: {e}")))?;

        info!(pid = handle.pid, "Bot stopped");
        Ok(())
    }

    async fn status(&self) -> Result<Option<BotHandle>, ProcessError> {
        self.live_handle()
            .map_err(|e| ProcessError::Internal(e.to_string()))
    }
}

/// Kill a process by pid with SIGTERM → SIGKILL escalation.
///
/// # Strategy
/// 1. Send SIGTERM
/// 2. Poll for up to 5 seconds to verify process exit
/// 3. If still alive, send SIGKILL
#[cfg(unix)]
async fn terminate(pid: u32) -> io::Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid;
    use tokio::time::sleep;

    let nix_pid = Pid::from_raw(pid as i32);

    if let Err(e) = signal::kill(nix_pid, Signal::SIGTERM) {
        if e == Errno::ESRCH {
            // Already gone
            return Ok(());
        }
        return Err(io::Error::other(e));
    }

    let poll_interval = Duration::from_millis(100);
    let rounds = SHUTDOWN_GRACE.as_millis() / poll_interval.as_millis();
    for _ in 0..rounds {
        sleep(poll_interval).await;

        match signal::kill(nix_pid, None) {
            Ok(()) => {}
            Err(Errno::ESRCH) => return Ok(()),
            Err(_) => {}
        }
    }

    warn!(pid, "Bot did not exit after SIGTERM, sending SIGKILL");
    match signal::kill(nix_pid, Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(io::Error::other(e)),
    }
}

#[cfg(not(unix))]
async fn terminate(_pid: u32) -> io::Result<()> {
    Err(io::Error::other("process termination is Unix-only"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn status_none_without_pidfile() {
        let temp = tempdir().unwrap();
        let runner = LocalBotRunner::new(temp.path().to_path_buf(), "main.py".to_string());
        assert!(runner.status().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_sweeps_dead_pid() {
        let temp = tempdir().unwrap();
        write_pidfile(temp.path(), 999_999, 1_700_000_000).unwrap();

        let runner = LocalBotRunner::new(temp.path().to_path_buf(), "main.py".to_string());
        assert!(runner.status().await.unwrap().is_none());
        assert!(read_pidfile(temp.path()).is_err());
    }

    #[tokio::test]
    async fn status_sweeps_reused_pid() {
        let temp = tempdir().unwrap();
        // Our own pid is alive but is not a Python bot
        write_pidfile(temp.path(), std::process::id(), 1_700_000_000).unwrap();

        let runner = LocalBotRunner::new(temp.path().to_path_buf(), "main.py".to_string());
        assert!(runner.status().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stop_without_bot_is_not_running() {
        let temp = tempdir().unwrap();
        let runner = LocalBotRunner::new(temp.path().to_path_buf(), "main.py".to_string());
        assert!(matches!(
            runner.stop().await,
            Err(ProcessError::NotRunning)
        ));
    }
}
