//! Atomic pid-file I/O and process verification.
//!
//! One pid file per deployment at `data/bot.pid`. Format: two-line text file
//! ```text
//! <pid>
//! <started_at unix seconds>
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clubkit_core::paths::pid_file_path;

#[cfg(target_os = "macos")]
use sysinfo::System;

/// Pid file content parsed from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PidFileData {
    pub pid: u32,
    pub started_at: u64,
}

/// Write the pid file atomically using temp file + rename.
///
/// # Atomicity
/// 1. Write to `bot.pid.tmp`
/// 2. Rename to `bot.pid` (atomic on Unix/macOS)
pub fn write_pidfile(root: &Path, pid: u32, started_at: u64) -> io::Result<PathBuf> {
    let final_path = pid_file_path(root);
    if let Some(parent) = final_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp_path = final_path.with_extension("pid.tmp");

    let content = format!("{pid}\n{started_at}\n");
    fs::write(&temp_path, content)?;

    fs::rename(&temp_path, &final_path)?;

    Ok(final_path)
}

/// Read the pid file content.
pub fn read_pidfile(root: &Path) -> io::Result<PidFileData> {
    let content = fs::read_to_string(pid_file_path(root))?;
    parse_pidfile_content(&content)
}

/// Delete the pid file (idempotent, no error if missing).
pub fn delete_pidfile(root: &Path) -> io::Result<()> {
    match fs::remove_file(pid_file_path(root)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn parse_pidfile_content(content: &str) -> io::Result<PidFileData> {
    let mut lines = content.lines();

    let pid = lines
        .next()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing or invalid PID"))?;

    let started_at = lines
        .next()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "missing or invalid start time")
        })?;

    Ok(PidFileData { pid, started_at })
}

/// Check if a PID exists (without verifying it's our process).
///
/// Uses `kill` with null signal which doesn't send a signal but checks existence.
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> bool {
    use nix::sys::signal;
    use nix::unistd::Pid;

    match signal::kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => true,
        Err(nix::errno::Errno::ESRCH) => false, // No such process
        Err(_) => true,                         // Process exists but we lack permission
    }
}

#[cfg(not(unix))]
pub fn pid_exists(_pid: u32) -> bool {
    false
}

/// Check if a PID belongs to a Python process running the bot entry point.
///
/// # Platform behavior
/// - **macOS**: Uses `sysinfo` to inspect the command line
/// - **Linux**: Reads `/proc/<pid>/cmdline`
/// - **Other**: Always returns `false` (conservative)
///
/// Returns `false` on any verification failure. This prevents signaling an
/// unrelated process that happens to have a reused PID.
pub fn is_our_bot(pid: u32, entry_point: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        is_our_bot_macos(pid, entry_point)
    }

    #[cfg(target_os = "linux")]
    {
        is_our_bot_linux(pid, entry_point)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = (pid, entry_point);
        false
    }
}

#[cfg(target_os = "macos")]
fn is_our_bot_macos(pid: u32, entry_point: &str) -> bool {
    let sys = System::new_all();

    let Some(process) = sys.process(sysinfo::Pid::from_u32(pid)) else {
        return false;
    };

    process
        .cmd()
        .iter()
        .any(|arg| arg.to_string_lossy().ends_with(entry_point))
}

#[cfg(target_os = "linux")]
fn is_our_bot_linux(pid: u32, entry_point: &str) -> bool {
    let Ok(cmdline) = fs::read(format!("/proc/{pid}/cmdline")) else {
        return false;
    };

    // Arguments are NUL-separated
    cmdline
        .split(|b| *b == 0)
        .any(|arg| String::from_utf8_lossy(arg).ends_with(entry_point))
}
