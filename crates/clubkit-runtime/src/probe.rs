//! System dependency probing.
//!
//! Active checks for the commands and libraries a bot deployment needs:
//! the Python toolchain to run at all, git to pull updates, ffmpeg and
//! libopus for voice playback, and libsqlite3 as the storage backend.

use std::path::Path;
use std::process::Command;

use clubkit_core::{Dependency, SystemProbePort};
use tracing::debug;

use crate::interpreter::interpreter_version;

/// `SystemProbePort` backed by command execution and pkg-config.
#[derive(Debug, Clone, Default)]
pub struct DefaultSystemProbe;

impl SystemProbePort for DefaultSystemProbe {
    fn check_all_dependencies(&self) -> Vec<Dependency> {
        vec![
            Dependency::required("python3", "Bot interpreter")
                .with_version(python_version()),
            Dependency::required("pip", "Dependency installer")
                .with_version(pip_version()),
            Dependency::optional("git", "Deployment updates")
                .with_version(git_version()),
            Dependency::optional("ffmpeg", "Voice playback")
                .with_version(ffmpeg_version()),
            Dependency::optional("opus", "Voice codec")
                .with_version(check_pkg_config_lib("opus")),
            Dependency::optional("sqlite3", "Database engine headers")
                .with_version(check_pkg_config_lib("sqlite3")),
        ]
    }
}

fn python_version() -> Option<String> {
    ["python3", "python"]
        .iter()
        .find_map(|cmd| interpreter_version(Path::new(cmd)))
        .filter(|version| version.starts_with('3'))
}

fn pip_version() -> Option<String> {
    // "pip 24.0 from ..." -> "24.0"
    let output = get_command_version("pip3", "--version")
        .or_else(|| get_command_version("pip", "--version"))?;
    output.split_whitespace().nth(1).map(|s| s.to_string())
}

fn git_version() -> Option<String> {
    // "git version 2.43.0" -> "2.43.0"
    let output = get_command_version("git", "--version")?;
    output.split_whitespace().nth(2).map(|s| s.to_string())
}

fn ffmpeg_version() -> Option<String> {
    // "ffmpeg version 6.1.1 Copyright ..." -> "6.1.1"
    let output = get_command_version("ffmpeg", "-version")?;
    output.split_whitespace().nth(2).map(|s| s.to_string())
}

/// Get the version of a command by running it with a version flag.
fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Try stdout first, fall back to stderr (some tools output to stderr)
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines().next().map(|s| s.trim().to_string())
}

/// Check for a library using pkg-config.
fn check_pkg_config_lib(lib_name: &str) -> Option<String> {
    let output = Command::new("pkg-config")
        .args(["--modversion", lib_name])
        .output()
        .ok()?;

    if !output.status.success() {
        debug!(lib = lib_name, "pkg-config reported library missing");
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .to_string()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubkit_core::DependencyStatus;

    #[test]
    fn probe_reports_all_dependencies() {
        let deps = DefaultSystemProbe.check_all_dependencies();

        let names: Vec<_> = deps.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["python3", "pip", "git", "ffmpeg", "opus", "sqlite3"]
        );
        assert!(deps.iter().filter(|d| d.required).count() >= 2);
    }

    #[test]
    fn unknown_command_has_no_version() {
        assert!(get_command_version("definitely_not_a_command_12345", "--version").is_none());
    }

    #[test]
    fn missing_pkg_config_lib_is_none() {
        let status = Dependency::optional("nope", "test")
            .with_version(check_pkg_config_lib("definitely-not-a-lib-12345"));
        assert_eq!(status.status, DependencyStatus::Missing);
    }
}
