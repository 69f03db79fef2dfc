//! Python interpreter resolution.
//!
//! The launcher scripts preferred the deployment's virtual environment and
//! fell back to the system interpreter. Same rule here: `venv/bin/python`
//! (or `venv\Scripts\python.exe` on Windows) when it exists, else the first
//! Python 3 found on PATH.

use std::path::{Path, PathBuf};
use std::process::Command;

use clubkit_core::ProcessError;
use clubkit_core::paths::venv_dir;
use tracing::debug;

/// The interpreter inside the deploy root's venv, if the venv exists.
#[must_use]
pub fn venv_interpreter(root: &Path) -> Option<PathBuf> {
    let venv = venv_dir(root);

    #[cfg(unix)]
    let candidate = venv.join("bin").join("python");

    #[cfg(not(unix))]
    let candidate = venv.join("Scripts").join("python.exe");

    candidate.exists().then_some(candidate)
}

/// First Python 3 interpreter on PATH.
///
/// Tries `python3` first, then `python` (verifying it is actually a
/// Python 3).
#[must_use]
pub fn system_interpreter() -> Option<PathBuf> {
    for cmd in ["python3", "python"] {
        if interpreter_version(Path::new(cmd))
            .is_some_and(|version| version.starts_with('3'))
        {
            return Some(PathBuf::from(cmd));
        }
    }
    None
}

/// Resolve the interpreter to launch the bot with.
///
/// A missing interpreter is a hard error with a diagnostic naming what was
/// tried; the launcher scripts exited 1 in the same situation.
pub fn resolve_interpreter(root: &Path) -> Result<PathBuf, ProcessError> {
    if let Some(python) = venv_interpreter(root) {
        debug!(interpreter = %python.display(), "Using venv interpreter");
        return Ok(python);
    }

    system_interpreter().ok_or_else(|| {
        ProcessError::InterpreterMissing(
            "tried venv/bin/python, python3, and python; install Python 3 or run `clubkit setup`"
                .to_string(),
        )
    })
}

/// Version of an interpreter, e.g. `3.12.1`.
///
/// Runs `<path> --version` and parses "Python X.Y.Z". Returns `None` when
/// the command cannot be executed or the output is not a Python banner.
#[must_use]
pub fn interpreter_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Old interpreters print the banner to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.split_whitespace().nth(1).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn venv_interpreter_absent_without_venv() {
        let temp = tempdir().unwrap();
        assert!(venv_interpreter(temp.path()).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn venv_interpreter_found_when_present() {
        let temp = tempdir().unwrap();
        let bin = temp.path().join("venv").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("python"), b"").unwrap();

        let found = venv_interpreter(temp.path()).unwrap();
        assert!(found.ends_with("venv/bin/python"));
    }

    #[test]
    fn version_none_for_non_interpreter() {
        assert!(interpreter_version(Path::new("definitely_not_python_12345")).is_none());
    }
}
