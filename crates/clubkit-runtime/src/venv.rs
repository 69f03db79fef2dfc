//! Virtual environment provisioning.
//!
//! Recreates what `run.sh` did before handing off to the bot: create the
//! venv when it is missing and install the declared dependencies through
//! the venv's own pip. Install failures propagate; there is no retry.

use std::path::{Path, PathBuf};

use clubkit_core::ProcessError;
use clubkit_core::paths::{requirements_manifest, venv_dir};
use tokio::process::Command;
use tracing::{info, warn};

use crate::interpreter::{system_interpreter, venv_interpreter};

/// Ensure the venv exists, creating it with `python -m venv` when missing.
///
/// Returns the venv's interpreter path.
pub async fn ensure_venv(root: &Path) -> Result<PathBuf, ProcessError> {
    if let Some(python) = venv_interpreter(root) {
        return Ok(python);
    }

    let system = system_interpreter().ok_or_else(|| {
        ProcessError::InterpreterMissing(
            "Python 3 is required to create the virtual environment".to_string(),
        )
    })?;

    info!(root = %root.display(), "Creating virtual environment");
    let status = Command::new(&system)
        .arg("-m")
        .arg("venv")
        .arg(venv_dir(root))
        .current_dir(root)
        .status()
        .await
        .map_err(|e| ProcessError::SetupFailed(format!("failed to run venv creation: {e}")))?;

    if !status.success() {
        return Err(ProcessError::SetupFailed(format!(
            "venv creation exited with {status}"
        )));
    }

    venv_interpreter(root).ok_or_else(|| {
        ProcessError::SetupFailed("venv created but its interpreter is missing".to_string())
    })
}

/// Install the declared dependencies into the venv.
///
/// Uses `requirements_refactored.txt` when present, else `requirements.txt`.
/// A deployment with no manifest gets a warning and nothing is installed.
pub async fn install_dependencies(root: &Path) -> Result<(), ProcessError> {
    let Some(manifest) = requirements_manifest(root) else {
        warn!(root = %root.display(), "No requirements manifest found, skipping install");
        return Ok(());
    };

    let python = ensure_venv(root).await?;

    info!(manifest = %manifest.display(), "Installing dependencies");
    let status = Command::new(&python)
        .arg("-m")
        .arg("pip")
        .arg("install")
        .arg("-r")
        .arg(&manifest)
        .current_dir(root)
        .status()
        .await
        .map_err(|e| ProcessError::SetupFailed(format!("failed to run pip: {e}")))?;

    if !status.success() {
        return Err(ProcessError::SetupFailed(format!(
            "pip install exited with {status}"
        )));
    }

    Ok(())
}
