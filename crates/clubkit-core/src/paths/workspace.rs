//! Deploy-root workspace layout.
//!
//! The bot expects a fixed directory structure for image assets, fonts,
//! badges, cached avatars, runtime data, and logs. `setup` scaffolds it;
//! everything else just resolves paths into it.

use std::path::{Path, PathBuf};

use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;

/// Directories the bot expects under the deploy root.
pub const WORKSPACE_DIRS: &[&str] = &[
    "assets",
    "assets/templates",
    "assets/fonts",
    "assets/badges",
    "assets/avatars",
    "data",
    "logs",
];

/// Create the workspace directory structure.
///
/// Returns `(path, created)` pairs; `created` is false for directories that
/// already existed. Idempotent.
pub fn scaffold_workspace(root: &Path) -> Result<Vec<(PathBuf, bool)>, PathError> {
    let mut results = Vec::with_capacity(WORKSPACE_DIRS.len());

    for dir in WORKSPACE_DIRS {
        let path = root.join(dir);
        let created = !path.exists();
        ensure_directory(&path, DirectoryCreationStrategy::AutoCreate)?;
        results.push((path, created));
    }

    Ok(results)
}

/// Location of the detached-bot pid file.
///
/// Lives under `data/` so a bind-mounted data volume carries it across
/// container restarts.
#[must_use]
pub fn pid_file_path(root: &Path) -> PathBuf {
    root.join("data").join("bot.pid")
}

/// Location of the virtual environment directory.
#[must_use]
pub fn venv_dir(root: &Path) -> PathBuf {
    root.join("venv")
}

/// Pick the dependency manifest to install from.
///
/// Prefers `requirements_refactored.txt` (the current manifest) and falls
/// back to `requirements.txt`. Returns `None` when neither exists.
#[must_use]
pub fn requirements_manifest(root: &Path) -> Option<PathBuf> {
    for name in ["requirements_refactored.txt", "requirements.txt"] {
        let path = root.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scaffold_creates_all_dirs() {
        let temp = tempdir().unwrap();
        let results = scaffold_workspace(temp.path()).unwrap();

        assert_eq!(results.len(), WORKSPACE_DIRS.len());
        assert!(results.iter().all(|(_, created)| *created));
        assert!(temp.path().join("assets/badges").is_dir());
        assert!(temp.path().join("logs").is_dir());
    }

    #[test]
    fn scaffold_is_idempotent() {
        let temp = tempdir().unwrap();
        scaffold_workspace(temp.path()).unwrap();
        let second = scaffold_workspace(temp.path()).unwrap();
        assert!(second.iter().all(|(_, created)| !*created));
    }

    #[test]
    fn manifest_prefers_refactored() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("requirements.txt"), "discord.py\n").unwrap();
        std::fs::write(temp.path().join("requirements_refactored.txt"), "discord.py\n").unwrap();

        let manifest = requirements_manifest(temp.path()).unwrap();
        assert!(manifest.ends_with("requirements_refactored.txt"));
    }

    #[test]
    fn manifest_falls_back_to_legacy() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("requirements.txt"), "discord.py\n").unwrap();

        let manifest = requirements_manifest(temp.path()).unwrap();
        assert!(manifest.ends_with("requirements.txt"));
    }

    #[test]
    fn manifest_none_when_absent() {
        let temp = tempdir().unwrap();
        assert!(requirements_manifest(temp.path()).is_none());
    }
}
