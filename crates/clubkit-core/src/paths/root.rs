//! Deploy root resolution.
//!
//! The deploy root is the directory the launcher scripts historically ran
//! from: it holds the bot sources, `.env`, `env.example`, `venv/`, and the
//! requirement manifests.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Resolve the deploy root for this invocation.
///
/// Resolution order:
/// 1. Explicit override (the CLI's global `--dir` flag)
/// 2. `CLUBKIT_HOME` environment variable
/// 3. Current working directory
///
/// The returned path must exist and be a directory.
pub fn resolve_deploy_root(override_dir: Option<&Path>) -> Result<PathBuf, PathError> {
    let root = if let Some(dir) = override_dir {
        dir.to_path_buf()
    } else if let Ok(home) = env::var("CLUBKIT_HOME") {
        PathBuf::from(home)
    } else {
        env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?
    };

    if !root.exists() {
        return Err(PathError::DirectoryNotFound(root));
    }
    if !root.is_dir() {
        return Err(PathError::NotADirectory(root));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_override_wins() {
        let temp = tempdir().unwrap();
        let root = resolve_deploy_root(Some(temp.path())).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn missing_override_is_an_error() {
        let temp = tempdir().unwrap();
        let gone = temp.path().join("nope");
        assert!(matches!(
            resolve_deploy_root(Some(&gone)),
            Err(PathError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn override_must_be_a_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a_file");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            resolve_deploy_root(Some(&file)),
            Err(PathError::NotADirectory(_))
        ));
    }
}
