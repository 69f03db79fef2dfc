//! Database path resolution.
//!
//! The bot reads `DATABASE_PATH` from its environment, defaulting to
//! `club.db` next to the entry point. Docker deployments sometimes mount a
//! volume over that path, leaving a directory where the file should be; the
//! bot works around it by placing `club.db` inside, and we match that.

use std::path::{Path, PathBuf};

/// Resolve the database file location for a deploy root.
///
/// `configured` is the raw `DATABASE_PATH` value. Relative paths are joined
/// to the deploy root. If the resolved path is an existing directory, the
/// file becomes `<dir>/club.db`.
#[must_use]
pub fn database_path(root: &Path, configured: &str) -> PathBuf {
    let raw = Path::new(configured);
    let resolved = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        root.join(raw)
    };

    if resolved.is_dir() {
        resolved.join("club.db")
    } else {
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn relative_path_joins_deploy_root() {
        let temp = tempdir().unwrap();
        let path = database_path(temp.path(), "club.db");
        assert_eq!(path, temp.path().join("club.db"));
    }

    #[test]
    fn absolute_path_is_kept() {
        let temp = tempdir().unwrap();
        let abs = temp.path().join("data").join("club.db");
        let path = database_path(temp.path(), abs.to_str().unwrap());
        assert_eq!(path, abs);
    }

    #[test]
    fn directory_target_gets_club_db_inside() {
        let temp = tempdir().unwrap();
        let volume = temp.path().join("data");
        std::fs::create_dir(&volume).unwrap();

        let path = database_path(temp.path(), "data");
        assert_eq!(path, volume.join("club.db"));
    }
}
