//! `.env` file provisioning and persistence.
//!
//! The bot keeps its secrets in an untracked `.env` at the deploy root,
//! provisioned from the checked-in `env.example` template. The launcher
//! scripts auto-copied the template when `.env` was missing; that behavior
//! lives here so every adapter gets it identically.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Location of the `.env` file at the deploy root.
#[must_use]
pub fn env_file_path(root: &Path) -> PathBuf {
    root.join(".env")
}

/// Location of the checked-in `env.example` template.
#[must_use]
pub fn env_example_path(root: &Path) -> PathBuf {
    root.join("env.example")
}

/// Outcome of `.env` provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvProvision {
    /// `.env` already existed; nothing was done.
    AlreadyPresent,
    /// `.env` was created by copying `env.example`. The token still needs
    /// to be edited in.
    CreatedFromTemplate,
}

/// Ensure `.env` exists, copying it from `env.example` when missing.
///
/// Fails with `PathError::TemplateMissing` when neither file exists; a
/// deployment with no template cannot be provisioned automatically.
pub fn provision_env_file(root: &Path) -> Result<EnvProvision, PathError> {
    let env_path = env_file_path(root);
    if env_path.exists() {
        return Ok(EnvProvision::AlreadyPresent);
    }

    let template = env_example_path(root);
    if !template.exists() {
        return Err(PathError::TemplateMissing(template));
    }

    fs::copy(&template, &env_path).map_err(|e| PathError::EnvFileError {
        path: env_path,
        reason: e.to_string(),
    })?;

    Ok(EnvProvision::CreatedFromTemplate)
}

/// Persist a key=value pair into the `.env` file.
///
/// If the key already exists, its value is updated.
/// If the key doesn't exist, it is appended to the file.
pub fn persist_env_value(root: &Path, key: &str, value: &str) -> Result<(), PathError> {
    let env_path = env_file_path(root);

    let lines: Vec<String> = if env_path.exists() {
        fs::read_to_string(&env_path)
            .map_err(|e| PathError::EnvFileError {
                path: env_path.clone(),
                reason: e.to_string(),
            })?
            .lines()
            .map(std::string::ToString::to_string)
            .collect()
    } else {
        Vec::new()
    };

    let mut updated = false;
    let mut output: Vec<String> = Vec::with_capacity(lines.len() + 1);

    for line in lines {
        match line.split_once('=') {
            Some((lhs, _)) if lhs.trim() == key => {
                if !updated {
                    output.push(format!("{key}={value}"));
                    updated = true;
                }
            }
            _ => output.push(line),
        }
    }

    if !updated {
        output.push(format!("{key}={value}"));
    }

    // Ensure file ends with newline
    if !output.is_empty() && !output.last().is_some_and(|l| l.is_empty()) {
        output.push(String::new());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&env_path)
        .map_err(|e| PathError::EnvFileError {
            path: env_path.clone(),
            reason: e.to_string(),
        })?;

    let content = output.join("\n");
    file.write_all(content.as_bytes())
        .map_err(|e| PathError::EnvFileError {
            path: env_path,
            reason: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provision_copies_template() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("env.example"), "DISCORD_TOKEN=\nGUILD_ID=0\n").unwrap();

        let outcome = provision_env_file(temp.path()).unwrap();
        assert_eq!(outcome, EnvProvision::CreatedFromTemplate);

        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(contents.contains("DISCORD_TOKEN="));
    }

    #[test]
    fn provision_is_a_noop_when_env_exists() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".env"), "DISCORD_TOKEN=secret\n").unwrap();

        let outcome = provision_env_file(temp.path()).unwrap();
        assert_eq!(outcome, EnvProvision::AlreadyPresent);

        // Existing secrets untouched
        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert_eq!(contents, "DISCORD_TOKEN=secret\n");
    }

    #[test]
    fn provision_fails_without_template() {
        let temp = tempdir().unwrap();
        assert!(matches!(
            provision_env_file(temp.path()),
            Err(PathError::TemplateMissing(_))
        ));
    }

    #[test]
    fn persist_updates_existing_key() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".env"), "GUILD_ID=1\nDATABASE_PATH=club.db\n").unwrap();

        persist_env_value(temp.path(), "GUILD_ID", "42").unwrap();

        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(contents.contains("GUILD_ID=42"));
        assert!(contents.contains("DATABASE_PATH=club.db"));
        assert!(!contents.contains("GUILD_ID=1\n"));
    }

    #[test]
    fn persist_appends_new_key() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".env"), "GUILD_ID=1\n").unwrap();

        persist_env_value(temp.path(), "BOT_ACTIVITY_NAME", "chess").unwrap();

        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(contents.contains("GUILD_ID=1"));
        assert!(contents.ends_with("BOT_ACTIVITY_NAME=chess\n"));
    }

    #[test]
    fn persist_creates_file_when_missing() {
        let temp = tempdir().unwrap();
        persist_env_value(temp.path(), "DISCORD_TOKEN", "tok").unwrap();
        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert_eq!(contents, "DISCORD_TOKEN=tok\n");
    }
}
