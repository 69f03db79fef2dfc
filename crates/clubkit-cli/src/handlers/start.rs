//! Start command handler.
//!
//! Enforces the launch preconditions the shell launchers used to handle,
//! then hands off to the bot runner. Foreground launches return the bot's
//! own exit code so scripts and process supervisors see the real outcome.

use clubkit_core::paths::{EnvProvision, env_file_path, provision_env_file};
use clubkit_core::{BotLaunchConfig, BotSettings, validate_settings};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for a bot launch.
#[derive(Debug, Clone, Copy)]
pub struct StartArgs {
    /// Fail instead of copying the template when `.env` is missing.
    pub strict: bool,
    /// Run detached with a pid file instead of in the foreground.
    pub detach: bool,
    /// Skip venv creation and dependency installation.
    pub skip_install: bool,
}

/// Execute the start command.
///
/// Returns the process exit code the CLI should terminate with: the bot's
/// own exit code for foreground runs, 0 for a successful detach.
pub async fn execute(ctx: &CliContext, args: StartArgs) -> Result<i32, CliError> {
    prepare_env_file(ctx, args.strict)?;

    // Settings may have changed if .env was just provisioned; reload after
    // pulling the file into the environment.
    let env_file = env_file_path(ctx.deploy_root());
    dotenvy::from_path_override(&env_file).ok();
    let settings = BotSettings::from_env();
    validate_settings(&settings)?;

    let mut config = BotLaunchConfig::new();
    if args.skip_install {
        config = config.without_provisioning();
    }

    if args.detach {
        let handle = ctx.runner.start_detached(&config).await?;
        println!("Bot started with PID {}", handle.pid);
        println!("Logs: {}", ctx.deploy_root().join("logs/bot.log").display());
        Ok(0)
    } else {
        let code = ctx.runner.run_foreground(&config).await?;
        if code != 0 {
            warn!(code, "Bot exited with a non-zero status");
        }
        Ok(code)
    }
}

/// Apply the `.env` launch policy.
///
/// Strict mode refuses to launch without a `.env`; lenient mode provisions
/// one from `env.example` and warns. A deployment with neither file fails
/// in both modes.
fn prepare_env_file(ctx: &CliContext, strict: bool) -> Result<(), CliError> {
    let env_file = env_file_path(ctx.deploy_root());

    if strict {
        if !env_file.exists() {
            return Err(CliError::Config(format!(
                "{} not found; create it from env.example or run `clubkit env init`",
                env_file.display()
            )));
        }
        return Ok(());
    }

    if let EnvProvision::CreatedFromTemplate = provision_env_file(ctx.deploy_root())? {
        warn!(".env was created from env.example; the token is still unset");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use tempfile::tempdir;

    #[test]
    fn strict_mode_requires_env_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("env.example"), "DISCORD_TOKEN=\n").unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();

        let err = prepare_env_file(&ctx, true).unwrap_err();
        assert_eq!(err.exit_code(), 78);
        // Strict mode must not have provisioned anything
        assert!(!temp.path().join(".env").exists());
    }

    #[test]
    fn lenient_mode_copies_template() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("env.example"), "DISCORD_TOKEN=\n").unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();

        prepare_env_file(&ctx, false).unwrap();
        assert!(temp.path().join(".env").exists());
    }

    #[test]
    fn missing_template_fails_either_way() {
        let temp = tempdir().unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();

        let err = prepare_env_file(&ctx, false).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
