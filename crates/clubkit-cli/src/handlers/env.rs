//! `.env` management handlers.
//!
//! `init` provisions the file from the template, `show` prints the
//! effective configuration with the token redacted, and `set` edits a
//! single key in place.

use clubkit_core::paths::{EnvProvision, persist_env_value, provision_env_file};
use clubkit_core::BotSettings;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::commands::EnvCommand;
use crate::error::CliError;

/// Execute an env subcommand.
pub fn execute(ctx: &CliContext, command: &EnvCommand) -> Result<(), CliError> {
    match command {
        EnvCommand::Init => init(ctx),
        EnvCommand::Show { json } => show(&ctx.settings, *json),
        EnvCommand::Set { key, value } => set(ctx, key, value),
    }
}

fn init(ctx: &CliContext) -> Result<(), CliError> {
    match provision_env_file(ctx.deploy_root())? {
        EnvProvision::CreatedFromTemplate => {
            println!(".env created from env.example");
            println!("Edit it and set DISCORD_TOKEN before starting the bot.");
        }
        EnvProvision::AlreadyPresent => {
            println!(".env already exists, leaving it untouched");
        }
    }
    Ok(())
}

fn show(settings: &BotSettings, as_json: bool) -> Result<(), CliError> {
    if as_json {
        // Never serialize the raw settings struct here: it carries the token
        let value = json!({
            "discord_token": settings.redacted_token(),
            "guild_id": settings.guild_id,
            "admin_roles": settings.admin_roles,
            "transfer_commission_rate": settings.transfer_commission_rate,
            "initial_money": settings.initial_money,
            "initial_messages": settings.initial_messages,
            "badge_roles": settings.badge_roles,
            "contributor_role_id": settings.contributor_role_id,
            "tester_role_id": settings.tester_role_id,
            "maintainer_role_id": settings.maintainer_role_id,
            "database_path": settings.database_path,
            "bot_activity_name": settings.bot_activity_name,
            "voice_time_reward": settings.voice_time_reward,
            "voice_money_reward": settings.voice_money_reward,
            "voice_check_interval": settings.voice_check_interval,
        });
        println!("{}", serde_json::to_string_pretty(&value).map_err(|e| CliError::General(e.to_string()))?);
        return Ok(());
    }

    println!("DISCORD_TOKEN            = {}", settings.redacted_token());
    println!("GUILD_ID                 = {}", settings.guild_id);
    println!("ADMIN_ROLES              = {}", join_ids(&settings.admin_roles));
    println!("TRANSFER_COMMISSION_RATE = {}", settings.transfer_commission_rate);
    println!("INITIAL_MONEY            = {}", settings.initial_money);
    println!("INITIAL_MESSAGES         = {}", settings.initial_messages);
    println!("BADGE_ROLES              = {}", join_ids(&settings.badge_roles));
    println!("CONTRIBUTOR_ROLE_ID      = {}", settings.contributor_role_id);
    println!("TESTER_ROLE_ID           = {}", settings.tester_role_id);
    println!("MAINTAINER_ROLE_ID       = {}", settings.maintainer_role_id);
    println!("DATABASE_PATH            = {}", settings.database_path);
    println!("BOT_ACTIVITY_NAME        = {}", settings.bot_activity_name);
    println!("VOICE_TIME_REWARD        = {}", settings.voice_time_reward);
    println!("VOICE_MONEY_REWARD       = {}", settings.voice_money_reward);
    println!("VOICE_CHECK_INTERVAL     = {}", settings.voice_check_interval);
    Ok(())
}

fn set(ctx: &CliContext, key: &str, value: &str) -> Result<(), CliError> {
    if key.trim().is_empty() || key.contains('=') || key.contains(char::is_whitespace) {
        return Err(CliError::Arguments(format!(
            "invalid environment key: {key:?}"
        )));
    }

    persist_env_value(ctx.deploy_root(), key, value)?;
    println!("{key} written to .env");
    Ok(())
}

fn join_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use tempfile::tempdir;

    #[test]
    fn set_rejects_malformed_keys() {
        let temp = tempdir().unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();

        assert!(set(&ctx, "BAD KEY", "x").is_err());
        assert!(set(&ctx, "BAD=KEY", "x").is_err());
        assert!(set(&ctx, "", "x").is_err());
    }

    #[test]
    fn set_persists_value() {
        let temp = tempdir().unwrap();
        let ctx = bootstrap(Some(temp.path())).unwrap();

        set(&ctx, "GUILD_ID", "42").unwrap();
        let contents = std::fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(contents.contains("GUILD_ID=42"));
    }

    #[test]
    fn join_ids_formats_lists() {
        assert_eq!(join_ids(&[]), "(none)");
        assert_eq!(join_ids(&[1, 2, 3]), "1,2,3");
    }
}
