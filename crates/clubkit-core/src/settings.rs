//! Bot settings loaded from the environment.
//!
//! The bot reads its entire configuration from environment variables, which
//! in turn come from the deploy root's `.env` file. This module mirrors that
//! contract so the toolkit can validate a deployment before handing off to
//! the bot process.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default commission taken on member-to-member transfers.
pub const DEFAULT_COMMISSION_RATE: f64 = 0.1;

/// Default starting balance granted to a new member.
pub const DEFAULT_INITIAL_MONEY: i64 = 10;

/// Default message count granted to a new member.
pub const DEFAULT_INITIAL_MESSAGES: i64 = 1;

/// Default database file, relative to the deploy root.
pub const DEFAULT_DATABASE_PATH: &str = "club.db";

/// Complete bot configuration as read from the environment.
///
/// Field-per-variable, with the same defaults the bot itself applies. A
/// missing or malformed numeric variable falls back to its default rather
/// than aborting, so `env show` stays usable on half-edited files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotSettings {
    /// Discord bot token (`DISCORD_TOKEN`). Required for launch.
    pub discord_token: Option<String>,
    /// Guild the bot operates in (`GUILD_ID`).
    pub guild_id: i64,
    /// Admin role IDs by privilege tier (`ADMIN_ROLES`, comma-separated).
    /// Tiers 0 and 1 have full access; tier 2 is limited to kick/mute.
    pub admin_roles: Vec<i64>,
    /// Commission rate on transfers (`TRANSFER_COMMISSION_RATE`).
    pub transfer_commission_rate: f64,
    /// Starting balance for new members (`INITIAL_MONEY`).
    pub initial_money: i64,
    /// Starting message count for new members (`INITIAL_MESSAGES`).
    pub initial_messages: i64,
    /// Role IDs that grant profile badges (`BADGE_ROLES`, comma-separated).
    pub badge_roles: Vec<i64>,
    /// Contributor badge role (`CONTRIBUTOR_ROLE_ID`).
    pub contributor_role_id: i64,
    /// Tester badge role (`TESTER_ROLE_ID`).
    pub tester_role_id: i64,
    /// Maintainer badge role (`MAINTAINER_ROLE_ID`).
    pub maintainer_role_id: i64,
    /// Database file location (`DATABASE_PATH`).
    pub database_path: String,
    /// Activity text shown in the bot's presence (`BOT_ACTIVITY_NAME`).
    pub bot_activity_name: String,
    /// Voice minutes credited per reward tick (`VOICE_TIME_REWARD`).
    pub voice_time_reward: i64,
    /// Currency credited per reward tick (`VOICE_MONEY_REWARD`).
    pub voice_money_reward: i64,
    /// Minutes between voice reward ticks (`VOICE_CHECK_INTERVAL`).
    pub voice_check_interval: i64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            discord_token: None,
            guild_id: 0,
            admin_roles: Vec::new(),
            transfer_commission_rate: DEFAULT_COMMISSION_RATE,
            initial_money: DEFAULT_INITIAL_MONEY,
            initial_messages: DEFAULT_INITIAL_MESSAGES,
            badge_roles: Vec::new(),
            contributor_role_id: 0,
            tester_role_id: 0,
            maintainer_role_id: 0,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            bot_activity_name: "Playing".to_string(),
            voice_time_reward: 1,
            voice_money_reward: 20,
            voice_check_interval: 1,
        }
    }
}

impl BotSettings {
    /// Load settings from the current process environment.
    ///
    /// Callers are expected to have loaded the deploy root's `.env` into the
    /// environment first (via dotenvy in the composition root).
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            guild_id: env_i64("GUILD_ID", defaults.guild_id),
            admin_roles: env_id_list("ADMIN_ROLES"),
            transfer_commission_rate: env_f64(
                "TRANSFER_COMMISSION_RATE",
                defaults.transfer_commission_rate,
            ),
            initial_money: env_i64("INITIAL_MONEY", defaults.initial_money),
            initial_messages: env_i64("INITIAL_MESSAGES", defaults.initial_messages),
            badge_roles: env_id_list("BADGE_ROLES"),
            contributor_role_id: env_i64("CONTRIBUTOR_ROLE_ID", 0),
            tester_role_id: env_i64("TESTER_ROLE_ID", 0),
            maintainer_role_id: env_i64("MAINTAINER_ROLE_ID", 0),
            database_path: std::env::var("DATABASE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.database_path),
            bot_activity_name: std::env::var("BOT_ACTIVITY_NAME")
                .unwrap_or(defaults.bot_activity_name),
            voice_time_reward: env_i64("VOICE_TIME_REWARD", defaults.voice_time_reward),
            voice_money_reward: env_i64("VOICE_MONEY_REWARD", defaults.voice_money_reward),
            voice_check_interval: env_i64("VOICE_CHECK_INTERVAL", defaults.voice_check_interval),
        }
    }

    /// The token with all but the first few characters masked, for display.
    #[must_use]
    pub fn redacted_token(&self) -> String {
        match &self.discord_token {
            // Count and slice by chars; operator-edited tokens are not
            // guaranteed to be ASCII
            Some(token) if token.chars().count() > 8 => {
                let prefix: String = token.chars().take(8).collect();
                format!("{prefix}…")
            }
            Some(_) => "(set)".to_string(),
            None => "(unset)".to_string(),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("DISCORD_TOKEN is not set; edit the .env file before launching")]
    MissingToken,

    #[error("TRANSFER_COMMISSION_RATE must be between 0.0 and 1.0, got {0}")]
    InvalidCommissionRate(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },
}

/// Validate settings for a bot launch.
///
/// `env show` deliberately skips this so a half-configured deployment can
/// still be inspected; `start` must not.
pub fn validate_settings(settings: &BotSettings) -> Result<(), SettingsError> {
    if settings.discord_token.is_none() {
        return Err(SettingsError::MissingToken);
    }

    if !(0.0..=1.0).contains(&settings.transfer_commission_rate) {
        return Err(SettingsError::InvalidCommissionRate(
            settings.transfer_commission_rate,
        ));
    }

    for (name, value) in [
        ("VOICE_TIME_REWARD", settings.voice_time_reward),
        ("VOICE_MONEY_REWARD", settings.voice_money_reward),
        ("VOICE_CHECK_INTERVAL", settings.voice_check_interval),
    ] {
        if value <= 0 {
            return Err(SettingsError::NonPositive { name, value });
        }
    }

    Ok(())
}

fn env_i64(key: &str, default: i64) -> i64 {
    parse_i64(key, std::env::var(key).ok().as_deref(), default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    parse_f64(key, std::env::var(key).ok().as_deref(), default)
}

fn env_id_list(key: &str) -> Vec<i64> {
    parse_id_list(std::env::var(key).ok().as_deref())
}

fn parse_i64(key: &str, raw: Option<&str>, default: i64) -> i64 {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = raw, "Malformed integer in environment, using default");
            default
        }),
        _ => default,
    }
}

fn parse_f64(key: &str, raw: Option<&str>, default: f64) -> f64 {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = raw, "Malformed float in environment, using default");
            default
        }),
        _ => default,
    }
}

/// Parse a comma-separated list of role IDs, skipping empty and malformed
/// segments.
fn parse_id_list(raw: Option<&str>) -> Vec<i64> {
    match raw {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bot_defaults() {
        let settings = BotSettings::default();
        assert_eq!(settings.transfer_commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(settings.initial_money, DEFAULT_INITIAL_MONEY);
        assert_eq!(settings.initial_messages, DEFAULT_INITIAL_MESSAGES);
        assert_eq!(settings.database_path, "club.db");
        assert_eq!(settings.voice_money_reward, 20);
    }

    #[test]
    fn validate_requires_token() {
        let settings = BotSettings::default();
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::MissingToken)
        ));
    }

    #[test]
    fn validate_rejects_bad_commission() {
        let settings = BotSettings {
            discord_token: Some("token".to_string()),
            transfer_commission_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidCommissionRate(_))
        ));
    }

    #[test]
    fn validate_accepts_configured_settings() {
        let settings = BotSettings {
            discord_token: Some("token".to_string()),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn redacted_token_masks_value() {
        let settings = BotSettings {
            discord_token: Some("MTAxMjM0NTY3ODkw.secret".to_string()),
            ..Default::default()
        };
        let redacted = settings.redacted_token();
        assert!(redacted.starts_with("MTAxMjM0"));
        assert!(!redacted.contains("secret"));
    }

    #[test]
    fn redacted_token_handles_multibyte_tokens() {
        // Operator-pasted tokens can contain non-ASCII; redaction must not
        // slice inside a char
        let settings = BotSettings {
            discord_token: Some("xтокен-секрет".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.redacted_token(), "xтокен-с…");
    }

    #[test]
    fn malformed_integer_falls_back_to_default() {
        assert_eq!(parse_i64("GUILD_ID", Some("not-a-number"), 7), 7);
        assert_eq!(parse_i64("GUILD_ID", Some("12.5"), 7), 7);
        assert_eq!(parse_i64("GUILD_ID", Some(" 42 "), 7), 42);
    }

    #[test]
    fn empty_or_unset_integer_uses_default() {
        assert_eq!(parse_i64("INITIAL_MONEY", Some(""), 10), 10);
        assert_eq!(parse_i64("INITIAL_MONEY", Some("   "), 10), 10);
        assert_eq!(parse_i64("INITIAL_MONEY", None, 10), 10);
    }

    #[test]
    fn malformed_float_falls_back_to_default() {
        assert_eq!(
            parse_f64("TRANSFER_COMMISSION_RATE", Some("ten percent"), 0.1),
            0.1
        );
        assert_eq!(parse_f64("TRANSFER_COMMISSION_RATE", Some("0.25"), 0.1), 0.25);
        assert_eq!(parse_f64("TRANSFER_COMMISSION_RATE", None, 0.1), 0.1);
    }

    #[test]
    fn id_list_skips_malformed_and_empty_segments() {
        assert_eq!(
            parse_id_list(Some("123, bad,456,,789x, 10")),
            vec![123, 456, 10]
        );
        assert_eq!(parse_id_list(Some("")), Vec::<i64>::new());
        assert_eq!(parse_id_list(None), Vec::<i64>::new());
    }
}
