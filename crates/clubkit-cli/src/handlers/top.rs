//! Leaderboard command handler.
//!
//! Reads the same rankings the bot shows in chat, straight from the
//! database, for operators who want them without going through Discord.

use clubkit_core::LeaderboardKind;

use crate::bootstrap::CliContext;
use crate::commands::TopKind;
use crate::error::CliError;

/// Execute the top command.
pub async fn execute(ctx: &CliContext, kind: TopKind, limit: u32) -> Result<(), CliError> {
    if limit == 0 {
        return Err(CliError::Arguments("limit must be at least 1".to_string()));
    }

    let repo = ctx.stats_repository().await?;
    let kind: LeaderboardKind = kind.into();
    let entries = repo.leaderboard(kind, limit).await?;

    if entries.is_empty() {
        println!("No members recorded yet");
        return Ok(());
    }

    println!("Top {} by {}", entries.len(), kind.label());
    for (rank, entry) in entries.iter().enumerate() {
        println!("{:>3}. user {:<20} {}", rank + 1, entry.user_id, entry.value);
    }
    Ok(())
}
