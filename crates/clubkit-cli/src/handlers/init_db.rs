//! Database initialization handler.
//!
//! Creates the bot database file and its schema. Safe to run against a
//! database the bot has already populated.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the init-db command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let db_file = ctx.database_file();
    ctx.stats_repository().await?;
    println!("  database: {} ready", db_file.display());
    Ok(())
}
