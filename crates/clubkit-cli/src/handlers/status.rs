//! Status command handler.

use chrono::{DateTime, Local};
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the status command.
pub async fn execute(ctx: &CliContext, as_json: bool) -> Result<(), CliError> {
    let handle = ctx.runner.status().await?;

    if as_json {
        let value = match handle {
            Some(h) => json!({
                "running": true,
                "pid": h.pid,
                "started_at": h.started_at,
            }),
            None => json!({ "running": false }),
        };
        println!("{value}");
        return Ok(());
    }

    match handle {
        Some(h) => {
            println!("Bot is running (PID {})", h.pid);
            if let Some(started) = DateTime::from_timestamp(h.started_at as i64, 0) {
                let local: DateTime<Local> = started.into();
                println!("Started: {}", local.format("%Y-%m-%d %H:%M:%S"));
            }
        }
        None => println!("Bot is not running"),
    }
    Ok(())
}
