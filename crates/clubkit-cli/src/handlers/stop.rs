//! Stop command handler.

use clubkit_core::ProcessError;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the stop command.
///
/// Stopping a bot that is not running is reported but not an error, so
/// `clubkit stop` is safe in shutdown scripts.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    match ctx.runner.stop().await {
        Ok(()) => {
            println!("Bot stopped");
            Ok(())
        }
        Err(ProcessError::NotRunning) => {
            println!("Bot is not running");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
