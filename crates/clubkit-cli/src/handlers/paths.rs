//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.
//! This is the "golden truth" tool for path resolution issues.

use clubkit_core::ResolvedPaths;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves and displays all paths for the deploy root in `key = value`
/// format.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let paths = ResolvedPaths::resolve(ctx.deploy_root(), &ctx.settings.database_path);
    println!("{paths}");
    Ok(())
}
