//! Setup command handler.
//!
//! Prepares a deploy root end to end: workspace directories, the `.env`
//! file, the virtual environment with installed dependencies, and the bot
//! database. Every step is idempotent, so rerunning `setup` on an existing
//! deployment is safe.

use clubkit_core::paths::{EnvProvision, PathError, provision_env_file, scaffold_workspace};
use clubkit_runtime::venv::{ensure_venv, install_dependencies};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::init_db;

/// Execute the setup command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let root = ctx.deploy_root();

    println!("Setting up deploy root: {}", root.display());

    let dirs = scaffold_workspace(root)?;
    let created = dirs.iter().filter(|(_, created)| *created).count();
    println!("  directories: {created} created, {} existing", dirs.len() - created);

    match provision_env_file(root) {
        Ok(EnvProvision::CreatedFromTemplate) => {
            println!("  .env: created from env.example");
            println!("        edit it and set DISCORD_TOKEN before starting the bot");
        }
        Ok(EnvProvision::AlreadyPresent) => {
            println!("  .env: already present");
        }
        Err(PathError::TemplateMissing(template)) => {
            // A source checkout always has the template; its absence is
            // worth flagging but should not block venv or database setup.
            warn!(template = %template.display(), "No env.example template found");
            println!("  .env: skipped (no env.example template)");
        }
        Err(e) => return Err(e.into()),
    }

    ensure_venv(root).await?;
    println!("  venv: ready");

    install_dependencies(root).await?;
    println!("  dependencies: installed");

    init_db::execute(ctx).await?;

    println!("Setup complete.");
    Ok(())
}
