//! CLI entry point - the composition root.
//!
//! Parses arguments, wires up infrastructure via bootstrap, dispatches to
//! handlers, and maps every outcome to a process exit code. Foreground bot
//! runs exit with the bot's own code so supervisors see the real result.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clubkit_cli::handlers::start::StartArgs;
use clubkit_cli::{Cli, CliError, Commands, bootstrap, handlers};
use clubkit_runtime::DefaultSystemProbe;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose lowers the default threshold but an
    // explicit RUST_LOG still wins
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32, CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Io(e.to_string()))?;
        return Ok(0);
    };

    // check-deps needs no deploy root; everything else bootstraps one
    if let Commands::CheckDeps = command {
        handlers::check_deps::execute(&DefaultSystemProbe)?;
        return Ok(0);
    }

    let ctx = bootstrap(cli.dir.as_deref())?;

    match command {
        Commands::CheckDeps => unreachable!("handled above"),
        Commands::Paths => handlers::paths::execute(&ctx)?,
        Commands::Setup => handlers::setup::execute(&ctx).await?,
        Commands::InitDb => handlers::init_db::execute(&ctx).await?,
        Commands::Env { command } => handlers::env::execute(&ctx, &command)?,
        Commands::Start {
            strict,
            detach,
            skip_install,
        } => {
            let code = handlers::start::execute(
                &ctx,
                StartArgs {
                    strict,
                    detach,
                    skip_install,
                },
            )
            .await?;
            return Ok(code);
        }
        Commands::Stop => handlers::stop::execute(&ctx).await?,
        Commands::Status { json } => handlers::status::execute(&ctx, json).await?,
        Commands::Top { kind, limit } => handlers::top::execute(&ctx, kind, limit).await?,
    }

    Ok(0)
}
