//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the bot deployment toolkit.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "clubkit")]
#[command(about = "Deploy and supervise the club's Discord bot")]
#[command(version)]
pub struct Cli {
    /// Deploy root to operate on (defaults to $CLUBKIT_HOME, then the
    /// current directory)
    #[arg(long = "dir", global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from(["clubkit", "--verbose", "--dir", "/srv/bot", "status"]);
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/bot")));
    }
}
