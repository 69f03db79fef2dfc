//! Command handlers.
//!
//! Each handler takes the composed `CliContext` (or the probe, for
//! commands that never touch the deploy root's state) and performs one
//! command's work. Handlers own presentation; domain logic stays in the
//! core and runtime crates.

pub mod check_deps;
pub mod env;
pub mod init_db;
pub mod paths;
pub mod setup;
pub mod start;
pub mod status;
pub mod stop;
pub mod top;
