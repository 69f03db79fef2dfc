//! Process runtime and OS-level concerns for clubkit.
//!
//! This crate owns everything that touches the operating system on the
//! bot's behalf: interpreter resolution, virtual environment provisioning,
//! process spawning and shutdown, pid-file tracking, and system dependency
//! probing. Domain decisions stay in `clubkit-core`; the CLI composes the
//! two.

pub mod command;
pub mod interpreter;
pub mod pidfile;
pub mod probe;
pub mod runner;
pub mod venv;

pub use interpreter::resolve_interpreter;
pub use pidfile::{PidFileData, delete_pidfile, read_pidfile, write_pidfile};
pub use probe::DefaultSystemProbe;
pub use runner::LocalBotRunner;
