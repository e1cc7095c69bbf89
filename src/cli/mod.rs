//! Command-line interface.
//!
//! Called first in `main`, before the terminal is touched:
//!
//! ```ignore
//! use hrbuddie::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let config = run_cli_command(command);
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

use crate::config::ShellConfig;

/// Print usage and exit.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}

/// Handle informational commands, returning the config for a shell run.
///
/// `Version` and `Help` exit the process.
pub fn run_cli_command(command: CliCommand) -> ShellConfig {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(config) => config,
    }
}
