//! Command-line interface.
//!
//! `main` parses the arguments first; informational commands print and exit
//! before the terminal is touched.
//!
//! ```ignore
//! use contact_form::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // otherwise start the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{version_string, USAGE, VERSION};

/// Handle informational commands. Returns `true` when the command was fully
/// handled and the TUI should not start.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            true
        }
        CliCommand::Help => {
            println!("{USAGE}");
            true
        }
        CliCommand::RunTui { .. } => false,
    }
}
