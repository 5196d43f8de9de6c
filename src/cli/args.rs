//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the form (default)
    RunTui {
        /// Print the last submission as JSON on exit
        print_json: bool,
    },
}

/// Parse command-line arguments (program name first).
///
/// Unknown flags are ignored.
///
/// ```
/// use contact_form::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["contact-form".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut print_json = false;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--json" => print_json = true,
            _ => {}
        }
    }
    CliCommand::RunTui { print_json }
}
