//! `--version` and `--help` output.

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: contact-form [OPTIONS]

Options:
  --json         Print the last submission as JSON on exit
  -V, --version  Print version
  -h, --help     Print this help

Environment:
  CONTACT_FORM_LOG       Log filter directive (default: info)
  CONTACT_FORM_LOG_FILE  Write logs to this file";

pub fn version_string() -> String {
    format!("contact-form {}", VERSION)
}
