//! Runtime configuration.
//!
//! Built from command-line flags and environment variables:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `CONTACT_FORM_LOG` | tracing filter directive, e.g. `debug` or `contact_form=trace` |
//! | `CONTACT_FORM_LOG_FILE` | write logs to this file (logging is off without it) |

use std::path::PathBuf;

pub const LOG_FILTER_ENV: &str = "CONTACT_FORM_LOG";
pub const LOG_FILE_ENV: &str = "CONTACT_FORM_LOG_FILE";

/// Filter used when `CONTACT_FORM_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// tracing filter directive
    pub log_filter: String,
    /// Log destination; `None` disables logging (stdout belongs to the TUI)
    pub log_file: Option<PathBuf>,
    /// Print the last submission as JSON after the TUI exits
    pub print_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            print_json: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_print_json(mut self, print_json: bool) -> Self {
        self.print_json = print_json;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup, so tests
    /// don't have to touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter.trim());
        }
        if let Some(path) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_file(path.trim());
        }
        config
    }
}
