//! File-based tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file or nowhere. Logging is
//! enabled only when [`AppConfig::log_file`] is set.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{ContactFormError, FormResult};

/// Parse a filter directive such as `info` or `contact_form=debug`.
pub fn build_filter(directive: &str) -> FormResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| ContactFormError::LogFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> FormResult<File> {
    let to_err = |source| ContactFormError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_err)
}

/// A plain-text fmt subscriber writing to `file`.
pub fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish()
}

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init_logging(config: &AppConfig) -> FormResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let filter = build_filter(&config.log_filter)?;
    let file = open_log_file(path)?;

    tracing::subscriber::set_global_default(file_subscriber(filter, file))
        .map_err(|_| ContactFormError::LoggingAlreadyInitialised)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_file = %path.display(), "logging started");
    Ok(true)
}
