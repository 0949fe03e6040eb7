//! Tracing setup.
//!
//! The popup draws on the terminal, so log lines only ever go to a file and
//! logging is skipped entirely when no file is configured.

use crate::config::LoggingConfig;
use std::fs::{File, OpenOptions};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the logging config.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `level`.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(file) = open_log_file(config) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(&config.level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // Another subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

/// The configured log file, opened for appending; `None` leaves logging off.
fn open_log_file(config: &LoggingConfig) -> Option<File> {
    let path = config.file.as_ref()?;
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            None
        }
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
