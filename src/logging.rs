//! File logging
//!
//! The terminal belongs to the UI, so log output goes to a daily rolling file
//! in the config directory. `RUST_LOG` overrides the configured level.

use crate::config::Config;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "workspace-tui.log";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Returns the writer guard, which must be held until exit so buffered lines
/// are flushed. Any setup failure leaves logging disabled.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let dir = Config::log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
