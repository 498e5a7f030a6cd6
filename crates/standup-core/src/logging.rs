//! File logging.
//!
//! The terminal belongs to the dashboard, so tracing output goes to
//! ${STANDUP_HOME}/logs/standup.log instead of stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

/// Environment variable that overrides `log.filter`.
pub const LOG_ENV: &str = "STANDUP_LOG";

const LOG_FILE: &str = "standup.log";

/// Installs the global subscriber.
///
/// Returns `None` when logging is disabled. Keep the guard alive for the
/// life of the process; dropping it flushes and stops the writer thread.
///
/// # Errors
/// Returns an error if the log directory cannot be created or the filter
/// does not parse.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }
    init_in(&paths::logs_dir(), config)
}

/// Like [`init`], writing into `dir`.
///
/// # Errors
/// Returns an error if the log directory cannot be created or the filter
/// does not parse.
pub fn init_in(dir: &Path, config: &LogConfig) -> Result<Option<WorkerGuard>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.filter)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // A second init (tests, embedding) keeps the first subscriber.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(dir = %dir.display(), "logging initialized");
    }

    Ok(Some(guard))
}

/// Environment override wins over the configured directive.
fn build_filter(env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let directive = env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(configured);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_env_overrides_configured_filter() {
        let filter = build_filter(Some("debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_blank_env_falls_back() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_disabled_returns_no_guard() {
        let config = LogConfig {
            enabled: false,
            ..LogConfig::default()
        };
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_init_creates_directory() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");
        let guard = init_in(&logs, &LogConfig::default()).unwrap();
        assert!(guard.is_some());
        assert!(logs.is_dir());
    }
}
