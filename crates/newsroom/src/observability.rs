//! Logging setup for the CLI.
//!
//! Human-readable logs always go to stderr so stdout stays clean for command
//! output and the MCP stdio transport. JSONL file logging is opt-in through
//! `NEWSROOM_LOG_PATH`, `NEWSROOM_LOG_DIR` or the `log_dir` config key.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Explicit log file path (takes precedence over the directory).
pub const LOG_PATH_ENV: &str = "NEWSROOM_LOG_PATH";
/// Directory for daily-rotated log files.
pub const LOG_DIR_ENV: &str = "NEWSROOM_LOG_DIR";

const LOG_FILE_PREFIX: &str = "newsroom.jsonl";

/// Where, if anywhere, JSONL logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Single log file, never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory receiving daily-rotated `newsroom.jsonl.*` files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read log destinations from the environment, falling back to the
    /// configured `log_dir` when `NEWSROOM_LOG_DIR` is unset.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from), config_log_dir)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: PathBuf| (!p.as_os_str().is_empty()).then_some(p);
        Self {
            log_path: lookup(LOG_PATH_ENV).and_then(non_empty),
            log_dir: lookup(LOG_DIR_ENV).and_then(non_empty).or(config_log_dir),
        }
    }

    /// Whether any file destination is configured.
    pub const fn writes_file(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` and up trace, and no flag falls back to the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, default_level))
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; keep it
/// alive until exit so buffered lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        )));
    }

    Ok(None)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<PathBuf> {
        let map: HashMap<String, PathBuf> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), PathBuf::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_destinations_by_default() {
        let cfg = ObservabilityConfig::from_lookup(lookup(&[]), None);
        assert_eq!(cfg, ObservabilityConfig::default());
        assert!(!cfg.writes_file());
    }

    #[test]
    fn env_dir_overrides_config_dir() {
        let cfg = ObservabilityConfig::from_lookup(
            lookup(&[(LOG_DIR_ENV, "/var/log/newsroom")]),
            Some(PathBuf::from("/tmp/config-logs")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/newsroom")));
    }

    #[test]
    fn config_dir_used_when_env_unset() {
        let cfg =
            ObservabilityConfig::from_lookup(lookup(&[]), Some(PathBuf::from("/tmp/logs")));
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(cfg.writes_file());
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let cfg =
            ObservabilityConfig::from_lookup(lookup(&[(LOG_PATH_ENV, ""), (LOG_DIR_ENV, "")]), None);
        assert!(!cfg.writes_file());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_directive(true, 2, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 3, "info"), "trace");
    }

    #[test]
    fn file_appender_creates_log_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("nested/logs");
        let cfg = ObservabilityConfig {
            log_path: None,
            log_dir: Some(dir.clone()),
        };
        assert!(file_appender(&cfg).unwrap().is_some());
        assert!(dir.is_dir());
    }

    #[test]
    fn file_appender_none_without_destination() {
        assert!(
            file_appender(&ObservabilityConfig::default())
                .unwrap()
                .is_none()
        );
    }
}
