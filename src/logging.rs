// src/logging.rs

//! Log subscriber for `zigwatch`.
//!
//! The filter comes from `--log-level` when given, otherwise from the
//! `ZIGWATCH_LOG` directives (e.g. `debug` or `zigwatch=trace,notify=warn`),
//! otherwise `info`. Logs go to stderr; stdout is reserved for status lines
//! and the tools' own output.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "ZIGWATCH_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn build_filter(cli_level: Option<LogLevel>, env_directives: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(directive(level)));
    }

    match env_directives.map(str::trim) {
        Some(spec) if !spec.is_empty() => EnvFilter::try_new(spec)
            .with_context(|| format!("invalid {LOG_ENV} value {spec:?}")),
        _ => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

fn directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn cli_flag_wins_over_env() {
        let filter = build_filter(Some(LogLevel::Warn), Some("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn env_directives_are_used_without_flag() {
        let filter = build_filter(None, Some(" zigwatch=debug,notify=warn ")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn blank_or_missing_env_defaults_to_info() {
        for env in [None, Some(""), Some("   ")] {
            let filter = build_filter(None, env).unwrap();
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        }
    }

    #[test]
    fn malformed_env_is_rejected() {
        let err = build_filter(None, Some("zigwatch=loud")).unwrap_err();
        assert!(err.to_string().contains(LOG_ENV));
    }
}
