// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{RawReactorConfig, ReactorConfig};
use crate::errors::{Result, ZigwatchError};
use crate::types::ToolCommand;

impl TryFrom<RawReactorConfig> for ReactorConfig {
    type Error = crate::errors::ZigwatchError;

    fn try_from(raw: RawReactorConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ReactorConfig::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawReactorConfig) -> Result<()> {
    validate_watch_root(cfg)?;
    validate_suffix(cfg)?;
    validate_ignored_substrings(cfg)?;
    validate_tool("formatter", &cfg.formatter)?;
    validate_tool("builder", &cfg.builder)?;
    validate_timeout(cfg.tool_timeout)?;
    Ok(())
}

fn validate_watch_root(cfg: &RawReactorConfig) -> Result<()> {
    if cfg.watch_root.as_os_str().is_empty() {
        return Err(ZigwatchError::ConfigError(
            "watch root must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_suffix(cfg: &RawReactorConfig) -> Result<()> {
    if cfg.file_suffix.is_empty() {
        return Err(ZigwatchError::ConfigError(
            "file suffix must not be empty".to_string(),
        ));
    }
    Ok(())
}

// An empty substring is contained in every path and would drop all events.
fn validate_ignored_substrings(cfg: &RawReactorConfig) -> Result<()> {
    if cfg.ignored_path_substrings.iter().any(|s| s.is_empty()) {
        return Err(ZigwatchError::ConfigError(
            "ignored path substrings must not contain an empty string".to_string(),
        ));
    }
    Ok(())
}

fn validate_tool(role: &str, cmd: &ToolCommand) -> Result<()> {
    if cmd.program.trim().is_empty() {
        return Err(ZigwatchError::ConfigError(format!(
            "{role} program must not be empty"
        )));
    }
    Ok(())
}

fn validate_timeout(timeout: Option<Duration>) -> Result<()> {
    if timeout == Some(Duration::ZERO) {
        return Err(ZigwatchError::ConfigError(
            "tool timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_config_error(raw: RawReactorConfig, needle: &str) {
        match ReactorConfig::try_from(raw) {
            Err(ZigwatchError::ConfigError(msg)) => assert!(
                msg.contains(needle),
                "message {msg:?} should mention {needle:?}"
            ),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = ReactorConfig::try_from(RawReactorConfig::default()).unwrap();
        assert_eq!(cfg.file_suffix(), ".zig");
        assert!(cfg.ignored_path_substrings().contains(".zig-cache"));
        assert!(cfg.ignored_path_substrings().contains("zig-out"));
        assert_eq!(cfg.formatter().to_string(), "zig fmt");
        assert_eq!(cfg.builder().to_string(), "zig build run");
        assert_eq!(cfg.tool_timeout(), None);
    }

    #[test]
    fn empty_ignore_substring_is_rejected() {
        let mut raw = RawReactorConfig::default();
        raw.ignored_path_substrings.insert(String::new());
        expect_config_error(raw, "empty string");
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let mut raw = RawReactorConfig::default();
        raw.file_suffix.clear();
        expect_config_error(raw, "suffix");
    }

    #[test]
    fn blank_builder_program_is_rejected() {
        let mut raw = RawReactorConfig::default();
        raw.builder.program = "  ".to_string();
        expect_config_error(raw, "builder");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut raw = RawReactorConfig::default();
        raw.tool_timeout = Some(Duration::ZERO);
        expect_config_error(raw, "timeout");
    }

    #[test]
    fn empty_ignore_set_is_allowed() {
        let mut raw = RawReactorConfig::default();
        raw.ignored_path_substrings.clear();
        assert!(ReactorConfig::try_from(raw).is_ok());
    }
}
