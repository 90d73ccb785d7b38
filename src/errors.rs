// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZigwatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The tool ran but exited unsuccessfully.
    #[error("`{command}` exited with {}", describe_exit(.code))]
    ToolExecutionFailed { command: String, code: Option<i32> },

    /// The tool executable could not be located.
    #[error("'{tool}' command not found. Make sure it is installed and in your PATH.")]
    ToolNotFound { tool: String },

    #[error("`{command}` timed out after {}s and was killed", .timeout.as_secs_f64())]
    ToolTimedOut { command: String, timeout: Duration },

    /// The mandatory build before watching starts did not succeed. The
    /// underlying tool error is the `source`.
    #[error("initial build failed")]
    InitialBuildFailed(#[source] Box<ZigwatchError>),

    #[error("File watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZigwatchError {
    /// Errors the reactor reports and then keeps watching.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ZigwatchError::ToolExecutionFailed { .. }
                | ZigwatchError::ToolNotFound { .. }
                | ZigwatchError::ToolTimedOut { .. }
        )
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ZigwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_failure_mentions_command_and_code() {
        let err = ZigwatchError::ToolExecutionFailed {
            command: "zig fmt src/main.zig".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`zig fmt src/main.zig` exited with exit status 1");
    }

    #[test]
    fn signal_exit_is_described() {
        let err = ZigwatchError::ToolExecutionFailed {
            command: "zig build run".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn only_tool_errors_are_recoverable() {
        assert!(ZigwatchError::ToolNotFound { tool: "zig".into() }.is_recoverable());
        assert!(
            ZigwatchError::ToolTimedOut {
                command: "zig build run".into(),
                timeout: Duration::from_secs(1),
            }
            .is_recoverable()
        );
        let fatal = ZigwatchError::InitialBuildFailed(Box::new(ZigwatchError::ToolNotFound {
            tool: "zig".into(),
        }));
        assert!(!fatal.is_recoverable());
        assert!(!ZigwatchError::ConfigError("bad".into()).is_recoverable());
    }
}
