// src/exec/tool_runner.rs

//! Single tool process runner.

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{Result, ZigwatchError};
use crate::types::ToolCommand;

/// Run `cmd` in `cwd` and wait for it to exit.
///
/// stdout/stderr are inherited so compiler diagnostics and the program's own
/// output land directly in the user's terminal. With `timeout` set, a child
/// still running after the limit is killed and `ToolTimedOut` is returned.
pub async fn run_tool(cmd: &ToolCommand, cwd: &Path, timeout: Option<Duration>) -> Result<()> {
    info!(cmd = %cmd, cwd = ?cwd, "starting tool process");

    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args).current_dir(cwd).kill_on_drop(true);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(program = %cmd.program, error = %err, "tool executable not found");
            return Err(ZigwatchError::ToolNotFound {
                tool: cmd.program.clone(),
            });
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("spawning process for `{cmd}`"))
                .into());
        }
    };

    let waited = match timeout {
        Some(limit) => {
            let raced = tokio::time::timeout(limit, child.wait()).await;
            match raced {
                Ok(res) => res,
                Err(_elapsed) => {
                    warn!(cmd = %cmd, timeout_secs = limit.as_secs_f64(), "tool timed out; killing process");
                    if let Err(e) = child.kill().await {
                        warn!(cmd = %cmd, error = %e, "failed to kill timed-out process");
                    }
                    return Err(ZigwatchError::ToolTimedOut {
                        command: cmd.to_string(),
                        timeout: limit,
                    });
                }
            }
        }
        None => child.wait().await,
    };

    let status = waited.with_context(|| format!("waiting for process of `{cmd}`"))?;

    info!(
        cmd = %cmd,
        exit_code = ?status.code(),
        success = status.success(),
        "tool process exited"
    );

    if status.success() {
        Ok(())
    } else {
        Err(ZigwatchError::ToolExecutionFailed {
            command: cmd.to_string(),
            code: status.code(),
        })
    }
}
