// src/exec/backend.rs

//! Pluggable tool runner abstraction.
//!
//! The reactor talks to a `ToolRunner` instead of spawning processes itself.
//! This makes it easy to swap in a fake runner in tests while keeping the
//! production implementation in [`tool_runner`](super::tool_runner).

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use crate::errors::Result;
use crate::types::ToolCommand;

use super::tool_runner::run_tool;

/// Trait abstracting how an external tool is run to completion.
///
/// Implementations must resolve to:
/// - `Ok(())` when the tool exited with status 0,
/// - `ZigwatchError::ToolExecutionFailed` on a non-zero exit,
/// - `ZigwatchError::ToolNotFound` when the executable is missing,
/// - `ZigwatchError::ToolTimedOut` when a configured limit was exceeded.
pub trait ToolRunner: Send {
    fn run<'a>(
        &'a mut self,
        cmd: &'a ToolCommand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Runner that spawns real OS processes.
#[derive(Debug, Clone)]
pub struct ProcessToolRunner {
    cwd: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessToolRunner {
    /// Tools are started in `cwd`; `timeout` of `None` waits forever.
    pub fn new(cwd: impl AsRef<Path>, timeout: Option<Duration>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            timeout,
        }
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a ToolCommand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(run_tool(cmd, &self.cwd, self.timeout))
    }
}
