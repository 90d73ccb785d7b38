use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zigwatch::errors::{Result, ZigwatchError};
use zigwatch::exec::ToolRunner;
use zigwatch::types::ToolCommand;

/// What the fake should pretend happened for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    Succeed,
    Exit(i32),
    NotFound,
    TimedOut,
}

/// A fake tool runner that:
/// - records every command line it was asked to run, in order
/// - answers each call with the next scripted outcome, or success once the
///   script is exhausted.
#[derive(Debug, Clone, Default)]
pub struct FakeToolRunner {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl FakeToolRunner {
    /// Runner on which every tool succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner answering calls with `outcomes` in order.
    pub fn scripted(outcomes: impl IntoIterator<Item = Scripted>) -> Self {
        let runner = Self::new();
        runner.script.lock().unwrap().extend(outcomes);
        runner
    }

    /// Recorded command lines, e.g. `"zig fmt src/main.zig"`.
    pub fn recorded(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a ToolCommand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let line = cmd.to_string();
        self.invocations.lock().unwrap().push(line.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Scripted::Succeed);

        Box::pin(async move {
            match next {
                Scripted::Succeed => Ok(()),
                Scripted::Exit(code) => Err(ZigwatchError::ToolExecutionFailed {
                    command: line,
                    code: Some(code),
                }),
                Scripted::NotFound => Err(ZigwatchError::ToolNotFound {
                    tool: cmd.program.clone(),
                }),
                Scripted::TimedOut => Err(ZigwatchError::ToolTimedOut {
                    command: line,
                    timeout: Duration::from_secs(1),
                }),
            }
        })
    }
}
