// src/engine/reactor.rs

//! The change reactor: filter, format, build, report.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, error, info, trace, warn};

use crate::config::ReactorConfig;
use crate::engine::filter::{classify, Verdict};
use crate::engine::{EventOutcome, FailureKind, Step};
use crate::errors::{Result, ZigwatchError};
use crate::exec::ToolRunner;
use crate::types::FileChangeEvent;

/// Prefix for every status line written to the console.
const STATUS_PREFIX: &str = "[zigwatch]";

/// Reacts to individual change events.
///
/// Stateless between events: each call to [`on_event`](Self::on_event)
/// is judged and handled on its own, with the formatter and builder awaited
/// to completion before returning.
///
/// Status lines go to `out` (stdout in production). Filtered-out events
/// write nothing.
pub struct ChangeReactor<R: ToolRunner> {
    config: ReactorConfig,
    runner: R,
    out: Box<dyn Write + Send>,
}

impl<R: ToolRunner> fmt::Debug for ChangeReactor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeReactor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: ToolRunner> ChangeReactor<R> {
    pub fn new(config: ReactorConfig, runner: R) -> Self {
        Self::with_output(config, runner, Box::new(io::stdout()))
    }

    /// Like [`new`](Self::new) but writing status lines to `out`.
    pub fn with_output(config: ReactorConfig, runner: R, out: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            runner,
            out,
        }
    }

    pub fn config(&self) -> &ReactorConfig {
        &self.config
    }

    /// Handle one filesystem change.
    ///
    /// A qualifying event runs the formatter on the changed file and, only
    /// if that succeeds, the project-wide builder. Tool failures are
    /// reported and swallowed so the caller can keep watching.
    pub async fn on_event(&mut self, event: FileChangeEvent) -> EventOutcome {
        if let Verdict::Ignored(reason) = classify(&self.config, &event) {
            trace!(path = %event.path, ?reason, "ignoring change event");
            return EventOutcome::Ignored(reason);
        }

        info!(path = %event.path, "qualifying change detected");
        write_status(
            &mut *self.out,
            format_args!(
                "Change detected: {}. Running `{}` and `{}`...",
                event.path,
                self.config.formatter(),
                self.config.builder()
            ),
        );

        let format_cmd = self.config.formatter().with_arg(&event.path);
        if let Err(err) = self.runner.run(&format_cmd).await {
            return self.report_failure(Step::Format, err);
        }

        if let Err(err) = self.runner.run(self.config.builder()).await {
            return self.report_failure(Step::Build, err);
        }

        write_status(&mut *self.out, format_args!("Build successful."));
        EventOutcome::Built
    }

    /// Run the builder once before watching starts.
    ///
    /// Any failure is fatal and wrapped in `InitialBuildFailed`.
    pub async fn initial_build(&mut self) -> Result<()> {
        info!(cmd = %self.config.builder(), "running initial build");
        if let Err(err) = self.runner.run(self.config.builder()).await {
            error!(error = %err, "initial build failed; not starting watcher");
            return Err(ZigwatchError::InitialBuildFailed(Box::new(err)));
        }
        Ok(())
    }

    /// Announce that the watcher is armed.
    pub fn watching_started(&mut self, root: &Path) {
        write_status(
            &mut *self.out,
            format_args!("Watching for file changes in {}", root.display()),
        );
    }

    fn report_failure(&mut self, step: Step, err: ZigwatchError) -> EventOutcome {
        let kind = match &err {
            ZigwatchError::ToolExecutionFailed { code, .. } => {
                write_status(&mut *self.out, format_args!("An error occurred: {err}"));
                FailureKind::ExitedWithError(*code)
            }
            ZigwatchError::ToolNotFound { .. } => {
                write_status(&mut *self.out, format_args!("Error: {err}"));
                FailureKind::NotFound
            }
            ZigwatchError::ToolTimedOut { .. } => {
                write_status(&mut *self.out, format_args!("Error: {err}"));
                FailureKind::TimedOut
            }
            other => {
                write_status(&mut *self.out, format_args!("Unexpected error: {other}"));
                FailureKind::Other(other.to_string())
            }
        };

        if err.is_recoverable() {
            warn!(?step, error = %err, "tool step failed; still watching");
        } else {
            error!(?step, error = %err, "unexpected error running tool; still watching");
        }
        EventOutcome::Failed { step, kind }
    }
}

fn write_status(out: &mut (dyn Write + Send), msg: fmt::Arguments<'_>) {
    let written = writeln!(out, "{STATUS_PREFIX} {msg}").and_then(|_| out.flush());
    if let Err(e) = written {
        debug!(error = %e, "failed to write status line");
    }
}
