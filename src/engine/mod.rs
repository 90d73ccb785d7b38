// src/engine/mod.rs

//! Change handling engine for zigwatch.
//!
//! This module ties together:
//! - the pure filtering predicate ([`filter`])
//! - the [`ChangeReactor`], which turns a qualifying change into
//!   "format, then build" and reports the outcome ([`reactor`])
//! - the runtime loop that feeds watcher events into the reactor one at a
//!   time and stops on shutdown ([`runtime`])

/// Which of the two tool invocations a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Format,
    Build,
}

/// How a tool invocation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Tool ran and exited non-zero (`None` when killed by a signal).
    ExitedWithError(Option<i32>),
    /// Tool executable missing.
    NotFound,
    /// Tool exceeded `--tool-timeout` and was killed.
    TimedOut,
    /// Anything else, e.g. permission denied while spawning.
    Other(String),
}

/// What `ChangeReactor::on_event` did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored(IgnoreReason),
    Built,
    Failed { step: Step, kind: FailureKind },
}

pub mod filter;
pub mod reactor;
pub mod runtime;

pub use filter::{classify, IgnoreReason, Verdict};
pub use reactor::ChangeReactor;
pub use runtime::Runtime;
