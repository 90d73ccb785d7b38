// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the external tools (formatter and builder) with
//! `tokio::process::Command` and maps their fate onto
//! [`ZigwatchError`](crate::errors::ZigwatchError) variants:
//!
//! - [`tool_runner`] spawns one process, waits for it (optionally with a
//!   timeout) and classifies the result.
//! - [`backend`] provides the `ToolRunner` trait and the concrete
//!   `ProcessToolRunner` the reactor uses in production, and which tests can
//!   replace with a scripted fake.

pub mod backend;
pub mod tool_runner;

pub use backend::{ProcessToolRunner, ToolRunner};
pub use tool_runner::run_tool;
