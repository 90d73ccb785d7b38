// src/watch/mod.rs

//! File watching.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform recursive watcher (`notify`).
//! - Turning raw `notify` events into [`FileChangeEvent`]s with
//!   root-relative paths.
//! - Handing those to the runtime over its event channel.
//!
//! It does **not** decide which changes matter; that is
//! [`crate::engine::filter`]'s job.
//!
//! [`FileChangeEvent`]: crate::types::FileChangeEvent

pub mod event_handler;
pub mod path_utils;
pub mod watcher;

pub use event_handler::{change_events, is_modification};
pub use watcher::{spawn_watcher, WatcherHandle};
