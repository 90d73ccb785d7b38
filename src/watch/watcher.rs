// src/watch/watcher.rs

use std::fmt;
use std::path::{Path, PathBuf};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::errors::Result;
use crate::types::FileChangeEvent;
use crate::watch::event_handler::change_events;

/// Handle for the filesystem watcher.
///
/// Owns the underlying `RecommendedWatcher`; the watch stays armed for as
/// long as the handle lives. [`stop`](Self::stop) (or dropping the handle)
/// ends it, which also closes the forwarding task.
pub struct WatcherHandle {
    inner: Option<RecommendedWatcher>,
    root: PathBuf,
}

impl fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatcherHandle")
            .field("root", &self.root)
            .field("active", &self.inner.is_some())
            .finish()
    }
}

impl WatcherHandle {
    /// Canonical directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Unregister the watch and release the backend.
    pub fn stop(mut self) {
        if let Some(mut watcher) = self.inner.take() {
            if let Err(err) = watcher.unwatch(&self.root) {
                warn!(root = ?self.root, error = %err, "failed to unwatch root");
            }
        }
        info!("file watcher stopped");
    }
}

/// Spawn a filesystem watcher that observes `root` recursively and sends
/// a [`FileChangeEvent`] for every modified path under it.
///
/// The `notify` callback runs on the backend's own thread; it only forwards
/// raw events into an unbounded channel. A Tokio task converts them and
/// pushes them into `runtime_tx`. No filtering beyond "is this a modification" happens here.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<FileChangeEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    // Canonicalize once so event paths can be relativized against it.
    let root = root.canonicalize().unwrap_or_else(|_| root.clone());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if event_tx.send(event).is_err() {
                    trace!("watcher forwarding channel closed; dropping event");
                }
            }
            Err(err) => {
                warn!(error = %err, "file watch error");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!(root = ?root, "file watcher started");

    let async_root = root.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            trace!(?event, "received notify event");

            for change in change_events(&async_root, &event) {
                if runtime_tx.send(change).await.is_err() {
                    debug!("runtime channel closed; stopping watcher forwarding");
                    return;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle {
        inner: Some(watcher),
        root,
    })
}
