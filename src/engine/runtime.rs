// src/engine/runtime.rs

use std::fmt;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::ToolRunner;
use crate::types::FileChangeEvent;
use crate::watch::WatcherHandle;

use super::reactor::ChangeReactor;

/// Drives the [`ChangeReactor`] in response to file changes.
///
/// Events are handled strictly one at a time: the loop does not receive the
/// next change until the current format/build cycle has finished. A change
/// that arrives mid-build simply waits in the channel.
///
/// Shutdown arrives on its own `watch` channel and is checked before every
/// receive, so a pending shutdown discards whatever changes are still
/// queued. An in-flight cycle is never cancelled.
pub struct Runtime<R: ToolRunner> {
    reactor: ChangeReactor<R>,
    change_rx: mpsc::Receiver<FileChangeEvent>,
    shutdown_rx: watch::Receiver<bool>,
    watcher: Option<WatcherHandle>,
}

impl<R: ToolRunner> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("reactor", &self.reactor)
            .field("watcher", &self.watcher)
            .finish_non_exhaustive()
    }
}

impl<R: ToolRunner> Runtime<R> {
    /// `shutdown_rx` stops the loop once its value becomes `true`.
    pub fn new(
        reactor: ChangeReactor<R>,
        change_rx: mpsc::Receiver<FileChangeEvent>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            reactor,
            change_rx,
            shutdown_rx,
            watcher: None,
        }
    }

    /// Attach the watcher so it is stopped when the loop exits.
    pub fn with_watcher(mut self, watcher: WatcherHandle) -> Self {
        self.watcher = Some(watcher);
        self
    }

    /// Main event loop.
    ///
    /// - Hands file changes to the reactor and waits for it to finish.
    /// - Stops the watcher and returns once shutdown is signalled or every
    ///   change sender is gone.
    pub async fn run(mut self) -> Result<()> {
        info!("zigwatch runtime started");

        loop {
            let change = tokio::select! {
                biased;

                _ = shutdown_signalled(&mut self.shutdown_rx) => {
                    let dropped = self.change_rx.len();
                    info!(dropped, "shutdown requested");
                    break;
                }
                received = self.change_rx.recv() => match received {
                    Some(change) => change,
                    None => {
                        info!("change channel closed; exiting");
                        break;
                    }
                },
            };

            debug!(?change, "runtime received change");
            let outcome = self.reactor.on_event(change).await;
            debug!(?outcome, "event handled");
        }

        if let Some(watcher) = self.watcher.take() {
            watcher.stop();
        }

        info!("runtime exiting");
        Ok(())
    }
}

/// Resolves once the flag is `true`. Never resolves if every sender is
/// dropped without signalling.
async fn shutdown_signalled(rx: &mut watch::Receiver<bool>) {
    if rx.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}
