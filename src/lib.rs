// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;
pub mod watch;

use tokio::sync::mpsc;
use tokio::sync::watch as flag;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::{RawReactorConfig, ReactorConfig};
use crate::engine::{ChangeReactor, Runtime};
use crate::errors::{Result, ZigwatchError};
use crate::exec::{ProcessToolRunner, ToolRunner};
use crate::types::FileChangeEvent;

/// Capacity of the watcher -> runtime change channel.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config validation
/// - the process-backed tool runner
/// - the change reactor
/// - the Ctrl-C handler
/// and then hands over to [`start`].
pub async fn run(args: CliArgs) -> Result<()> {
    let config = ReactorConfig::try_from(RawReactorConfig::from_args(&args))?;

    let root = config.watch_root();
    if !root.is_dir() {
        return Err(ZigwatchError::ConfigError(format!(
            "watch root {:?} is not a directory",
            root
        )));
    }

    let runner = ProcessToolRunner::new(root, config.tool_timeout());
    let reactor = ChangeReactor::new(config, runner);

    // Ctrl-C -> graceful shutdown.
    let (shutdown_tx, shutdown_rx) = flag::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            return;
        }
        info!("Ctrl+C received");
        let _ = shutdown_tx.send(true);
    });

    start(reactor, shutdown_rx).await
}

/// Startup sequence for an already-built reactor:
///
/// 1. run the builder once; a failure aborts before anything is watched,
/// 2. start the recursive watcher on the configured root,
/// 3. block in the runtime loop until `shutdown` turns `true`.
pub async fn start<R: ToolRunner>(
    mut reactor: ChangeReactor<R>,
    shutdown: flag::Receiver<bool>,
) -> Result<()> {
    reactor.initial_build().await?;

    let (change_tx, change_rx) = mpsc::channel::<FileChangeEvent>(CHANGE_CHANNEL_CAPACITY);
    let watcher = watch::spawn_watcher(reactor.config().watch_root(), change_tx)?;
    reactor.watching_started(watcher.root());

    Runtime::new(reactor, change_rx, shutdown)
        .with_watcher(watcher)
        .run()
        .await
}
