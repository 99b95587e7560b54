//! Run the inactivity watcher.
//!
//! By default the watcher is spawned as a detached background process
//! tracked through a PID file. `--foreground` runs it in the current
//! terminal with signal handling, and `--stop` terminates a running
//! instance.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher
    #[arg(long)]
    stop: bool,

    /// Run in the foreground instead of daemonizing
    #[arg(long)]
    foreground: bool,
}

/// Executes the watch command.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        // Structured logs for the long-running process when requested.
        let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}
