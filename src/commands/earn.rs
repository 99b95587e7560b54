//! Credit earned minutes to the balance.
//!
//! The mutation commits locally first; when a sync server is configured
//! the pending backlog is pushed afterwards. A failed push is reported
//! but never rolls the local credit back.

use crate::api::sync;
use crate::libs::config::Config;
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the earn command.
#[derive(Debug, Args)]
pub struct EarnArgs {
    /// Number of minutes to credit
    minutes: i64,

    /// What the minutes were earned for
    #[arg(long, short, default_value = "Manual credit")]
    source: String,
}

/// Executes the earn command.
pub async fn cmd(args: EarnArgs) -> Result<()> {
    let config = Config::read()?;
    let ledger_config = config.ledger.clone().unwrap_or_default();
    let mut ledger = Ledger::new(ledger_config.baseline)?;

    let balance = ledger.credit(args.minutes, &args.source)?;
    msg_success!(Message::Credited(args.minutes, args.source.clone()));

    if let Some(server) = &config.server {
        if let Err(e) = sync::flush_pending(&mut ledger, server).await {
            msg_warning!(Message::SyncSavedLocally(e.to_string()));
        }
    }

    View::balance(&balance)?;
    Ok(())
}
