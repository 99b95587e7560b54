//! Debit used minutes from the balance.
//!
//! Over-debits are clamped to the remaining balance; the command warns
//! when fewer minutes were applied than requested.

use crate::api::sync;
use crate::libs::config::Config;
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the spend command.
#[derive(Debug, Args)]
pub struct SpendArgs {
    /// Number of minutes to debit
    minutes: i64,

    /// What the minutes were spent on
    #[arg(long, short, default_value = "Manual debit")]
    source: String,
}

/// Executes the spend command.
pub async fn cmd(args: SpendArgs) -> Result<()> {
    let config = Config::read()?;
    let ledger_config = config.ledger.clone().unwrap_or_default();
    let mut ledger = Ledger::new(ledger_config.baseline)?;

    let before = ledger.balance()?;
    let balance = ledger.debit(args.minutes, &args.source)?;

    let applied = before.remaining - balance.remaining;
    if applied < args.minutes {
        msg_warning!(Message::DebitClamped(args.minutes, applied));
    } else {
        msg_success!(Message::Debited(applied, args.source.clone()));
    }

    if let Some(server) = &config.server {
        if let Err(e) = sync::flush_pending(&mut ledger, server).await {
            msg_warning!(Message::SyncSavedLocally(e.to_string()));
        }
    }

    View::balance(&balance)?;
    Ok(())
}
