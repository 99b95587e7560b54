//! Display the current balance.
//!
//! By default the balance comes from the local database; `--remote`
//! fetches the family server's view instead, including its history.

use crate::api::SyncClient;
use crate::libs::config::Config;
use crate::libs::ledger::{Balance, Ledger};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the status command.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Show the family server's balance instead of the local one
    #[arg(long)]
    remote: bool,
}

/// Executes the status command.
pub async fn cmd(args: StatusArgs) -> Result<()> {
    let config = Config::read()?;

    if args.remote {
        let Some(server) = &config.server else {
            msg_print!(Message::SyncNotConfigured);
            return Ok(());
        };

        let stats = SyncClient::new(server).fetch_balance().await?;

        msg_print!(Message::RemoteBalanceTitle(Local::now().format("%B %-d, %Y").to_string()), true);
        View::balance(&Balance {
            remaining: stats.remaining,
            earned_today: stats.earned,
            used_today: stats.used,
        })?;

        if !stats.history.is_empty() {
            View::remote_events(&stats.history)?;
        }
        return Ok(());
    }

    let ledger_config = config.ledger.unwrap_or_default();
    let ledger = Ledger::new(ledger_config.baseline)?;
    let balance = ledger.balance()?;

    msg_print!(Message::BalanceTitle(Local::now().format("%B %-d, %Y").to_string()), true);
    View::balance(&balance)?;

    Ok(())
}
