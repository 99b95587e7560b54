//! Restore the baseline balance and clear the event history.
//!
//! Asks for confirmation unless `--yes` is given. The reset always
//! applies locally; the server notification is best-effort.

use crate::api::SyncClient;
use crate::libs::config::Config;
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the reset command.
#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Executes the reset command.
pub async fn cmd(args: ResetArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReset.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_print!(Message::ResetCancelled);
            return Ok(());
        }
    }

    let config = Config::read()?;
    let ledger_config = config.ledger.clone().unwrap_or_default();
    let mut ledger = Ledger::new(ledger_config.baseline)?;

    let balance = ledger.reset()?;
    msg_success!(Message::BalanceReset(balance.remaining));

    if let Some(server) = &config.server {
        if let Err(e) = SyncClient::new(server).push_reset().await {
            msg_warning!(Message::SyncSavedLocally(e.to_string()));
        }
    }

    Ok(())
}
