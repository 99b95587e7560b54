//! Push pending events to the family server.
//!
//! Retries the local backlog oldest-first. Used after working offline or
//! after a failed automatic push.

use crate::api::sync;
use crate::libs::config::Config;
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;

/// Executes the sync command.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(server) = &config.server else {
        msg_print!(Message::SyncNotConfigured);
        return Ok(());
    };

    let ledger_config = config.ledger.clone().unwrap_or_default();
    let mut ledger = Ledger::new(ledger_config.baseline)?;

    let pushed = sync::flush_pending(&mut ledger, server).await?;
    if pushed == 0 {
        msg_print!(Message::SyncNothingPending);
    } else {
        msg_success!(Message::SyncPushed(pushed));
    }

    Ok(())
}
