//! Display today's hour-by-hour available minutes.
//!
//! Rebuilds the running balance for every hour from midnight to the
//! current hour out of the baseline, the overnight accrual, and today's
//! recorded events.

use crate::libs::config::Config;
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::libs::timeline::bucket_by_hour;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, Timelike};

/// Executes the timeline command.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let ledger_config = config.ledger.unwrap_or_default();
    let ledger = Ledger::new(ledger_config.baseline)?;

    let now = Local::now();
    let events = ledger.today()?;
    let samples = bucket_by_hour(&events, ledger_config.baseline, ledger_config.reward_rate, now.date_naive(), now.hour());

    msg_print!(Message::TimelineTitle(now.format("%B %-d, %Y").to_string()), true);
    if samples.is_empty() {
        msg_print!(Message::TimelineEmpty);
        return Ok(());
    }

    View::timeline(&samples)?;
    Ok(())
}
