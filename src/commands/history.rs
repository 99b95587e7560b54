//! Display the ledger event history.
//!
//! Events are listed newest first and can be filtered by start date and
//! by kind.

use crate::libs::config::Config;
use crate::libs::ledger::{EventKind, Ledger};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Command-line arguments for the history command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// First date to include (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today", help = "First date to include (YYYY-MM-DD or 'today')")]
    since: String,

    /// Only show events of this kind
    #[arg(long, short, value_enum)]
    kind: Option<EventKind>,
}

/// Executes the history command.
pub fn cmd(args: HistoryArgs) -> Result<()> {
    let since = parse_date(&args.since)?;

    let config = Config::read()?;
    let ledger_config = config.ledger.unwrap_or_default();
    let ledger = Ledger::new(ledger_config.baseline)?;

    let mut events = ledger.history_since(since.and_hms_opt(0, 0, 0).unwrap())?;
    if let Some(kind) = args.kind {
        events.retain(|e| e.kind == kind);
    }

    msg_print!(Message::HistoryTitle(since.format("%B %-d, %Y").to_string()), true);
    if events.is_empty() {
        msg_print!(Message::HistoryEmpty);
        return Ok(());
    }

    View::events(&events)?;
    Ok(())
}

/// Parses 'today' or an ISO date.
fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(date_str.to_string())))
    }
}
