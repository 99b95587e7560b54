//! Screen-time ledger service.
//!
//! The ledger owns the three-way balance (remaining / earned today /
//! used today) and the append-only event history behind it. Minutes enter
//! the balance through `credit` (task rewards, inactivity accrual) and
//! leave it through `debit` (tracked app usage). Debits are clamped to
//! the available balance so a child can never go negative; the daily
//! reset restores the configured baseline and clears the history.
//!
//! The service is constructor-injected everywhere it is used: commands
//! and the monitor each build their own `Ledger` over the shared SQLite
//! database, and tests instantiate isolated ones against a tempdir.

use crate::db::balance::BalanceStore;
use crate::db::events::Events;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Errors produced by ledger operations.
///
/// Nothing here is fatal to the application: an invalid amount leaves the
/// balance untouched and is reported to the user as a failed command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Credit or debit requested with a non-positive number of minutes.
    #[error("amount must be a positive number of minutes, got {0}")]
    InvalidAmount(i64),
}

/// Direction of a ledger event.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Earned,
    Used,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Earned => "earned",
            EventKind::Used => "used",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "earned" => Some(EventKind::Earned),
            "used" => Some(EventKind::Used),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable credit or debit record.
///
/// Created exactly once by a ledger operation and never mutated; for
/// clamped debits `amount` holds the applied minutes, not the requested
/// ones. `synced` tracks whether the event has reached the family server.
#[derive(Debug, Clone)]
pub struct LedgerEvent {
    pub id: i64,
    pub kind: EventKind,
    pub amount: i64,
    pub source: String,
    pub timestamp: NaiveDateTime,
    pub synced: bool,
}

/// The three-way screen-time counter, all values in minutes.
///
/// `remaining` never goes below zero; `earned_today` and `used_today`
/// only grow until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub remaining: i64,
    pub earned_today: i64,
    pub used_today: i64,
}

/// The ledger service combining the balance row and the event history.
pub struct Ledger {
    events: Events,
    store: BalanceStore,
    baseline: i64,
}

impl Ledger {
    /// Opens the ledger over the application database.
    ///
    /// `baseline` is the balance restored by `reset`, taken from the
    /// ledger configuration (120 minutes by default).
    pub fn new(baseline: i64) -> Result<Self> {
        let events = Events::new()?;
        let store = BalanceStore::new()?;
        Ok(Self { events, store, baseline })
    }

    /// Current balance, initializing a fresh database to the baseline.
    pub fn balance(&self) -> Result<Balance> {
        self.store.fetch_or_init(self.baseline)
    }

    /// Credits `amount` minutes and appends an `earned` event.
    pub fn credit(&mut self, amount: i64, source: &str) -> Result<Balance> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount).into());
        }

        let mut balance = self.balance()?;
        balance.remaining += amount;
        balance.earned_today += amount;

        self.store.save(&balance)?;
        self.events.insert(EventKind::Earned, amount, source, Local::now().naive_local())?;

        Ok(balance)
    }

    /// Debits up to `amount` minutes and appends a `used` event.
    ///
    /// Over-debits are silently clamped to the remaining balance and the
    /// event records the applied amount. This is deliberate: running out
    /// of time is an everyday situation, not an error.
    pub fn debit(&mut self, amount: i64, source: &str) -> Result<Balance> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount).into());
        }

        let mut balance = self.balance()?;
        let applied = amount.min(balance.remaining);
        balance.remaining -= applied;
        balance.used_today += applied;

        self.store.save(&balance)?;
        self.events.insert(EventKind::Used, applied, source, Local::now().naive_local())?;

        Ok(balance)
    }

    /// Restores the baseline balance and clears the event history.
    ///
    /// Invoked by the daily rollover in the watcher, or manually through
    /// the `reset` command.
    pub fn reset(&mut self) -> Result<Balance> {
        let balance = Balance {
            remaining: self.baseline,
            earned_today: 0,
            used_today: 0,
        };

        self.store.save(&balance)?;
        self.events.clear()?;

        Ok(balance)
    }

    /// Events at or after `since`, newest first.
    pub fn history_since(&self, since: NaiveDateTime) -> Result<Vec<LedgerEvent>> {
        self.events.fetch_since(since)
    }

    /// Today's events, newest first. Input to the timeline bucketer.
    pub fn today(&self) -> Result<Vec<LedgerEvent>> {
        self.events.fetch_today()
    }

    /// Events not yet pushed to the sync server, oldest first.
    pub fn pending(&self) -> Result<Vec<LedgerEvent>> {
        self.events.fetch_pending()
    }

    /// Marks one event as persisted remotely.
    pub fn mark_synced(&self, id: i64) -> Result<()> {
        self.events.mark_synced(id)
    }
}
