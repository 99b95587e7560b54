//! Database operations for the ledger event history.
//!
//! Stores every credit and debit as an immutable row. Events are only
//! ever inserted, flagged as synced, or wiped wholesale by the daily
//! reset; nothing updates an event's amount or source after creation.

use super::db::Db;
use crate::libs::ledger::{EventKind, LedgerEvent};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Row};

const INSERT_EVENT: &str = "INSERT INTO ledger_events (kind, amount, source, timestamp, synced) VALUES (?1, ?2, ?3, ?4, 0)";
const SELECT_SINCE: &str = "SELECT id, kind, amount, source, timestamp, synced FROM ledger_events WHERE timestamp >= ?1 ORDER BY timestamp DESC, id DESC";
const SELECT_TODAY: &str =
    "SELECT id, kind, amount, source, timestamp, synced FROM ledger_events WHERE date(timestamp) = date('now', 'localtime') ORDER BY timestamp DESC, id DESC";
const SELECT_PENDING: &str = "SELECT id, kind, amount, source, timestamp, synced FROM ledger_events WHERE synced = 0 ORDER BY id";
const MARK_SYNCED: &str = "UPDATE ledger_events SET synced = 1 WHERE id = ?1";
const DELETE_ALL: &str = "DELETE FROM ledger_events";

/// Database manager for ledger events.
pub struct Events {
    db: Db,
}

impl Events {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { db })
    }

    /// Appends one event and returns its id (creation order).
    pub fn insert(&self, kind: EventKind, amount: i64, source: &str, timestamp: NaiveDateTime) -> Result<i64> {
        let conn = &self.db.conn;
        conn.execute(INSERT_EVENT, params![kind.as_str(), amount, source, timestamp])?;
        Ok(conn.last_insert_rowid())
    }

    /// Events at or after `since`, newest first.
    pub fn fetch_since(&self, since: NaiveDateTime) -> Result<Vec<LedgerEvent>> {
        let mut stmt = self.db.conn.prepare(SELECT_SINCE)?;
        let event_iter = stmt.query_map(params![since], map_event)?;

        let mut events = Vec::new();
        for event in event_iter {
            events.push(event?);
        }
        Ok(events)
    }

    /// Today's events, newest first.
    pub fn fetch_today(&self) -> Result<Vec<LedgerEvent>> {
        let mut stmt = self.db.conn.prepare(SELECT_TODAY)?;
        let event_iter = stmt.query_map([], map_event)?;

        let mut events = Vec::new();
        for event in event_iter {
            events.push(event?);
        }
        Ok(events)
    }

    /// Events still waiting to be pushed to the sync server, oldest first
    /// so the server sees them in creation order.
    pub fn fetch_pending(&self) -> Result<Vec<LedgerEvent>> {
        let mut stmt = self.db.conn.prepare(SELECT_PENDING)?;
        let event_iter = stmt.query_map([], map_event)?;

        let mut events = Vec::new();
        for event in event_iter {
            events.push(event?);
        }
        Ok(events)
    }

    pub fn mark_synced(&self, id: i64) -> Result<()> {
        self.db.conn.execute(MARK_SYNCED, params![id])?;
        Ok(())
    }

    /// Removes every event. Only the reset operation calls this.
    pub fn clear(&self) -> Result<()> {
        self.db.conn.execute(DELETE_ALL, [])?;
        Ok(())
    }
}

fn map_event(row: &Row) -> rusqlite::Result<LedgerEvent> {
    let kind_str: String = row.get(1)?;
    let kind = EventKind::from_db(&kind_str)
        .ok_or_else(|| rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, format!("unknown event kind: {kind_str}").into()))?;

    Ok(LedgerEvent {
        id: row.get(0)?,
        kind,
        amount: row.get(2)?,
        source: row.get(3)?,
        timestamp: row.get(4)?,
        synced: row.get(5)?,
    })
}
