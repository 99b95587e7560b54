//! Database operations for the single balance row.
//!
//! The balance table holds exactly one row (id = 1) with the current
//! counters. The ledger service is the only writer; reads initialize a
//! fresh database to the configured baseline.

use super::db::Db;
use crate::libs::ledger::Balance;
use anyhow::Result;
use rusqlite::{params, OptionalExtension};

const SELECT_BALANCE: &str = "SELECT remaining, earned_today, used_today FROM balance WHERE id = 1";
const UPSERT_BALANCE: &str = "INSERT INTO balance (id, remaining, earned_today, used_today, updated_at)
     VALUES (1, ?1, ?2, ?3, datetime('now', 'localtime'))
     ON CONFLICT(id) DO UPDATE SET
        remaining = excluded.remaining,
        earned_today = excluded.earned_today,
        used_today = excluded.used_today,
        updated_at = excluded.updated_at";

/// Database manager for the balance row.
pub struct BalanceStore {
    db: Db,
}

impl BalanceStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { db })
    }

    /// Reads the balance, seeding the row with the baseline when the
    /// database has never been written.
    pub fn fetch_or_init(&self, baseline: i64) -> Result<Balance> {
        let existing = self
            .db
            .conn
            .query_row(SELECT_BALANCE, [], |row| {
                Ok(Balance {
                    remaining: row.get(0)?,
                    earned_today: row.get(1)?,
                    used_today: row.get(2)?,
                })
            })
            .optional()?;

        match existing {
            Some(balance) => Ok(balance),
            None => {
                let balance = Balance {
                    remaining: baseline,
                    earned_today: 0,
                    used_today: 0,
                };
                self.save(&balance)?;
                Ok(balance)
            }
        }
    }

    pub fn save(&self, balance: &Balance) -> Result<()> {
        self.db
            .conn
            .execute(UPSERT_BALANCE, params![balance.remaining, balance.earned_today, balance.used_today])?;
        Ok(())
    }
}
