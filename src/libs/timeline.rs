//! Hourly running-balance samples for the timeline view.
//!
//! Reproduces the display model of the stats screen: the day starts at
//! the baseline balance, hours 1 through 6 each add one reward-rate worth
//! of passive overnight accrual, and the day's recorded events then move
//! a running total at the hour they happened. Hours without a sample
//! inherit the previous hour's total.
//!
//! The overnight samples are a display-layer simplification and are
//! computed independently of the real-time accrual the monitor performs.
//! An event landing inside the overnight window overwrites that hour's
//! sample with the running total instead of composing with it; callers
//! rely on this exact ordering.

use crate::libs::ledger::{EventKind, LedgerEvent};
use chrono::{NaiveDate, Timelike};

/// Last hour of the passive overnight accrual window (midnight to 6am).
pub const OVERNIGHT_END_HOUR: u32 = 6;

/// One point on the timeline: the running balance at a given hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSample {
    pub hour: u32,
    pub total: i64,
}

/// Buckets today's events into per-hour running-balance samples, from
/// hour 0 to `current_hour` inclusive.
///
/// `events` is the ledger history as stored, newest first; events from
/// other days or future hours are skipped.
pub fn bucket_by_hour(events: &[LedgerEvent], baseline: i64, reward_rate: i64, today: NaiveDate, current_hour: u32) -> Vec<HourSample> {
    let mut running_total = baseline;
    let mut totals = vec![0i64; current_hour as usize + 1];
    totals[0] = running_total;

    // Passive overnight accrual, one reward per hour from 1am to 6am.
    for hour in 1..=OVERNIGHT_END_HOUR.min(current_hour) {
        running_total += reward_rate;
        totals[hour as usize] = running_total;
    }

    // Apply today's events at their hour, moving the running total.
    for event in events {
        if event.timestamp.date() != today {
            continue;
        }
        let hour = event.timestamp.hour();
        if hour > current_hour {
            continue;
        }
        match event.kind {
            EventKind::Earned => running_total += event.amount,
            EventKind::Used => running_total -= event.amount,
        }
        totals[hour as usize] = running_total;
    }

    // Carry the previous hour's total into empty slots.
    for hour in 1..=current_hour as usize {
        if totals[hour] == 0 {
            totals[hour] = totals[hour - 1];
        }
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(hour, total)| HourSample { hour: hour as u32, total })
        .collect()
}
