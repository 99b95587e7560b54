use crate::api::sync::RemoteEvent;
use crate::libs::ledger::{Balance, LedgerEvent};
use crate::libs::timeline::HourSample;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn balance(balance: &Balance) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["REMAINING", "EARNED TODAY", "USED TODAY"]);
        table.add_row(row![
            format!("{} min", balance.remaining),
            format!("{} min", balance.earned_today),
            format!("{} min", balance.used_today)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn events(events: &Vec<LedgerEvent>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "MINUTES", "SOURCE", "TIME", "SYNCED"]);
        for event in events {
            table.add_row(row![
                event.id,
                event.kind,
                event.amount,
                event.source,
                event.timestamp.format("%Y-%m-%d %H:%M"),
                if event.synced { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn remote_events(events: &Vec<RemoteEvent>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "MINUTES", "SOURCE", "TIME"]);
        for event in events {
            table.add_row(row![event.id, event.kind, event.minutes, event.source, event.timestamp]);
        }
        table.printstd();

        Ok(())
    }

    pub fn timeline(samples: &Vec<HourSample>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["HOUR", "AVAILABLE"]);
        for sample in samples {
            table.add_row(row![format!("{:02}:00", sample.hour), format!("{} min", sample.total)]);
        }
        table.printstd();

        Ok(())
    }
}
