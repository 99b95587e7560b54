//! # Timebank - Family Screen-Time Ledger
//!
//! A command-line utility for managing a child's daily screen-time
//! budget: minutes are earned through completed tasks and rewarded
//! inactivity, and spent while tracked applications are in use.
//!
//! ## Features
//!
//! - **Balance Ledger**: Remaining, earned-today, and used-today counters
//!   backed by an append-only event history
//! - **Inactivity Rewards**: A background watcher credits minutes for
//!   every whole hour away from the keyboard
//! - **Daily Reset**: The baseline balance is restored automatically at
//!   the start of each day
//! - **Timeline View**: Hour-by-hour reconstruction of today's available
//!   minutes
//! - **Family Sync**: Optional push of every mutation to a shared server
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timebank::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
