//! Core library modules for the timebank application.
//!
//! Serves as the main entry point for all timebank library components:
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Ledger**: Balance accounting and event history
//! - **Inactivity Monitoring**: Input watching, accrual, daemon management
//! - **User Interface**: Console table rendering

pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod ledger;
pub mod messages;
pub mod monitor;
pub mod timeline;
pub mod view;
