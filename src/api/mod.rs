//! HTTP client for the family sync server.
//!
//! The sync server is an external collaborator that mirrors the local
//! ledger so parents can see balances across devices. Every local
//! mutation is pushed after it commits; a rejected push leaves the event
//! flagged as pending and the next user action (or `timebank sync`)
//! retries the backlog. The local database stays authoritative.

pub mod sync;

pub use sync::SyncClient;
