pub mod balance;
pub mod db;
pub mod events;
pub mod migrations;
