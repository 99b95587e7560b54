//! Command-line interface definition and dispatch.

pub mod earn;
pub mod history;
pub mod init;
pub mod reset;
pub mod spend;
pub mod status;
pub mod sync;
pub mod timeline;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Credit earned minutes to the balance")]
    Earn(earn::EarnArgs),
    #[command(about = "Debit used minutes from the balance")]
    Spend(spend::SpendArgs),
    #[command(about = "Restore the baseline balance and clear history")]
    Reset(reset::ResetArgs),
    #[command(about = "Show the current balance")]
    Status(status::StatusArgs),
    #[command(about = "Show the event history")]
    History(history::HistoryArgs),
    #[command(about = "Show today's hour-by-hour available minutes")]
    Timeline,
    #[command(about = "Run the inactivity watcher")]
    Watch(watch::WatchArgs),
    #[command(about = "Push pending events to the family server")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Earn(args) => earn::cmd(args).await,
            Commands::Spend(args) => spend::cmd(args).await,
            Commands::Reset(args) => reset::cmd(args).await,
            Commands::Status(args) => status::cmd(args).await,
            Commands::History(args) => history::cmd(args),
            Commands::Timeline => timeline::cmd(),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Sync => sync::cmd().await,
        }
    }
}
