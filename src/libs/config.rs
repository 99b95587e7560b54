//! Configuration management for the timebank application.
//!
//! Settings are stored as JSON in the platform data directory and split
//! into optional modules so a family only configures what they use:
//!
//! - **Ledger**: baseline balance and inactivity reward rate
//! - **Monitor**: timing thresholds for the background inactivity watcher
//! - **Server**: the optional family sync server
//!
//! Missing modules fall back to their defaults at the call site, so a
//! fresh install works without running the wizard first.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Ledger settings shared by the commands and the watcher.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Balance in minutes restored by the daily reset.
    pub baseline: i64,

    /// Minutes credited per whole hour of inactivity.
    ///
    /// Owned conceptually by the family settings (a parent adjusts it);
    /// the monitor reads it on startup.
    pub reward_rate: i64,
}

/// Inactivity monitor configuration.
///
/// All values are timing thresholds for the background watcher. The
/// defaults mirror the reference behavior: accrual starts after a full
/// hour of inactivity and is evaluated once a minute.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Inactivity duration in seconds before accrual starts (one
    /// "inactive hour" equals this many seconds).
    pub inactivity_threshold: u64,

    /// Poll interval in milliseconds for periodic accrual checks.
    pub poll_interval: u64,

    /// Recent-input window in seconds. Input newer than this keeps the
    /// monitor in the active state.
    pub activity_threshold: u64,
}

/// Family sync server connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the sync API, e.g. `https://family.example.com/api`.
    pub api_url: String,

    /// Bearer token sent with every request.
    pub auth_token: String,
}

/// Root configuration object. Unconfigured modules are omitted from the
/// JSON file entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for LedgerConfig {
    /// 120-minute baseline, 15 minutes per inactive hour.
    fn default() -> Self {
        LedgerConfig {
            baseline: 120,
            reward_rate: 15,
        }
    }
}

impl Default for MonitorConfig {
    /// Accrual after one hour of inactivity, checked every minute; input
    /// within the last 30 seconds counts as activity.
    fn default() -> Self {
        MonitorConfig {
            inactivity_threshold: 3600,
            poll_interval: 60_000,
            activity_threshold: 30,
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the
    /// file does not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON to the data dir.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Presents the available modules, then prompts for each selected one
    /// with the current values (or defaults) pre-filled. Returns the
    /// updated configuration for the caller to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Ledger", "Monitor", "Server"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Ledger" => {
                    let default = config.ledger.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLedger);
                    config.ledger = Some(LedgerConfig {
                        baseline: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBaseline.to_string())
                            .default(default.baseline)
                            .interact_text()?,
                        reward_rate: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRewardRate.to_string())
                            .default(default.reward_rate)
                            .interact_text()?,
                    });
                }
                "Monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        inactivity_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptInactivityThreshold.to_string())
                            .default(default.inactivity_threshold)
                            .interact_text()?,
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                        activity_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptActivityThreshold.to_string())
                            .default(default.activity_threshold)
                            .interact_text()?,
                    });
                }
                "Server" => {
                    let default = config.server.clone().unwrap_or(ServerConfig {
                        api_url: String::new(),
                        auth_token: String::new(),
                    });
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        auth_token: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerAuthToken.to_string())
                            .default(default.auth_token)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
