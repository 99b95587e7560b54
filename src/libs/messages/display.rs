//! Display implementation for timebank application messages.
//!
//! All user-facing text lives here, keyed by the `Message` enum. Keeping
//! the text in one place makes the wording consistent across commands and
//! leaves the door open for localization later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === LEDGER MESSAGES ===
            Message::Credited(minutes, source) => format!("Credited {} minute(s): {}", minutes, source),
            Message::Debited(minutes, source) => format!("Spent {} minute(s): {}", minutes, source),
            Message::DebitClamped(requested, applied) => {
                format!("Only {} of {} requested minute(s) were available; balance is now empty", applied, requested)
            }
            Message::BalanceReset(baseline) => format!("Balance reset to {} minute(s), history cleared", baseline),
            Message::BalanceTitle(date) => format!("Screen time balance for {}", date),
            Message::RemoteBalanceTitle(date) => format!("Family server balance for {}", date),
            Message::HistoryTitle(range) => format!("Ledger history ({})", range),
            Message::HistoryEmpty => "No ledger events recorded".to_string(),
            Message::TimelineTitle(date) => format!("Available time by hour for {}", date),
            Message::TimelineEmpty => "No timeline data for today yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleLedger => "Ledger settings".to_string(),
            Message::ConfigModuleMonitor => "Inactivity monitor settings".to_string(),
            Message::ConfigModuleServer => "Family sync server settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptBaseline => "Baseline balance restored on daily reset (minutes)".to_string(),
            Message::PromptRewardRate => "Minutes credited per hour of inactivity".to_string(),
            Message::PromptInactivityThreshold => "Inactivity threshold before accrual starts (seconds)".to_string(),
            Message::PromptPollInterval => "Poll interval for inactivity checks (milliseconds)".to_string(),
            Message::PromptActivityThreshold => "Recent-input window treated as activity (seconds)".to_string(),
            Message::PromptServerApiUrl => "Sync server API URL".to_string(),
            Message::PromptServerAuthToken => "Sync server auth token".to_string(),
            Message::ConfirmReset => "Reset the balance and clear today's history?".to_string(),
            Message::ResetCancelled => "Reset cancelled".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncNotConfigured => "No sync server configured; run 'timebank init' to add one".to_string(),
            Message::SyncSavedLocally(detail) => format!("Failed to sync with server ({}). Changes saved locally", detail),
            Message::SyncPushed(count) => format!("Pushed {} pending event(s) to the sync server", count),
            Message::SyncNothingPending => "All ledger events are already synced".to_string(),
            Message::SyncEventFailed(id, detail) => format!("Failed to push event #{}: {}", id, detail),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, detail) => format!("Migration v{} failed: {}", version, detail),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorConfigInvalid(detail) => format!("Invalid monitor configuration: {}", detail),
            Message::MonitorStarted {
                inactivity_threshold,
                poll_interval,
                activity_threshold,
            } => format!(
                "Inactivity monitor started (threshold: {}s, poll: {}ms, activity window: {}s)",
                inactivity_threshold, poll_interval, activity_threshold
            ),
            Message::MonitorExitedNormally => "Monitor exited normally".to_string(),
            Message::MonitorShuttingDown => "Monitor shutting down".to_string(),
            Message::MonitorError(detail) => format!("Monitor error: {}", detail),
            Message::MonitorTaskPanicked(detail) => format!("Monitor task panicked: {}", detail),
            Message::InactivityCredited(minutes, hours) => {
                format!("Credited {} minute(s) for {} hour(s) of inactivity", minutes, hours)
            }
            Message::InactivityCreditFailed(detail) => {
                format!("Failed to credit inactivity reward ({}); this interval's reward is lost", detail)
            }
            Message::DailyRollover(date) => format!("New day ({}), balance reset to baseline", date),

            // === WATCHER DAEMON MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher stopped (PID: {})", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(detail) => format!("Failed to stop existing watcher: {}", detail),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher process {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::WatcherCtrlCListenFailed(detail) => format!("Failed to listen for Ctrl+C: {}", detail),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "PID file contains invalid data".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to determine current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::DaemonModeNotSupported => "Background mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error {})", code),

            // === GENERIC MESSAGES ===
            Message::InvalidDateFormat(value) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value),
        };
        write!(f, "{}", text)
    }
}
