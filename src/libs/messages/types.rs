#[derive(Debug, Clone)]
pub enum Message {
    // === LEDGER MESSAGES ===
    Credited(i64, String),                // minutes, source
    Debited(i64, String),                 // applied minutes, source
    DebitClamped(i64, i64),               // requested, applied
    BalanceReset(i64),                    // baseline
    BalanceTitle(String),                 // date
    RemoteBalanceTitle(String),           // date
    HistoryTitle(String),                 // date or range
    HistoryEmpty,
    TimelineTitle(String),                // date
    TimelineEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleLedger,
    ConfigModuleMonitor,
    ConfigModuleServer,
    PromptSelectModules,
    PromptBaseline,
    PromptRewardRate,
    PromptInactivityThreshold,
    PromptPollInterval,
    PromptActivityThreshold,
    PromptServerApiUrl,
    PromptServerAuthToken,
    ConfirmReset,
    ResetCancelled,

    // === SYNC MESSAGES ===
    SyncNotConfigured,
    SyncSavedLocally(String),             // error detail
    SyncPushed(usize),                    // event count
    SyncNothingPending,
    SyncEventFailed(i64, String),         // event id, error detail

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === MONITOR MESSAGES ===
    MonitorConfigInvalid(String),
    MonitorStarted {
        inactivity_threshold: u64,
        poll_interval: u64,
        activity_threshold: u64,
    },
    MonitorExitedNormally,
    MonitorShuttingDown,
    MonitorError(String),
    MonitorTaskPanicked(String),
    InactivityCredited(i64, i64),         // minutes, whole hours
    InactivityCreditFailed(String),       // error detail, reward is lost
    DailyRollover(String),                // new date

    // === WATCHER DAEMON MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),

    // === GENERIC MESSAGES ===
    InvalidDateFormat(String),
}
