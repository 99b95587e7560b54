#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timebank::libs::config::{Config, LedgerConfig, MonitorConfig};
    use timebank::libs::ledger::Ledger;
    use timebank::libs::monitor::{inactivity_source, Monitor};

    struct MonitorTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MonitorTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MonitorTestContext { _temp_dir: temp_dir }
        }
    }

    fn test_config(reward_rate: i64) -> Config {
        Config {
            ledger: Some(LedgerConfig { baseline: 120, reward_rate }),
            monitor: Some(MonitorConfig {
                inactivity_threshold: 3600,
                poll_interval: 60_000,
                activity_threshold: 30,
            }),
            server: None,
        }
    }

    fn t0() -> NaiveDateTime {
        Local::now().date_naive().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_zero_timing_values_are_rejected_at_construction(_ctx: &mut MonitorTestContext) {
        // A zero threshold would divide by zero on the first inactive poll.
        let mut config = test_config(15);
        config.monitor.as_mut().unwrap().inactivity_threshold = 0;
        assert!(Monitor::new(&config).is_err());

        // A zero poll interval would busy-loop the watcher.
        let mut config = test_config(15);
        config.monitor.as_mut().unwrap().poll_interval = 0;
        assert!(Monitor::new(&config).is_err());

        assert!(Monitor::new(&test_config(15)).is_ok());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_accrual_credits_whole_hours_and_keeps_remainder(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;

        // 2h10m of inactivity rewards exactly two hours.
        let credited = monitor.check_accrual(t0() + Duration::minutes(130)).unwrap();
        assert_eq!(credited, Some(30));
        assert_eq!(monitor.state.last_active, t0() + Duration::hours(2));

        let ledger = Ledger::new(120).unwrap();
        let balance = ledger.balance().unwrap();
        assert_eq!(balance.remaining, 150);
        assert_eq!(balance.earned_today, 30);

        let events = ledger.today().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, inactivity_source(2));
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_accrual_below_threshold_is_a_noop(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;

        let credited = monitor.check_accrual(t0() + Duration::minutes(59)).unwrap();
        assert_eq!(credited, None);
        assert_eq!(monitor.state.last_active, t0());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_accrual_skipped_while_active(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = true;

        let credited = monitor.check_accrual(t0() + Duration::hours(3)).unwrap();
        assert_eq!(credited, None);
        assert_eq!(monitor.state.last_active, t0());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_consecutive_checks_never_double_reward(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;

        assert_eq!(monitor.check_accrual(t0() + Duration::minutes(70)).unwrap(), Some(15));

        // Thirty minutes later only 40 minutes have elapsed since the
        // advanced reference point, so nothing more is rewarded.
        assert_eq!(monitor.check_accrual(t0() + Duration::minutes(100)).unwrap(), None);

        // Twenty more and the second full hour completes.
        assert_eq!(monitor.check_accrual(t0() + Duration::minutes(120)).unwrap(), Some(15));

        let balance = Ledger::new(120).unwrap().balance().unwrap();
        assert_eq!(balance.remaining, 150);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_mark_active_settles_accrual_before_resuming(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;

        let resume_at = t0() + Duration::minutes(90);
        let credited = monitor.mark_active(resume_at).unwrap();

        assert_eq!(credited, Some(15));
        assert!(monitor.state.is_active);
        // After settling, the reference point jumps to the resume time.
        assert_eq!(monitor.state.last_active, resume_at);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_zero_reward_rate_advances_without_crediting(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(0)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;

        let credited = monitor.check_accrual(t0() + Duration::hours(2)).unwrap();
        assert_eq!(credited, Some(0));
        assert_eq!(monitor.state.last_active, t0() + Duration::hours(2));

        let ledger = Ledger::new(120).unwrap();
        assert_eq!(ledger.balance().unwrap().remaining, 120);
        assert!(ledger.today().unwrap().is_empty());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_rollover_resets_ledger_on_date_change(_ctx: &mut MonitorTestContext) {
        let mut monitor = Monitor::new(&test_config(15)).unwrap();
        monitor.state.last_active = t0();
        monitor.state.is_active = false;
        monitor.check_accrual(t0() + Duration::hours(1)).unwrap();

        let today = Local::now().date_naive();
        assert!(!monitor.rollover_if_needed(today).unwrap());

        let tomorrow = today + Duration::days(1);
        assert!(monitor.rollover_if_needed(tomorrow).unwrap());

        let ledger = Ledger::new(120).unwrap();
        let balance = ledger.balance().unwrap();
        assert_eq!(balance.remaining, 120);
        assert_eq!(balance.earned_today, 0);
        assert!(ledger.today().unwrap().is_empty());

        // Already rolled over, the same date is a no-op now.
        assert!(!monitor.rollover_if_needed(tomorrow).unwrap());
    }
}
