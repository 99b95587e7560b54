#[cfg(test)]
mod tests {
    use chrono::Local;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timebank::libs::ledger::{EventKind, Ledger, LedgerError};

    struct LedgerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for LedgerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            LedgerTestContext { _temp_dir: temp_dir }
        }
    }

    fn midnight() -> chrono::NaiveDateTime {
        Local::now().date_naive().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_fresh_database_seeds_baseline(_ctx: &mut LedgerTestContext) {
        let ledger = Ledger::new(120).unwrap();
        let balance = ledger.balance().unwrap();

        assert_eq!(balance.remaining, 120);
        assert_eq!(balance.earned_today, 0);
        assert_eq!(balance.used_today, 0);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_credit_and_debit_update_all_counters(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(120).unwrap();

        let after_credit = ledger.credit(30, "Homework").unwrap();
        assert_eq!(after_credit.remaining, 150);
        assert_eq!(after_credit.earned_today, 30);
        assert_eq!(after_credit.used_today, 0);

        let after_debit = ledger.debit(45, "Games").unwrap();
        assert_eq!(after_debit.remaining, 105);
        assert_eq!(after_debit.earned_today, 30);
        assert_eq!(after_debit.used_today, 45);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_over_debit_clamps_to_zero_and_records_applied_amount(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(60).unwrap();

        let balance = ledger.debit(100, "Games").unwrap();
        assert_eq!(balance.remaining, 0);
        assert_eq!(balance.used_today, 60);

        // The event stores what was actually debited, not what was asked.
        let events = ledger.history_since(midnight()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Used);
        assert_eq!(events[0].amount, 60);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_debit_from_zero_records_zero_event(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(50).unwrap();
        ledger.debit(50, "Games").unwrap();

        let balance = ledger.debit(10, "Games").unwrap();
        assert_eq!(balance.remaining, 0);
        assert_eq!(balance.used_today, 50);

        let events = ledger.history_since(midnight()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].amount, 0);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_non_positive_amounts_are_rejected(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(120).unwrap();

        for amount in [0, -5] {
            let credit_err = ledger.credit(amount, "Homework").unwrap_err();
            assert_eq!(credit_err.downcast::<LedgerError>().unwrap(), LedgerError::InvalidAmount(amount));

            let debit_err = ledger.debit(amount, "Games").unwrap_err();
            assert_eq!(debit_err.downcast::<LedgerError>().unwrap(), LedgerError::InvalidAmount(amount));
        }

        // Nothing was recorded or changed.
        let balance = ledger.balance().unwrap();
        assert_eq!(balance.remaining, 120);
        assert!(ledger.history_since(midnight()).unwrap().is_empty());
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_reset_restores_baseline_and_clears_history(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(120).unwrap();
        ledger.credit(30, "Homework").unwrap();
        ledger.debit(20, "Games").unwrap();

        let balance = ledger.reset().unwrap();
        assert_eq!(balance.remaining, 120);
        assert_eq!(balance.earned_today, 0);
        assert_eq!(balance.used_today, 0);
        assert!(ledger.history_since(midnight()).unwrap().is_empty());
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_history_is_newest_first(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(120).unwrap();
        ledger.credit(10, "First").unwrap();
        ledger.credit(20, "Second").unwrap();
        ledger.debit(5, "Third").unwrap();

        let events = ledger.history_since(midnight()).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].source, "Third");
        assert_eq!(events[1].source, "Second");
        assert_eq!(events[2].source, "First");
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_pending_queue_is_oldest_first_and_shrinks_on_mark_synced(_ctx: &mut LedgerTestContext) {
        let mut ledger = Ledger::new(120).unwrap();
        ledger.credit(10, "First").unwrap();
        ledger.debit(5, "Second").unwrap();

        let pending = ledger.pending().unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].source, "First");
        assert!(!pending[0].synced);

        ledger.mark_synced(pending[0].id).unwrap();

        let pending = ledger.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].source, "Second");
    }
}
