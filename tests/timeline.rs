#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timebank::libs::ledger::{EventKind, LedgerEvent};
    use timebank::libs::timeline::{bucket_by_hour, HourSample};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn event(id: i64, kind: EventKind, amount: i64, hour: u32) -> LedgerEvent {
        LedgerEvent {
            id,
            kind,
            amount,
            source: "test".to_string(),
            timestamp: day().and_hms_opt(hour, 30, 0).unwrap(),
            synced: false,
        }
    }

    fn totals(samples: &[HourSample]) -> Vec<i64> {
        samples.iter().map(|s| s.total).collect()
    }

    #[test]
    fn test_overnight_accrual_fills_hours_one_through_six() {
        let samples = bucket_by_hour(&[], 120, 15, day(), 8);

        assert_eq!(samples.len(), 9);
        assert_eq!(totals(&samples), vec![120, 135, 150, 165, 180, 195, 210, 210, 210]);
        assert_eq!(samples[0], HourSample { hour: 0, total: 120 });
    }

    #[test]
    fn test_events_overwrite_their_hour_with_the_running_total() {
        // History order is newest first: the 5am debit precedes the 3am
        // credit in the slice, and that order drives the running total.
        let events = vec![event(2, EventKind::Used, 25, 5), event(1, EventKind::Earned, 30, 3)];

        let samples = bucket_by_hour(&events, 120, 15, day(), 8);

        // The debit lands first (210 - 25), then the credit (185 + 30);
        // each writes the total at its own hour, so the series is not
        // monotonic across the overnight window.
        assert_eq!(totals(&samples), vec![120, 135, 150, 215, 180, 185, 210, 210, 210]);
    }

    #[test]
    fn test_afternoon_events_carry_forward() {
        let events = vec![event(2, EventKind::Used, 40, 10), event(1, EventKind::Earned, 20, 8)];

        let samples = bucket_by_hour(&events, 120, 15, day(), 12);

        assert_eq!(
            totals(&samples),
            vec![120, 135, 150, 165, 180, 195, 210, 210, 190, 190, 170, 170, 170]
        );
    }

    #[test]
    fn test_current_hour_zero_yields_single_baseline_sample() {
        let samples = bucket_by_hour(&[], 120, 15, day(), 0);

        assert_eq!(samples, vec![HourSample { hour: 0, total: 120 }]);
    }

    #[test]
    fn test_future_hours_and_other_days_are_skipped() {
        let mut stale = event(1, EventKind::Earned, 50, 2);
        stale.timestamp = day().pred_opt().unwrap().and_hms_opt(2, 0, 0).unwrap();
        let future = event(2, EventKind::Earned, 50, 9);

        let samples = bucket_by_hour(&[future, stale], 120, 15, day(), 4);

        assert_eq!(totals(&samples), vec![120, 135, 150, 165, 180]);
    }

    #[test]
    fn test_overnight_window_caps_at_six_even_late_in_the_day() {
        let samples = bucket_by_hour(&[], 100, 10, day(), 23);

        assert_eq!(samples.len(), 24);
        assert_eq!(samples[6].total, 160);
        // No further passive accrual after 6am.
        assert!(samples[7..].iter().all(|s| s.total == 160));
    }
}
