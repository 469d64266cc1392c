#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftshift::libs::session::Session;
    use shiftshift::libs::summary::{
        compute_total, filter_by_range, live_minutes, month_window, session_minutes, week_window, TimeTotals, Wage,
    };

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn session(id: i64, start: NaiveDateTime, minutes: Option<i64>, break_secs: i64) -> Session {
        Session {
            id,
            user_id: "driver-1".to_string(),
            start,
            end: minutes.map(|m| start + Duration::minutes(m)),
            breaks: Vec::new(),
            break_secs,
            notes: String::new(),
            tasks: Vec::new(),
        }
    }

    const WAGE: Wage = Wage {
        hourly: 20.0,
        net_factor: 0.69,
    };

    #[test]
    fn test_session_duration_formula() {
        // 125 gross minutes minus a 300-second break leaves 120 minutes.
        let session = session(1, dt(2026, 3, 2, 8, 0), Some(125), 300);
        assert_eq!(session_minutes(&session), Some(120));
    }

    #[test]
    fn test_active_session_has_no_duration() {
        let session = session(1, dt(2026, 3, 2, 8, 0), None, 0);
        assert_eq!(session_minutes(&session), None);
    }

    #[test]
    fn test_overadjusted_break_clamps_to_zero() {
        let session = session(1, dt(2026, 3, 2, 8, 0), Some(60), 7200);
        assert_eq!(session_minutes(&session), Some(0));
    }

    #[test]
    fn test_live_minutes_for_active_session() {
        let session = session(1, dt(2026, 3, 2, 8, 0), None, 600);
        assert_eq!(live_minutes(&session, dt(2026, 3, 2, 10, 0)), 110);
    }

    #[test]
    fn test_earnings_derivation() {
        // 600 worked minutes at 20/h: 200 gross, 138 net at the 0.69 factor.
        let sessions = vec![session(1, dt(2026, 3, 2, 8, 0), Some(600), 0)];
        let refs: Vec<&Session> = sessions.iter().collect();

        let totals = compute_total(&refs, &WAGE);
        assert_eq!(totals.hours, 10);
        assert_eq!(totals.minutes, 0);
        assert!((totals.gross_earnings - 200.0).abs() < 1e-9);
        assert!((totals.net_earnings - 138.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_split_hours_and_minutes() {
        let sessions = vec![
            session(1, dt(2026, 3, 2, 8, 0), Some(65), 0),
            session(2, dt(2026, 3, 3, 8, 0), Some(60), 0),
        ];
        let refs: Vec<&Session> = sessions.iter().collect();

        let totals = compute_total(&refs, &WAGE);
        assert_eq!(totals.hours, 2);
        assert_eq!(totals.minutes, 5);
    }

    #[test]
    fn test_active_sessions_contribute_zero_to_totals() {
        let sessions = vec![
            session(1, dt(2026, 3, 2, 8, 0), Some(120), 0),
            session(2, dt(2026, 3, 3, 8, 0), None, 0),
        ];
        let refs: Vec<&Session> = sessions.iter().collect();

        let totals = compute_total(&refs, &WAGE);
        assert_eq!(totals.hours, 2);
        assert_eq!(totals.minutes, 0);
    }

    #[test]
    fn test_compute_total_is_idempotent() {
        let sessions = vec![
            session(1, dt(2026, 3, 2, 8, 0), Some(475), 900),
            session(2, dt(2026, 3, 3, 8, 0), Some(312), 600),
        ];
        let refs: Vec<&Session> = sessions.iter().collect();

        let first = compute_total(&refs, &WAGE);
        let second = compute_total(&refs, &WAGE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_total_over_empty_list_is_zero() {
        let totals = compute_total(&[], &WAGE);
        assert_eq!(
            totals,
            TimeTotals {
                hours: 0,
                minutes: 0,
                gross_earnings: 0.0,
                net_earnings: 0.0
            }
        );
    }

    #[test]
    fn test_week_window_is_monday_to_sunday() {
        // 2026-03-04 is a Wednesday.
        let (start, end) = week_window(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    }

    #[test]
    fn test_weekly_filter_boundaries() {
        let sessions = vec![
            session(1, dt(2026, 3, 2, 9, 0), Some(60), 0),  // Monday of the week
            session(2, dt(2026, 3, 8, 9, 0), Some(60), 0),  // Sunday of the week
            session(3, dt(2026, 3, 1, 9, 0), Some(60), 0),  // preceding Sunday
        ];

        let (start, end) = week_window(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        let filtered = filter_by_range(&sessions, start, end);

        let ids: Vec<i64> = filtered.iter().map(|session| session.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_month_window() {
        let (start, end) = month_window(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }
}
