#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftshift::libs::report::render_document;
    use shiftshift::libs::session::Session;

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn session(id: i64, start: NaiveDateTime, minutes: Option<i64>, break_secs: i64, notes: &str) -> Session {
        Session {
            id,
            user_id: "driver-1".to_string(),
            start,
            end: minutes.map(|m| start + Duration::minutes(m)),
            breaks: Vec::new(),
            break_secs,
            notes: notes.to_string(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_document_header_and_session_blocks() {
        let sessions = vec![
            session(1, dt(2026, 3, 2, 8, 30), Some(510), 1800, "Delivered in Rotterdam"),
            session(2, dt(2026, 3, 3, 7, 0), Some(480), 0, ""),
        ];
        let refs: Vec<&Session> = sessions.iter().collect();

        let document = render_document(&refs, "J. Janssen", dt(2026, 3, 4, 12, 0));

        assert!(document.contains("Driver: J. Janssen"));
        assert!(document.contains("Generated: 04-03-2026 12:00"));
        assert!(document.contains("Date: 02-03-2026"));
        assert!(document.contains("Time: 08:30 - 17:00"));
        // 510 gross minutes minus 30 break minutes.
        assert!(document.contains("Duration: 8:00"));
        assert!(document.contains("Notes: Delivered in Rotterdam"));
        // The second session has no notes and no notes line.
        assert!(document.contains("Date: 03-03-2026"));
    }

    #[test]
    fn test_document_renders_active_session_placeholder() {
        let sessions = vec![session(1, dt(2026, 3, 2, 8, 30), None, 0, "")];
        let refs: Vec<&Session> = sessions.iter().collect();

        let document = render_document(&refs, "J. Janssen", dt(2026, 3, 2, 12, 0));

        assert!(document.contains("Time: 08:30 - active"));
        assert!(document.contains("Duration: -"));
    }

    #[test]
    fn test_document_paginates_long_reports() {
        let sessions: Vec<Session> = (0..30)
            .map(|i| session(i + 1, dt(2026, 3, 2, 8, 0) + Duration::days(i), Some(480), 0, ""))
            .collect();
        let refs: Vec<&Session> = sessions.iter().collect();

        let document = render_document(&refs, "J. Janssen", dt(2026, 4, 2, 12, 0));

        // 30 four-line blocks after the header spill onto three pages.
        assert_eq!(document.matches('\x0c').count(), 2);
    }
}
