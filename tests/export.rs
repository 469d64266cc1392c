#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftshift::libs::export::{ExportFormat, Exporter};
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

    fn sample_sessions() -> Vec<Session> {
        vec![
            session(1, dt(2026, 3, 2, 8, 30), Some(510), 1800, "Delivered in Rotterdam"),
            session(2, dt(2026, 3, 3, 8, 30), None, 0, ""),
        ]
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("sessions.csv");
        let sessions = sample_sessions();
        let refs: Vec<&Session> = sessions.iter().collect();

        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export(&refs).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Date,Start Time,End Time,Duration,Notes"));
        assert_eq!(lines.next(), Some("02-03-2026,08:30,17:00,8:00,Delivered in Rotterdam"));
        // The active session keeps empty end and duration placeholders.
        assert_eq!(lines.next(), Some("03-03-2026,08:30,,,"));
    }

    #[test]
    fn test_export_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("sessions.json");
        let sessions = sample_sessions();
        let refs: Vec<&Session> = sessions.iter().collect();

        Exporter::new(ExportFormat::Json, Some(output_path.clone())).export(&refs).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert_eq!(rows[0]["date"], "02-03-2026");
        assert_eq!(rows[0]["duration"], "8:00");
        assert_eq!(rows[1]["end_time"], "");
    }

    #[test]
    fn test_export_excel() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("sessions.xlsx");
        let sessions = sample_sessions();
        let refs: Vec<&Session> = sessions.iter().collect();

        Exporter::new(ExportFormat::Excel, Some(output_path.clone())).export(&refs).unwrap();

        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }
}
