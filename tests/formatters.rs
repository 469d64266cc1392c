#[cfg(test)]
mod tests {
    use chrono::Duration;
    use shiftshift::libs::formatter::{format_duration, format_hm};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::hours(24)), "24:00");
    }

    #[test]
    fn test_format_duration_clamps_negative_values() {
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }

    #[test]
    fn test_format_hm() {
        assert_eq!(format_hm(0), "0:00");
        assert_eq!(format_hm(5), "0:05");
        assert_eq!(format_hm(60), "1:00");
        assert_eq!(format_hm(125), "2:05");
        assert_eq!(format_hm(-10), "0:00");
    }
}
