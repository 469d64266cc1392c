//! Time and duration formatting helpers.
//!
//! All user-facing timestamps use the same formats: dates as `DD-MM-YYYY`,
//! clock times as `HH:MM` (24-hour), accumulated durations as zero-padded
//! `HH:MM`, and per-session durations as `H:MM`.

use chrono::Duration;

/// Date format used in reports and exports.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Clock time format used in reports and exports.
pub const TIME_FORMAT: &str = "%H:%M";

/// Formats a duration as a zero-padded "HH:MM" string.
///
/// Negative durations are treated as zero.
///
/// # Examples
///
/// ```rust
/// use shiftshift::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a number of minutes as "H:MM", the duration format used in
/// session rows and delimited exports.
pub fn format_hm(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
