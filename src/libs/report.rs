//! Printable work report rendering.
//!
//! Produces a fixed-width text document: a header with the owner name and
//! generation timestamp, then one block per session with date, start-end
//! times, worked duration and notes. A form feed starts a new page once the
//! current page runs past its line capacity, so the output prints cleanly
//! on fixed-height pages.

use crate::libs::formatter::{format_hm, DATE_FORMAT, TIME_FORMAT};
use crate::libs::session::Session;
use crate::libs::summary;
use chrono::NaiveDateTime;

/// Lines per page before a form feed starts the next one.
pub const PAGE_LINES: usize = 56;

/// Renders the paginated report for the given sessions.
///
/// Sessions still running are rendered with an `active` end marker and a
/// placeholder duration; no validation is performed here.
pub fn render_document(sessions: &[&Session], owner: &str, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    let mut page_lines = 0usize;

    for line in [
        "ShiftShift work report".to_string(),
        format!("Driver: {}", owner),
        format!("Generated: {}", generated_at.format("%d-%m-%Y %H:%M")),
        String::new(),
    ] {
        out.push_str(&line);
        out.push('\n');
        page_lines += 1;
    }

    for session in sessions {
        if page_lines > PAGE_LINES {
            out.push('\x0c');
            page_lines = 0;
        }

        let end = session
            .end
            .map_or_else(|| "active".to_string(), |end| end.format(TIME_FORMAT).to_string());
        let duration = summary::session_minutes(session).map_or_else(|| "-".to_string(), format_hm);

        let mut block = vec![
            format!("Date: {}", session.start.format(DATE_FORMAT)),
            format!("Time: {} - {}", session.start.format(TIME_FORMAT), end),
            format!("Duration: {}", duration),
        ];
        if !session.notes.is_empty() {
            block.push(format!("Notes: {}", session.notes));
        }
        block.push(String::new());

        for line in block {
            out.push_str(&line);
            out.push('\n');
            page_lines += 1;
        }
    }

    out
}
