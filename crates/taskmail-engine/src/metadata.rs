use taskmail_types::{NotificationRecord, shorten};

/// Timestamp layout used throughout the email
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SESSION_ID_WIDTH: usize = 12;
const THREAD_ID_WIDTH: usize = 16;
const TURN_ID_WIDTH: usize = 16;

/// One label/value line of the metadata card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

impl MetadataRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Metadata rows in display order.
///
/// The completion time is always present; other rows appear only when the
/// field is `Some`, even if its value is empty.
pub fn metadata_rows(record: &NotificationRecord) -> Vec<MetadataRow> {
    let mut rows = vec![MetadataRow::new(
        "Completed at",
        record.completed_at.format(TIMESTAMP_FORMAT).to_string(),
    )];

    if let Some(cwd) = &record.working_directory {
        rows.push(MetadataRow::new("Working directory", cwd.as_str()));
    }
    if let Some(session_id) = &record.session_id {
        rows.push(MetadataRow::new("Session ID", shorten(session_id, SESSION_ID_WIDTH)));
    }
    if let Some(event_type) = &record.event_type {
        rows.push(MetadataRow::new("Event type", event_type.as_str()));
    }
    if let Some(thread_id) = &record.thread_id {
        rows.push(MetadataRow::new("Thread ID", shorten(thread_id, THREAD_ID_WIDTH)));
    }
    if let Some(turn_id) = &record.turn_id {
        rows.push(MetadataRow::new("Turn ID", shorten(turn_id, TURN_ID_WIDTH)));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use taskmail_types::Source;

    fn record(source: Source) -> NotificationRecord {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 8, 30, 0)
            .unwrap();
        NotificationRecord::new(source, now)
    }

    #[test]
    fn test_only_completion_time_when_nothing_else() {
        let rows = metadata_rows(&record(Source::Unknown));
        assert_eq!(rows, vec![MetadataRow::new("Completed at", "2025-01-01 08:30:00")]);
    }

    #[test]
    fn test_present_but_empty_is_shown() {
        let mut r = record(Source::ClaudeCode);
        r.working_directory = Some(String::new());
        let rows = metadata_rows(&r);
        assert_eq!(rows[1], MetadataRow::new("Working directory", ""));
    }

    #[test]
    fn test_identifiers_are_shortened() {
        let mut r = record(Source::Codex);
        r.session_id = Some("0123456789abcdef".to_string());
        r.thread_id = Some("0199a213-81c0-7800-8aa1-bbab2a035a53".to_string());
        r.turn_id = Some("7".to_string());

        let labels: Vec<&str> = metadata_rows(&r).iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Completed at", "Session ID", "Thread ID", "Turn ID"]);

        let rows = metadata_rows(&r);
        assert_eq!(rows[1].value, "0123456789ab...");
        assert_eq!(rows[2].value, "0199a213-81c0-78...");
        assert_eq!(rows[3].value, "7");
    }
}
