use crate::Result;
use crate::content::display_payload;
use crate::traits::{PayloadInput, PayloadParser};
use chrono::{DateTime, FixedOffset};
use taskmail_types::{ConversationTurn, NotificationRecord, Source};

use super::schema::CodexNotification;

/// Parser for the Codex `notify` argument
pub struct CodexParser;

impl PayloadParser for CodexParser {
    fn id(&self) -> &'static str {
        "codex"
    }

    fn input(&self) -> PayloadInput {
        PayloadInput::Argument
    }

    fn parse(&self, raw: &str, now: DateTime<FixedOffset>) -> Result<NotificationRecord> {
        let notification: CodexNotification = serde_json::from_str(raw)?;
        let mut record = normalize_codex_notification(notification, now);
        if record.turns.is_empty() {
            record.raw_payload = Some(display_payload(raw));
        }
        Ok(record)
    }
}

/// Map a Codex notification to a record.
///
/// Input messages become user turns in order; the last assistant message
/// becomes a single assistant turn after them.
pub(crate) fn normalize_codex_notification(
    notification: CodexNotification,
    now: DateTime<FixedOffset>,
) -> NotificationRecord {
    let mut record = NotificationRecord::new(Source::Codex, now);
    record.event_type = Some(notification.event_type);
    record.thread_id = notification.thread_id;
    record.turn_id = notification.turn_id;
    record.working_directory = notification.cwd;

    for message in notification.input_messages.unwrap_or_default() {
        if let Some(text) = message.to_text() {
            record.turns.push(ConversationTurn::user(text));
        }
    }

    if let Some(text) = notification
        .last_assistant_message
        .as_ref()
        .and_then(|m| m.to_text())
    {
        record.turns.push(ConversationTurn::assistant(text));
    }

    record
}
