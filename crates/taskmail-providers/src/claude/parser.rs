use crate::{Error, Result};
use crate::traits::{PayloadInput, PayloadParser};
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use taskmail_types::{NotificationRecord, Source};

use super::io::read_transcript_file;
use super::schema::ClaudeHookInput;

/// Parser for the Claude Code hook input on stdin
pub struct ClaudeParser;

impl PayloadParser for ClaudeParser {
    fn id(&self) -> &'static str {
        "claude_code"
    }

    fn input(&self) -> PayloadInput {
        PayloadInput::Stdin
    }

    fn parse(&self, raw: &str, now: DateTime<FixedOffset>) -> Result<NotificationRecord> {
        let input: ClaudeHookInput = serde_json::from_str(raw)?;
        if !input.has_hook_fields() {
            return Err(Error::Parse("object has no Claude Code hook fields".to_string()));
        }
        Ok(normalize_claude_input(input, now))
    }
}

/// Map hook input to a record, keeping transcript order and roles.
///
/// An inline `transcript` wins over `transcript_path`. A transcript file that
/// cannot be read leaves the conversation empty.
pub(crate) fn normalize_claude_input(
    input: ClaudeHookInput,
    now: DateTime<FixedOffset>,
) -> NotificationRecord {
    let mut record = NotificationRecord::new(Source::ClaudeCode, now);
    record.session_id = input.session_id;
    record.working_directory = input.cwd;
    record.event_type = input.hook_event_name;

    record.turns = match (input.transcript, input.transcript_path) {
        (Some(entries), _) => entries.iter().filter_map(|e| e.to_turn()).collect(),
        (None, Some(path)) => match read_transcript_file(Path::new(&path)) {
            Ok(turns) => turns,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "could not read transcript");
                Vec::new()
            }
        },
        (None, None) => Vec::new(),
    };

    record
}
