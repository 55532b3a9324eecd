use chrono::{DateTime, FixedOffset};
use std::io::Read;
use taskmail_types::NotificationRecord;

use crate::content::display_payload;
use crate::registry::create_all_parsers;
use crate::traits::PayloadInput;

/// Turn an invocation into a notification record.
///
/// Parsers are tried in registry order against their input channel. Codex
/// appends its payload as the last argument, so arguments are tried last to
/// first and stray leading arguments are ignored. Stdin is read at most once
/// and only if no argument matched.
///
/// When nothing matches the result is an `Unknown` record with no turns,
/// carrying the first non-blank input as its raw payload; this never fails.
pub fn normalize(
    args: &[String],
    mut stdin: Option<&mut dyn Read>,
    now: DateTime<FixedOffset>,
) -> NotificationRecord {
    let mut stdin_text: Option<String> = None;
    let mut stdin_read = false;
    let mut unmatched: Option<String> = None;

    for parser in create_all_parsers() {
        let candidates: Vec<String> = match parser.input() {
            PayloadInput::Argument => args.iter().rev().cloned().collect(),
            PayloadInput::Stdin => {
                if !stdin_read {
                    stdin_read = true;
                    stdin_text = stdin.take().and_then(read_input);
                }
                stdin_text.iter().cloned().collect()
            }
        };

        for raw in candidates.into_iter().filter(|r| !r.trim().is_empty()) {
            match parser.parse(&raw, now) {
                Ok(record) => {
                    tracing::debug!(provider = parser.id(), turns = record.turns.len(), "payload matched");
                    return record;
                }
                Err(err) => {
                    tracing::debug!(provider = parser.id(), error = %err, "payload did not match");
                    if unmatched.is_none() {
                        unmatched = Some(raw);
                    }
                }
            }
        }
    }

    tracing::debug!("no provider matched, using fallback record");
    let mut record = NotificationRecord::unknown(now);
    record.raw_payload = unmatched.as_deref().map(display_payload);
    record
}

fn read_input(reader: &mut dyn Read) -> Option<String> {
    let mut buf = Vec::new();
    match reader.read_to_end(&mut buf) {
        Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read stdin");
            None
        }
    }
}
