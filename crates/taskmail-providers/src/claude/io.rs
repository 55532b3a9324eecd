use crate::Result;
use std::path::Path;
use taskmail_types::ConversationTurn;

use super::schema::TranscriptEntry;

/// Read conversation turns from a Claude Code JSONL transcript.
///
/// Lines are decoded independently, so blank, malformed or non-UTF-8 lines
/// are skipped; only a missing or unreadable file is an error.
pub fn read_transcript_file(path: &Path) -> Result<Vec<ConversationTurn>> {
    let bytes = std::fs::read(path)?;

    let mut turns = Vec::new();
    for line in bytes.split(|b| *b == b'\n') {
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let entry: TranscriptEntry = match serde_json::from_slice(line) {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if let Some(turn) = entry.to_turn() {
            turns.push(turn);
        }
    }

    Ok(turns)
}
