use serde::Deserialize;
use serde_json::Value;
use taskmail_types::{ConversationTurn, Role};

use crate::content::MessageContent;

/// JSON object Claude Code writes to a hook's stdin
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ClaudeHookInput {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub hook_event_name: Option<String>,
    /// Inline transcript (test harnesses and older integrations)
    #[serde(default)]
    pub transcript: Option<Vec<TranscriptEntry>>,
    /// JSONL transcript file written by Claude Code
    #[serde(default)]
    pub transcript_path: Option<String>,
}

impl ClaudeHookInput {
    /// At least one field Claude Code always sends is present
    pub fn has_hook_fields(&self) -> bool {
        self.session_id.is_some()
            || self.cwd.is_some()
            || self.hook_event_name.is_some()
            || self.transcript.is_some()
            || self.transcript_path.is_some()
    }
}

/// One transcript entry, either flat or in the JSONL record layout
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum TranscriptEntry {
    /// `{"role": "user", "content": "..."}`
    Flat {
        role: String,
        #[serde(default)]
        content: Option<MessageContent>,
    },
    /// `{"type": "user", "message": {"role": "user", "content": [...]}}`
    Record {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        message: Option<TranscriptMessage>,
        #[serde(default, rename = "isMeta")]
        is_meta: bool,
        #[serde(default, rename = "isSidechain")]
        is_sidechain: bool,
    },
    Other(Value),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum TranscriptMessage {
    Text(String),
    Structured {
        #[serde(default)]
        content: Option<MessageContent>,
    },
    Other(Value),
}

impl TranscriptMessage {
    fn to_text(&self) -> Option<String> {
        match self {
            TranscriptMessage::Text(text) => taskmail_types::non_blank(text),
            TranscriptMessage::Structured { content } => content.as_ref()?.to_text(),
            TranscriptMessage::Other(_) => None,
        }
    }
}

impl TranscriptEntry {
    /// Conversation turn for this entry.
    ///
    /// Entries from other speakers (system, summaries, snapshots), meta
    /// entries, subagent sidechains and entries without text yield `None`.
    pub fn to_turn(&self) -> Option<ConversationTurn> {
        let (role, text) = match self {
            TranscriptEntry::Flat { role, content } => {
                (Role::from_provider(role)?, content.as_ref()?.to_text()?)
            }
            TranscriptEntry::Record {
                kind,
                message,
                is_meta,
                is_sidechain,
            } => {
                if *is_meta || *is_sidechain {
                    return None;
                }
                (Role::from_provider(kind)?, message.as_ref()?.to_text()?)
            }
            TranscriptEntry::Other(_) => return None,
        };
        Some(ConversationTurn {
            role,
            content: text,
        })
    }
}
