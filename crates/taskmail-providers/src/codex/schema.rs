use serde::Deserialize;
use serde_json::Value;

use crate::content::MessageContent;

/// Payload Codex passes to the `notify` program as its last argument
///
/// ```json
/// {"type":"agent-turn-complete","thread-id":"...","turn-id":"...",
///  "cwd":"/repo","input-messages":["fix the test"],
///  "last-assistant-message":"Done."}
/// ```
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CodexNotification {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub turn_id: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub input_messages: Option<Vec<CodexMessage>>,
    #[serde(default)]
    pub last_assistant_message: Option<CodexMessage>,
}

/// A message is either bare text or a `{"role": ..., "content": ...}` object
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum CodexMessage {
    Text(String),
    Structured {
        #[serde(default)]
        content: Option<MessageContent>,
    },
    Other(Value),
}

impl CodexMessage {
    pub fn to_text(&self) -> Option<String> {
        match self {
            CodexMessage::Text(text) => taskmail_types::non_blank(text),
            CodexMessage::Structured { content } => content.as_ref()?.to_text(),
            CodexMessage::Other(_) => None,
        }
    }
}
