use serde::Deserialize;
use serde_json::Value;
use taskmail_types::non_blank;

/// Message body as sent by either caller: a bare string or a list of blocks
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum ContentBlock {
    Text(String),
    Typed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        text: Option<String>,
    },
    Other(Value),
}

impl ContentBlock {
    /// Text carried by this block; tool calls, images and results carry none
    fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(text) => Some(text),
            ContentBlock::Typed { kind, text } if is_text_kind(kind) => text.as_deref(),
            ContentBlock::Typed { .. } | ContentBlock::Other(_) => None,
        }
    }
}

/// Block types holding readable text (`input_text`/`output_text` are Codex's)
fn is_text_kind(kind: &str) -> bool {
    matches!(kind, "text" | "input_text" | "output_text")
}

/// Payload text for display: pretty-printed when it is JSON, trimmed otherwise
pub(crate) fn display_payload(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| raw.trim().to_string())
}

impl MessageContent {
    /// Trimmed text of the message, text blocks separated by a blank line
    pub(crate) fn to_text(&self) -> Option<String> {
        match self {
            MessageContent::Text(text) => non_blank(text),
            MessageContent::Blocks(blocks) => {
                let texts: Vec<String> = blocks
                    .iter()
                    .filter_map(|b| b.text())
                    .filter_map(non_blank)
                    .collect();
                if texts.is_empty() {
                    None
                } else {
                    Some(texts.join("\n\n"))
                }
            }
            MessageContent::Other(_) => None,
        }
    }
}
