use taskmail_types::NotificationRecord;

use crate::html::{AUTOMATED_NOTICE, FOOTER_IDENTIFIER};
use crate::metadata::{TIMESTAMP_FORMAT, metadata_rows};
use crate::theme::RoleStyle;

/// Render the plain-text alternative.
///
/// Walks the same fields as the HTML body; turn content is copied verbatim.
pub fn render_text(record: &NotificationRecord, title: &str) -> String {
    let mut lines: Vec<String> = vec![title.to_string(), String::new()];

    for row in metadata_rows(record) {
        lines.push(format!("{}: {}", row.label, row.value));
    }

    lines.push(String::new());
    lines.push("Conversation".to_string());

    for turn in &record.turns {
        lines.push(String::new());
        lines.push(format!("[{}]", RoleStyle::for_role(turn.role).label));
        lines.push(turn.content.clone());
    }

    if record.turns.is_empty()
        && let Some(raw) = &record.raw_payload
    {
        lines.push(String::new());
        lines.push(raw.clone());
    }

    lines.push(String::new());
    lines.push("--".to_string());
    lines.push(format!(
        "{} | {}",
        FOOTER_IDENTIFIER,
        record.completed_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(AUTOMATED_NOTICE.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
