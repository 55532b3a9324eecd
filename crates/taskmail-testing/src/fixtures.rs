//! Caller payloads shaped like the ones Codex and Claude Code send.

use serde_json::json;

/// Codex `notify` argument for a completed turn
pub fn codex_turn_complete(user: &str, assistant: &str) -> String {
    json!({
        "type": "agent-turn-complete",
        "thread-id": "0199a213-81c0-7800-8aa1-bbab2a035a53",
        "turn-id": "3",
        "cwd": "/home/dev/project",
        "input-messages": [user],
        "last-assistant-message": assistant,
    })
    .to_string()
}

/// Codex `notify` argument for an event that must not notify
pub fn codex_other_event() -> String {
    json!({ "type": "approval-requested", "thread-id": "t-1" }).to_string()
}

/// Claude Code Stop-hook input with an inline transcript of `(role, text)` pairs
pub fn claude_stop(session_id: &str, cwd: &str, transcript: &[(&str, &str)]) -> String {
    let entries: Vec<_> = transcript
        .iter()
        .map(|(role, text)| json!({ "role": role, "content": text }))
        .collect();
    json!({
        "session_id": session_id,
        "cwd": cwd,
        "hook_event_name": "Stop",
        "transcript": entries,
    })
    .to_string()
}

/// Claude Code Stop-hook input pointing at a JSONL transcript file
pub fn claude_stop_with_path(session_id: &str, transcript_path: &str) -> String {
    json!({
        "session_id": session_id,
        "hook_event_name": "Stop",
        "stop_hook_active": false,
        "transcript_path": transcript_path,
    })
    .to_string()
}

/// JSONL transcript lines in Claude Code's on-disk record layout
pub fn claude_transcript_jsonl(turns: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (role, text) in turns {
        let line = json!({
            "type": role,
            "sessionId": "s",
            "message": {
                "role": role,
                "content": [{ "type": "text", "text": text }],
            },
        });
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Complete email settings for a dotenv file (points at an unroutable host)
pub fn smtp_env_file(host: &str, port: u16) -> String {
    format!(
        "NOTIFY_CHANNELS=email\n\
         SMTP_HOST={host}\n\
         SMTP_PORT={port}\n\
         SMTP_USER=bot@example.com\n\
         SMTP_PASSWORD=secret\n\
         SMTP_USE_SSL=false\n\
         EMAIL_FROM=bot@example.com\n\
         EMAIL_TO=dev@example.com\n"
    )
}
