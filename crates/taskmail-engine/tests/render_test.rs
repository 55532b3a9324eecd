use chrono::{DateTime, FixedOffset, TimeZone};
use std::io::Cursor;
use taskmail_engine::render;
use taskmail_providers::normalize;
use taskmail_types::{ConversationTurn, NotificationRecord, Source};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
        .unwrap()
}

fn codex_scenario() -> NotificationRecord {
    let payload = r#"{"type": "agent-turn-complete", "input-messages": ["你好"], "last-assistant-message": "你好！"}"#;
    normalize(&[payload.to_string()], None, now())
}

fn claude_scenario() -> NotificationRecord {
    let mut stdin = Cursor::new(r#"{"session_id": "test", "cwd": "/tmp", "transcript": []}"#);
    normalize(&[], Some(&mut stdin), now())
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_codex_turns_in_role_tagged_containers() {
    let email = render(&codex_scenario());

    assert_eq!(email.subject, "Codex task completed");
    assert!(email.html.contains("<div class=\"turn turn-user\""));
    assert!(email.html.contains("<div class=\"turn turn-assistant\""));
    assert!(email.html.contains("你好<br>"));
    assert!(email.html.contains("你好！<br>"));

    let user_at = email.html.find("turn-user").unwrap();
    let assistant_at = email.html.find("turn-assistant").unwrap();
    assert!(user_at < assistant_at);
}

#[test]
fn test_claude_empty_conversation_block() {
    let email = render(&claude_scenario());

    assert_eq!(email.subject, "Claude Code task completed");
    assert!(email.html.contains(">Conversation</span>"));
    assert_eq!(count(&email.html, "class=\"turn "), 0);
    assert!(!email.html.contains("raw-payload"));
    assert!(email.html.contains(">/tmp</td>"));
    assert!(email.html.contains(">test</td>"));
    assert!(email.html.contains("#D97706"));
}

#[test]
fn test_unknown_record_renders() {
    let email = render(&NotificationRecord::unknown(now()));

    assert_eq!(email.subject, "AI task completed");
    assert!(email.html.contains("#2563EB"));
    assert!(email.html.contains("2025-03-14 09:26:53"));
    assert!(!email.html.contains("Working directory"));
    assert!(!email.html.contains("Session ID"));
}

#[test]
fn test_render_is_deterministic() {
    let record = codex_scenario();
    assert_eq!(render(&record), render(&record));
}

#[test]
fn test_turn_content_is_always_escaped() {
    let hostile = "<script>alert('x')</script> & <b>\n```\n</pre><img src=x onerror=alert(1)>\n```\n**<i>**";
    let record = NotificationRecord::new(Source::Codex, now())
        .with_turn(ConversationTurn::user(hostile))
        .with_turn(ConversationTurn::assistant(hostile));
    let html = render(&record).html;

    for raw in ["<script>", "<b>", "<img", "<i>", "</pre><img"] {
        assert!(!html.contains(raw), "raw markup {raw:?} leaked into output");
    }
    assert_eq!(count(&html, "&lt;script&gt;"), 2);
    assert_eq!(count(&html, "&lt;img src=x onerror=alert(1)&gt;"), 2);
    assert_eq!(count(&html, "<strong>&lt;i&gt;</strong>"), 2);
}

#[test]
fn test_metadata_is_escaped() {
    let mut record = NotificationRecord::new(Source::ClaudeCode, now());
    record.working_directory = Some("/tmp/<dir>&co".to_string());
    let html = render(&record).html;

    assert!(html.contains("/tmp/&lt;dir&gt;&amp;co"));
    assert!(!html.contains("<dir>"));
}

#[test]
fn test_plain_text_codex() {
    let email = render(&codex_scenario());

    insta::assert_snapshot!(email.plain_text.trim_end(), @r###"
    Codex task completed

    Completed at: 2025-03-14 09:26:53
    Event type: agent-turn-complete

    Conversation

    [USER]
    你好

    [AI ASSISTANT]
    你好！

    --
    taskmail | 2025-03-14 09:26:53
    This email was generated automatically. Please do not reply.
    "###);
}

#[test]
fn test_plain_text_has_no_markup_translation() {
    let record = NotificationRecord::new(Source::Codex, now())
        .with_turn(ConversationTurn::assistant("**bold** <tag>\n```\ncode\n```"));
    let text = render(&record).plain_text;

    assert!(text.contains("**bold** <tag>\n```\ncode\n```"));
    assert!(!text.contains("<strong>"));
    assert!(!text.contains("&lt;"));
}

#[test]
fn test_raw_payload_shown_when_no_turns() {
    let mut record = NotificationRecord::unknown(now());
    record.raw_payload = Some("{\n  \"note\": \"<b>hi</b> & bye\"\n}".to_string());
    let email = render(&record);

    assert_eq!(count(&email.html, "class=\"turn "), 0);
    assert_eq!(count(&email.html, "<pre class=\"raw-payload\""), 1);
    assert!(email.html.contains("&quot;note&quot;: &quot;&lt;b&gt;hi&lt;/b&gt; &amp; bye&quot;"));
    assert!(!email.html.contains("<b>hi</b>"));
    assert!(email.plain_text.contains("Conversation\n\n{\n  \"note\": \"<b>hi</b> & bye\"\n}\n"));
}

#[test]
fn test_raw_payload_hidden_when_turns_exist() {
    let mut record = codex_scenario();
    record.raw_payload = Some("raw".to_string());
    let email = render(&record);

    assert!(!email.html.contains("raw-payload"));
    assert!(!email.plain_text.contains("\nraw\n"));
}

#[test]
fn test_turnless_codex_payload_end_to_end() {
    let record = normalize(&[r#"{"type": "agent-turn-complete", "cwd": "/w"}"#.to_string()], None, now());
    let html = render(&record).html;

    assert_eq!(count(&html, "class=\"turn "), 0);
    assert!(html.contains("&quot;type&quot;: &quot;agent-turn-complete&quot;"));
}
