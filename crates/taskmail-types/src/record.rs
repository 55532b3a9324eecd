use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Codex event type that marks a finished agent turn.
///
/// Codex emits other notify events as well; only this one produces an email.
pub const CODEX_TURN_COMPLETE: &str = "agent-turn-complete";

/// Which assistant invoked the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Claude Code `Stop` hook (JSON on stdin)
    ClaudeCode,
    /// Codex CLI `notify` program (JSON as first argument)
    Codex,
    /// Payload matched neither shape
    Unknown,
}

impl Source {
    /// Stable identifier used in logs
    pub fn id(&self) -> &'static str {
        match self {
            Source::ClaudeCode => "claude_code",
            Source::Codex => "codex",
            Source::Unknown => "unknown",
        }
    }

    /// Human-readable name shown in the email
    pub fn label(&self) -> &'static str {
        match self {
            Source::ClaudeCode => "Claude Code",
            Source::Codex => "Codex",
            Source::Unknown => "AI",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Map a provider role string to a role.
    ///
    /// Claude Code transcripts use `human` for the user in older formats.
    pub fn from_provider(name: &str) -> Option<Self> {
        match name {
            "user" | "human" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One message of the conversation, content kept verbatim until rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Unified view of a task-completion payload, independent of the caller
///
/// Optional fields distinguish "absent" (`None`, row omitted) from
/// "present but empty" (`Some("")`, row shown with an empty value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub source: Source,
    pub completed_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_id: Option<String>,
    #[serde(default)]
    pub turns: Vec<ConversationTurn>,
    /// Caller payload, kept when no conversation could be extracted from it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_payload: Option<String>,
}

impl NotificationRecord {
    /// Empty record for the given source
    pub fn new(source: Source, completed_at: DateTime<FixedOffset>) -> Self {
        Self {
            source,
            completed_at,
            working_directory: None,
            session_id: None,
            event_type: None,
            thread_id: None,
            turn_id: None,
            turns: Vec::new(),
            raw_payload: None,
        }
    }

    /// Record produced when the payload could not be classified
    pub fn unknown(completed_at: DateTime<FixedOffset>) -> Self {
        Self::new(Source::Unknown, completed_at)
    }

    pub fn with_turn(mut self, turn: ConversationTurn) -> Self {
        self.turns.push(turn);
        self
    }

    /// Whether this record should produce a notification.
    ///
    /// Codex fires `notify` for several event types; anything other than a
    /// completed agent turn is ignored.
    pub fn is_actionable(&self) -> bool {
        match self.source {
            Source::Codex => self.event_type.as_deref() == Some(CODEX_TURN_COMPLETE),
            Source::ClaudeCode | Source::Unknown => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_codex_actionable_only_for_turn_complete() {
        let mut record = NotificationRecord::new(Source::Codex, fixed_now());
        assert!(!record.is_actionable());

        record.event_type = Some("agent-turn-complete".to_string());
        assert!(record.is_actionable());

        record.event_type = Some("approval-requested".to_string());
        assert!(!record.is_actionable());
    }

    #[test]
    fn test_claude_and_unknown_always_actionable() {
        assert!(NotificationRecord::new(Source::ClaudeCode, fixed_now()).is_actionable());
        assert!(NotificationRecord::unknown(fixed_now()).is_actionable());
    }

    #[test]
    fn test_role_from_provider() {
        assert_eq!(Role::from_provider("human"), Some(Role::User));
        assert_eq!(Role::from_provider("user"), Some(Role::User));
        assert_eq!(Role::from_provider("assistant"), Some(Role::Assistant));
        assert_eq!(Role::from_provider("system"), None);
    }

    #[test]
    fn test_record_serialization_omits_absent_fields() {
        let record = NotificationRecord::new(Source::ClaudeCode, fixed_now())
            .with_turn(ConversationTurn::user("hi"));

        insta::assert_json_snapshot!(record, @r###"
        {
          "source": "claude_code",
          "completed_at": "2025-01-02T03:04:05+08:00",
          "turns": [
            {
              "role": "user",
              "content": "hi"
            }
          ]
        }
        "###);
    }
}
