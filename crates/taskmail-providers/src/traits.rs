use crate::Result;
use chrono::{DateTime, FixedOffset};
use taskmail_types::NotificationRecord;

/// Where a caller delivers its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadInput {
    /// First command-line argument (Codex `notify`)
    Argument,
    /// Standard input (Claude Code hooks)
    Stdin,
}

/// Payload normalization for one caller
///
/// Responsibilities:
/// - Declare which input channel the caller writes to
/// - Deserialize the caller's payload schema
/// - Map it onto the unified `NotificationRecord`
pub trait PayloadParser: Send + Sync {
    /// Unique provider ID (e.g., "claude_code", "codex")
    fn id(&self) -> &'static str;

    /// Input channel this parser reads from
    fn input(&self) -> PayloadInput;

    /// Parse raw payload text.
    ///
    /// Returns an error when the text is not this caller's shape; callers
    /// treat that as "no match" and move on.
    fn parse(&self, raw: &str, now: DateTime<FixedOffset>) -> Result<NotificationRecord>;
}
