use taskmail_engine::RenderedEmail;
use taskmail_types::NotificationRecord;

use crate::channels::{ChannelSetup, create_channel};
use crate::config::NotifyConfig;

/// What happened on one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Sent,
    Failed(String),
    Skipped(String),
}

/// Per-channel outcomes of one dispatch, in `NOTIFY_CHANNELS` order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcomes: Vec<(String, ChannelOutcome)>,
}

impl DispatchReport {
    pub fn sent_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == ChannelOutcome::Sent)
            .count()
    }

    /// Channels a send was actually attempted on
    pub fn attempted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| !matches!(o, ChannelOutcome::Skipped(_)))
            .count()
    }
}

/// Sends a rendered notification to every enabled channel.
///
/// Never fails: every error becomes a `ChannelOutcome` and a log line.
pub struct Dispatcher {
    channels: Vec<ChannelSetup>,
}

impl Dispatcher {
    pub fn new(channels: Vec<ChannelSetup>) -> Self {
        Self { channels }
    }

    pub fn from_config(config: &NotifyConfig) -> Self {
        Self::new(
            config
                .channels
                .iter()
                .map(|name| create_channel(name, config))
                .collect(),
        )
    }

    pub fn dispatch(&self, record: &NotificationRecord, email: &RenderedEmail) -> DispatchReport {
        let mut report = DispatchReport::default();

        if !record.is_actionable() {
            tracing::debug!(
                source = %record.source,
                event_type = record.event_type.as_deref().unwrap_or(""),
                "event does not trigger a notification"
            );
            return report;
        }

        if self.channels.is_empty() {
            tracing::info!("no notification channels enabled");
            return report;
        }

        for setup in &self.channels {
            let outcome = match setup {
                ChannelSetup::Ready(channel) => match channel.send(email) {
                    Ok(()) => ChannelOutcome::Sent,
                    Err(err) => {
                        tracing::warn!(channel = channel.id(), error = %err, "notification failed");
                        ChannelOutcome::Failed(err.to_string())
                    }
                },
                ChannelSetup::Unconfigured { name, reason } => {
                    tracing::info!(channel = %name, reason = %reason, "channel not configured, skipping");
                    ChannelOutcome::Skipped(reason.clone())
                }
                ChannelSetup::Unknown { name } => {
                    tracing::warn!(channel = %name, "unknown notification channel");
                    ChannelOutcome::Skipped(format!("unknown channel '{}'", name))
                }
            };
            report.outcomes.push((setup.name().to_string(), outcome));
        }

        tracing::info!(
            "notifications sent: {}/{}",
            report.sent_count(),
            report.attempted_count()
        );
        report
    }
}
