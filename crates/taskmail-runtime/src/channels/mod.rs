mod email;

pub use self::email::EmailChannel;

use crate::Result;
use crate::config::NotifyConfig;
use taskmail_engine::RenderedEmail;

/// Delivery of a rendered notification over one medium
pub trait NotificationChannel {
    /// Channel name as written in `NOTIFY_CHANNELS`
    fn id(&self) -> &'static str;

    /// Deliver the email. Fire-and-forget: no retries.
    fn send(&self, email: &RenderedEmail) -> Result<()>;
}

/// Result of resolving one enabled channel name
pub enum ChannelSetup {
    /// Channel is configured and can send
    Ready(Box<dyn NotificationChannel>),
    /// Channel exists but its settings are incomplete
    Unconfigured { name: String, reason: String },
    /// No channel with this name
    Unknown { name: String },
}

impl ChannelSetup {
    pub fn name(&self) -> &str {
        match self {
            ChannelSetup::Ready(channel) => channel.id(),
            ChannelSetup::Unconfigured { name, .. } | ChannelSetup::Unknown { name } => name,
        }
    }
}

/// Create a channel by name
pub fn create_channel(name: &str, config: &NotifyConfig) -> ChannelSetup {
    match name {
        "email" => match EmailChannel::from_config(config) {
            Ok(channel) => ChannelSetup::Ready(Box::new(channel)),
            Err(err) => ChannelSetup::Unconfigured {
                name: name.to_string(),
                reason: err.to_string(),
            },
        },
        _ => ChannelSetup::Unknown {
            name: name.to_string(),
        },
    }
}
