pub mod channels;
pub mod config;
pub mod dispatch;
pub mod error;

pub use channels::{ChannelSetup, EmailChannel, NotificationChannel, create_channel};
pub use config::{EmailSettings, NotifyConfig, RECOGNIZED_KEYS, Settings, resolve_env_file};
pub use dispatch::{ChannelOutcome, DispatchReport, Dispatcher};
pub use error::{Error, Result};
