use crate::Result;
use crate::config::{EmailSettings, NotifyConfig};
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::time::Duration;
use taskmail_engine::RenderedEmail;

use super::NotificationChannel;

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// SMTP email channel
///
/// Implicit TLS (`SMTP_USE_SSL=true`, usually port 465) connects with
/// `SmtpTransport::relay`; otherwise the connection is upgraded with STARTTLS.
pub struct EmailChannel {
    settings: EmailSettings,
}

impl EmailChannel {
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &NotifyConfig) -> Result<Self> {
        Ok(Self::new(EmailSettings::from_config(config)?))
    }

    /// Build the multipart/alternative message (plain text first, then HTML)
    pub fn build_message(&self, email: &RenderedEmail) -> Result<Message> {
        let from: Mailbox = self.settings.from.parse()?;
        let mut builder = Message::builder().from(from).subject(email.subject.as_str());
        for recipient in &self.settings.to {
            let to: Mailbox = recipient.parse()?;
            builder = builder.to(to);
        }

        let message = builder.multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.plain_text.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html.clone()),
                ),
        )?;

        Ok(message)
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let builder = if self.settings.use_tls {
            SmtpTransport::relay(&self.settings.host)?
        } else {
            SmtpTransport::starttls_relay(&self.settings.host)?
        };

        Ok(builder
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.user.clone(),
                self.settings.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build())
    }
}

impl NotificationChannel for EmailChannel {
    fn id(&self) -> &'static str {
        "email"
    }

    fn send(&self, email: &RenderedEmail) -> Result<()> {
        let message = self.build_message(email)?;
        let transport = self.transport()?;
        transport.send(&message)?;
        tracing::debug!(
            host = %self.settings.host,
            recipients = self.settings.to.len(),
            "email delivered to SMTP server"
        );
        Ok(())
    }
}
