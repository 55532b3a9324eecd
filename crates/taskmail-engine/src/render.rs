use taskmail_types::{NotificationRecord, Source};

use crate::html::render_html;
use crate::text::render_text;

/// A ready-to-send email body pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub plain_text: String,
}

/// Subject line (and HTML title) for a source
pub fn subject_for(source: Source) -> String {
    format!("{} task completed", source.label())
}

/// Render a record into HTML and plain-text bodies.
///
/// Total over well-formed records: empty conversations and missing
/// optional fields are all valid input.
pub fn render(record: &NotificationRecord) -> RenderedEmail {
    let subject = subject_for(record.source);
    RenderedEmail {
        html: render_html(record, &subject),
        plain_text: render_text(record, &subject),
        subject,
    }
}
