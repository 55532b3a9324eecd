use taskmail_types::{ConversationTurn, NotificationRecord};

use crate::markup::{CODE_BLOCK_STYLE, escape_html, text_to_html};
use crate::metadata::{MetadataRow, TIMESTAMP_FORMAT, metadata_rows};
use crate::theme::{RoleStyle, Theme};

/// Identifier printed in the footer of every email
pub const FOOTER_IDENTIFIER: &str = "taskmail";

/// Notice below the card
pub const AUTOMATED_NOTICE: &str = "This email was generated automatically. Please do not reply.";

const FONT_STACK: &str =
    "-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,'Helvetica Neue',Arial,sans-serif";

/// Render the full HTML document.
///
/// Layout is table based with inline styles so it survives mail clients
/// that strip `<style>` blocks.
pub fn render_html(record: &NotificationRecord, title: &str) -> String {
    let theme = Theme::for_source(record.source);
    let timestamp = record.completed_at.format(TIMESTAMP_FORMAT).to_string();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str(
        "<head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1.0\"></head>\n",
    );
    html.push_str(&format!(
        "<body style=\"margin:0;padding:0;background-color:#F3F4F6;font-family:{};\">\n",
        FONT_STACK
    ));
    html.push_str(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"border-collapse:collapse;background:#F3F4F6;\">\n\
         <tr><td align=\"center\" style=\"padding:32px 16px;\">\n",
    );
    html.push_str(
        "<table width=\"640\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"border-collapse:collapse;background:#FFFFFF;border-radius:12px;\
         overflow:hidden;box-shadow:0 4px 24px rgba(0,0,0,0.08);\">\n",
    );

    html.push_str(&header(&theme, title, record.source.label()));
    html.push_str(&metadata(&metadata_rows(record)));
    html.push_str(&conversation(&record.turns, record.raw_payload.as_deref()));
    html.push_str(&footer(&timestamp));

    html.push_str("</table>\n");
    html.push_str(&format!(
        "<table width=\"640\" cellpadding=\"0\" cellspacing=\"0\" style=\"border-collapse:collapse;\">\n\
         <tr><td align=\"center\" style=\"padding:16px 0;font-size:11px;color:#9CA3AF;\">{}</td></tr>\n\
         </table>\n",
        escape_html(AUTOMATED_NOTICE)
    ));
    html.push_str("</td></tr>\n</table>\n</body>\n</html>\n");
    html
}

fn header(theme: &Theme, title: &str, source_label: &str) -> String {
    format!(
        "<tr><td style=\"height:4px;background:{accent};font-size:0;line-height:0;\">&nbsp;</td></tr>\n\
         <tr><td style=\"padding:24px 24px 16px;\">\n\
         <table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" style=\"border-collapse:collapse;\">\n\
         <tr>\n\
         <td style=\"vertical-align:middle;\">\
         <div style=\"font-size:20px;font-weight:700;color:#111827;\">{title}</div>\
         <div style=\"font-size:12px;color:#6B7280;margin-top:4px;\">{source}</div>\
         </td>\n\
         <td align=\"right\" style=\"vertical-align:middle;\">\
         <span style=\"display:inline-block;padding:4px 12px;background:{light};color:{dark};\
         font-size:11px;font-weight:600;border-radius:20px;letter-spacing:0.3px;\">COMPLETED</span>\
         </td>\n\
         </tr>\n\
         </table>\n\
         </td></tr>\n\
         <tr><td style=\"padding:0 24px;\"><hr style=\"border:none;border-top:1px solid #E5E7EB;margin:0;\"></td></tr>\n",
        accent = theme.accent,
        light = theme.accent_light,
        dark = theme.accent_dark,
        title = escape_html(title),
        source = escape_html(source_label),
    )
}

fn metadata(rows: &[MetadataRow]) -> String {
    let mut out = String::from(
        "<tr><td style=\"padding:16px 24px;\">\n\
         <table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"border-collapse:collapse;background:#F9FAFB;border-radius:8px;border:1px solid #E5E7EB;\">\n",
    );
    for row in rows {
        out.push_str(&format!(
            "<tr>\
             <td style=\"padding:8px 14px;color:#6B7280;font-size:13px;white-space:nowrap;\
             vertical-align:top;border-bottom:1px solid #F3F4F6;\">{}</td>\
             <td style=\"padding:8px 14px;color:#111827;font-size:13px;word-break:break-all;\
             border-bottom:1px solid #F3F4F6;\">{}</td>\
             </tr>\n",
            escape_html(row.label),
            escape_html(&row.value)
        ));
    }
    out.push_str("</table>\n</td></tr>\n");
    out
}

/// Turn containers, or the raw payload when no turn was extracted
fn conversation(turns: &[ConversationTurn], raw_payload: Option<&str>) -> String {
    let mut out = String::from(
        "<tr><td style=\"padding:8px 24px 12px;\">\
         <span style=\"font-size:12px;font-weight:600;color:#6B7280;text-transform:uppercase;\
         letter-spacing:0.5px;\">Conversation</span></td></tr>\n",
    );
    for turn in turns {
        out.push_str(&turn_block(turn));
    }
    if turns.is_empty()
        && let Some(raw) = raw_payload
    {
        out.push_str(&format!(
            "<tr><td style=\"padding:0 24px 16px;\"><pre class=\"raw-payload\" style=\"{}\">{}</pre></td></tr>\n",
            CODE_BLOCK_STYLE,
            escape_html(raw)
        ));
    }
    out
}

fn turn_block(turn: &ConversationTurn) -> String {
    let style = RoleStyle::for_role(turn.role);
    format!(
        "<tr><td style=\"padding:0 24px 12px;\">\
         <div class=\"{class}\" style=\"padding:14px 16px;background:{bg};\
         border-left:3px solid {border};border-radius:4px;\">\
         <div style=\"font-size:11px;font-weight:700;color:{color};text-transform:uppercase;\
         letter-spacing:0.5px;margin-bottom:8px;\">{label}</div>\
         <div style=\"font-size:14px;color:#1F2937;line-height:1.7;\">\n{content}\n</div>\
         </div></td></tr>\n",
        class = style.class,
        bg = style.background,
        border = style.border,
        color = style.color,
        label = style.label,
        content = text_to_html(&turn.content),
    )
}

fn footer(timestamp: &str) -> String {
    format!(
        "<tr><td style=\"padding:16px 24px;background:#F9FAFB;border-top:1px solid #E5E7EB;\">\n\
         <table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" style=\"border-collapse:collapse;\">\n\
         <tr>\
         <td style=\"font-size:11px;color:#9CA3AF;\">{}</td>\
         <td align=\"right\" style=\"font-size:11px;color:#9CA3AF;\">{}</td>\
         </tr>\n\
         </table>\n\
         </td></tr>\n",
        FOOTER_IDENTIFIER,
        escape_html(timestamp)
    )
}
