use regex::Regex;
use std::sync::LazyLock;

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

const FENCE: &str = "```";

pub(crate) const CODE_BLOCK_STYLE: &str = "margin:8px 0;padding:12px 16px;background:#1F2937;\
color:#E5E7EB;font-size:12px;line-height:1.6;\
font-family:'SF Mono','Fira Code',Consolas,monospace;\
border-radius:6px;white-space:pre-wrap;word-break:break-all;overflow:hidden;";

/// Escape text for embedding in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Translate conversation text into HTML.
///
/// Lines whose trimmed form starts with a triple backtick open or close a
/// fenced block rendered as `<pre>`; an unclosed fence is still flushed at
/// the end. Outside fences, `**text**` becomes `<strong>` and every line
/// ends with `<br>`. All text is escaped before any tag is added.
pub fn text_to_html(text: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut code_lines: Vec<&str> = Vec::new();
    let mut in_code = false;

    for line in text.split('\n') {
        if line.trim().starts_with(FENCE) {
            if in_code {
                parts.push(code_block(&code_lines));
                code_lines.clear();
            }
            in_code = !in_code;
            continue;
        }

        if in_code {
            code_lines.push(line);
            continue;
        }

        let escaped = escape_html(line);
        let emphasized = BOLD_PATTERN.replace_all(&escaped, "<strong>$1</strong>");
        if emphasized.trim().is_empty() {
            parts.push("<br>".to_string());
        } else {
            parts.push(format!("{}<br>", emphasized));
        }
    }

    if in_code && !code_lines.is_empty() {
        parts.push(code_block(&code_lines));
    }

    parts.join("\n")
}

fn code_block(lines: &[&str]) -> String {
    format!(
        "<pre style=\"{}\">{}</pre>",
        CODE_BLOCK_STYLE,
        escape_html(&lines.join("\n"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_lines_get_breaks() {
        assert_eq!(text_to_html("one\n\ntwo"), "one<br>\n<br>\ntwo<br>");
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            text_to_html("this is **very** **bold**"),
            "this is <strong>very</strong> <strong>bold</strong><br>"
        );
    }

    #[test]
    fn test_bold_content_is_escaped() {
        assert_eq!(
            text_to_html("**<script>**"),
            "<strong>&lt;script&gt;</strong><br>"
        );
    }

    #[test]
    fn test_fenced_block() {
        let html = text_to_html("before\n```rust\nlet x = a < b && c;\n```\nafter");
        assert!(html.starts_with("before<br>\n<pre style="));
        assert!(html.contains(">let x = a &lt; b &amp;&amp; c;</pre>"));
        assert!(html.ends_with("</pre>\nafter<br>"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_bold_markers_inside_fence_are_literal() {
        let html = text_to_html("```\n**not bold**\n```");
        assert!(html.contains("**not bold**"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_unclosed_fence_is_flushed() {
        let html = text_to_html("```\n<tag>");
        assert!(html.contains("&lt;tag&gt;</pre>"));
    }

    #[test]
    fn test_empty_unclosed_fence_renders_nothing() {
        assert_eq!(text_to_html("```"), "");
    }
}
