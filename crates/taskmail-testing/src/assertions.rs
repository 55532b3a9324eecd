//! Checks on rendered HTML output.

use anyhow::Result;

/// Number of conversation turn containers in the document
pub fn turn_count(html: &str) -> usize {
    html.matches("class=\"turn ").count()
}

/// Assert the document has exactly `expected` turn containers.
pub fn assert_turn_count(html: &str, expected: usize) -> Result<()> {
    let actual = turn_count(html);
    if actual != expected {
        anyhow::bail!("Expected {} conversation turns, got {}", expected, actual);
    }
    Ok(())
}

/// Assert none of `raw` fragments appear verbatim in the document.
pub fn assert_no_raw_markup(html: &str, raw: &[&str]) -> Result<()> {
    for fragment in raw {
        if html.contains(fragment) {
            anyhow::bail!("Raw markup {:?} leaked into rendered HTML", fragment);
        }
    }
    Ok(())
}
