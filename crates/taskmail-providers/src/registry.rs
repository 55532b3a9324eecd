use crate::claude::ClaudeParser;
use crate::codex::CodexParser;
use crate::traits::PayloadParser;

/// All parsers in detection order; the first one that accepts its input wins
pub fn create_all_parsers() -> Vec<Box<dyn PayloadParser>> {
    vec![Box::new(CodexParser), Box::new(ClaudeParser)]
}
