// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Shared message content decoding
pub(crate) mod content;

// Provider implementations
pub mod claude;
pub mod codex;

// Parser registry
pub mod registry;

// Payload detection
pub mod normalize;

// Traits
pub use traits::{PayloadInput, PayloadParser};

// Provider parsers
pub use claude::{ClaudeParser, read_transcript_file};
pub use codex::CodexParser;

// Registry
pub use registry::create_all_parsers;

// Detection entry point
pub use normalize::normalize;

// Error types
pub use error::{Error, Result};
