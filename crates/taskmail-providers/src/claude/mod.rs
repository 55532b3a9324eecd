pub mod io;
pub mod parser;
pub(crate) mod schema;

pub use self::io::read_transcript_file;
pub use self::parser::ClaudeParser;
