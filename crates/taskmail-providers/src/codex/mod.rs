pub mod parser;
pub(crate) mod schema;

pub use self::parser::CodexParser;
