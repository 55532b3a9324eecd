pub mod record;
mod util;

pub use record::*;
pub use util::*;
