// NOTE: taskmail runs inside another program's completion hook.
//
// - The process exits 0 whatever happens; failures go to the log on stderr
// - Normalizing and rendering need no settings, so `--dry-run` works anywhere
// - Missing SMTP settings disable the send step and nothing else

mod args;
mod commands;
pub mod logging;

pub use args::{Cli, PreviewFormat};
pub use commands::run;
