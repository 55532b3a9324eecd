use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the dotenv file
pub const ENV_FILE_VAR: &str = "TASKMAIL_ENV_FILE";

#[derive(Parser, Debug, Default)]
#[command(name = "taskmail")]
#[command(about = "Send an email when Claude Code or Codex finishes a task", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON payload from Codex `notify` (Claude Code writes to stdin instead)
    #[arg(value_name = "PAYLOAD", trailing_var_arg = true, allow_hyphen_values = true)]
    pub payload: Vec<String>,

    /// Read settings from this dotenv file
    #[arg(long, env = ENV_FILE_VAR)]
    pub env_file: Option<PathBuf>,

    /// Render the notification to stdout instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// What `--dry-run` prints
    #[arg(long, value_enum, default_value_t = PreviewFormat::Html)]
    pub format: PreviewFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// HTML body
    #[default]
    Html,
    /// Plain-text body
    Text,
    /// Normalized record as JSON
    Json,
}

impl Cli {
    /// Parse arguments without ever aborting the hook.
    ///
    /// `--help` and `--version` behave as usual. Any other argument error
    /// yields a `Cli` that treats the raw arguments as the payload, together
    /// with the error message for logging.
    pub fn parse_lenient() -> (Self, Option<String>) {
        Self::parse_lenient_from(std::env::args_os())
    }

    pub fn parse_lenient_from<I, T>(args: I) -> (Self, Option<String>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => (cli, None),
            Err(err) => {
                use clap::error::ErrorKind;
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    err.exit();
                }
                let cli = Self {
                    payload: args
                        .iter()
                        .skip(1)
                        .map(|a| a.to_string_lossy().into_owned())
                        .collect(),
                    env_file: std::env::var_os(ENV_FILE_VAR).map(PathBuf::from),
                    ..Self::default()
                };
                (cli, Some(err.to_string()))
            }
        }
    }
}
