use taskmail_cli::{Cli, logging, run};

fn main() {
    let (cli, parse_warning) = Cli::parse_lenient();
    logging::init();

    if let Some(warning) = parse_warning {
        tracing::warn!("ignoring invalid arguments: {}", warning.trim());
    }

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
    }
}
