use super::args::{Cli, PreviewFormat};
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use is_terminal::IsTerminal;
use std::io::Write;
use taskmail_engine::{RenderedEmail, render};
use taskmail_providers::normalize;
use taskmail_runtime::{Dispatcher, NotifyConfig, resolve_env_file};
use taskmail_types::NotificationRecord;

pub fn run(cli: Cli) -> Result<()> {
    let now = Local::now().fixed_offset();
    let record = read_record(&cli.payload, now);
    tracing::debug!(
        source = %record.source,
        turns = record.turns.len(),
        "normalized payload"
    );

    let email = render(&record);

    if cli.dry_run {
        return print_preview(&record, &email, cli.format);
    }

    let env_file = resolve_env_file(cli.env_file.as_deref());
    let config = NotifyConfig::load(env_file.as_deref());
    Dispatcher::from_config(&config).dispatch(&record, &email);

    Ok(())
}

/// Normalize the invocation; stdin is only offered when it is not a terminal
fn read_record(payload: &[String], now: DateTime<FixedOffset>) -> NotificationRecord {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        normalize(payload, None, now)
    } else {
        let mut lock = stdin.lock();
        normalize(payload, Some(&mut lock), now)
    }
}

fn print_preview(record: &NotificationRecord, email: &RenderedEmail, format: PreviewFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        PreviewFormat::Html => out.write_all(email.html.as_bytes())?,
        PreviewFormat::Text => out.write_all(email.plain_text.as_bytes())?,
        PreviewFormat::Json => {
            serde_json::to_writer_pretty(&mut out, record)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
