use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use entryform::cli::CliArgs;
use entryform::config::FormConfig;
use entryform::model::EntryForm;
use entryform::session;
use entryform::view::render;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    entryform::tracing::init(!args.no_log_file);

    let config = FormConfig::load(args.form.as_deref()).map_err(anyhow::Error::msg)?;
    let mut form = EntryForm::new(&config);
    tracing::debug!(title = %form.title, fields = form.fields.len(), "form loaded");

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = session::run(&mut form, &script, &mut out).context("Failed to write output")?;
    if args.show {
        write!(out, "{}", render(&form))?;
    }
    out.flush()?;

    tracing::info!(
        submitted = summary.submitted,
        rejected = summary.rejected,
        bad_lines = summary.bad_lines,
        "session finished"
    );
    if summary.bad_lines > 0 {
        eprintln!("Skipped {} unrecognized line(s)", summary.bad_lines);
    }

    Ok(())
}
