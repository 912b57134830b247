//! Simple CLI that reads article HTML from stdin and prints the validation
//! report as JSON to stdout.
//!
//! Exits with status 1 when the input cannot be read or validated.

use std::io::{self, Read};

use anyhow::Context;
use drive_article_validator::validate_article_bytes;

fn main() {
    if let Err(error) = run() {
        eprintln!("validate_stdin error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_tracing();

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .context("failed to read HTML from stdin")?;

    let report = validate_article_bytes(&html).context("failed to validate article")?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ARTICLE_VALIDATOR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}
