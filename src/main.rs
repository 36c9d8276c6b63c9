use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use podfeed::{Diagnostics, Feed, FeedParser, ParseOutput, ParserConfig, RootFormat};

/// Get the config directory path (~/.config/podfeed/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("podfeed"))
}

#[derive(Parser, Debug)]
#[command(
    name = "podfeed",
    about = "Parse podcast feeds (RSS/Atom) into normalized JSON"
)]
struct Args {
    /// Feed documents to parse
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Parser configuration (default: ~/.config/podfeed/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Include unknown elements and rejected values in the output
    #[arg(long)]
    diagnostics: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Maximum number of documents parsed at once
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: u16,
}

/// One line of output per input document.
#[derive(Serialize)]
struct Report<'a> {
    path: String,
    format: RootFormat,
    feed: &'a Feed,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<&'a Diagnostics>,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<ParserConfig> {
    let path = match explicit {
        Some(path) => path.clone(),
        None => match get_config_dir() {
            Ok(dir) => dir.join("config.toml"),
            Err(e) => {
                tracing::debug!(error = %e, "No config directory, using defaults");
                return Ok(ParserConfig::default());
            }
        },
    };
    ParserConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Reads `path` and parses it on the blocking pool.
async fn parse_file(parser: Arc<FeedParser>, path: PathBuf) -> Result<ParseOutput> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let output = tokio::task::spawn_blocking(move || parser.parse_with_diagnostics(&bytes))
        .await
        .context("Parser task panicked")??;
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let parser = Arc::new(FeedParser::with_config(config));

    let mut results: Vec<(usize, PathBuf, Result<ParseOutput>)> =
        stream::iter(args.files.iter().cloned().enumerate())
            .map(|(index, path)| {
                let parser = Arc::clone(&parser);
                async move {
                    let result = parse_file(parser, path.clone()).await;
                    (index, path, result)
                }
            })
            .buffer_unordered(usize::from(args.jobs))
            .collect()
            .await;
    results.sort_by_key(|(index, _, _)| *index);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;
    for (_, path, result) in &results {
        match result {
            Ok(output) => {
                tracing::info!(
                    path = %path.display(),
                    format = ?output.format,
                    items = output.feed.items.len(),
                    unknown_elements = output.diagnostics.unknown_elements(),
                    invalid_values = output.diagnostics.invalid_values(),
                    "Parsed feed"
                );
                let report = Report {
                    path: path.display().to_string(),
                    format: output.format,
                    feed: &output.feed,
                    diagnostics: args.diagnostics.then_some(&output.diagnostics),
                };
                if args.pretty {
                    serde_json::to_writer_pretty(&mut out, &report)?;
                } else {
                    serde_json::to_writer(&mut out, &report)?;
                }
                writeln!(out)?;
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse feed");
                eprintln!("Error: {}: {:#}", path.display(), e);
            }
        }
    }
    out.flush()?;

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
