use anyhow::Result;
use clap::Parser;
use hashblocks::NameIndex;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, dump, tokens, Cli, DumpFormat};

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
const LOG_ENV: &str = "HASHBLOCKS_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

/// Logs go to stderr so they never mix with the dump on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Add, look up, dump, release.
fn run(cli: &Cli) -> Result<()> {
    let mut index = NameIndex::new();

    let mut rejected = 0;
    for name in tokens(&cli.names) {
        if let Err(err) = index.insert(name) {
            tracing::warn!(name, %err, "rejected name");
            display::rejected("Failed to add name", &err);
            rejected += 1;
        }
    }
    tracing::debug!(stored = index.len(), rejected, "names added");

    for name in tokens(&cli.find) {
        match index.find(name) {
            Ok(Some(record)) => display::found(record),
            Ok(None) => display::not_found(name),
            Err(err) => display::rejected("Invalid name", &err),
        }
    }

    if !cli.no_dump {
        match cli.format {
            DumpFormat::Tree => dump::tree(&index),
            DumpFormat::Plain => dump::plain(&index),
            DumpFormat::Json => dump::json(&index)?,
        }
    }

    index.release();
    Ok(())
}
