//! Logo-Scout main entry point
//!
//! Reads domains from standard input (one per line) and writes a
//! `domain,logo_url` CSV line per domain to standard output.

use anyhow::Context;
use clap::Parser;
use logo_scout::batch::{read_domains, run_batch};
use logo_scout::config::{load_config_or_default, validate, Config};
use logo_scout::fetch::HttpFetcher;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Logo-Scout: find the logotype of each website
///
/// Each domain's homepage is fetched over HTTPS (falling back to HTTP) and
/// the most logo-like image tag is reported. Domains without a logo get an
/// empty second field. Diagnostics go to standard error.
#[derive(Parser, Debug)]
#[command(name = "logo-scout")]
#[command(version = "1.0.0")]
#[command(about = "Find website logos from a list of domains", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of domains processed concurrently per window
    #[arg(short, long, value_name = "N")]
    window_size: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_settings(&cli)?;
    tracing::debug!(
        "Window size {}, timeout {}ms, user agent {:?}",
        config.batch.window_size,
        config.fetcher.timeout_ms,
        config.fetcher.user_agent
    );

    // Collect the whole input before any request goes out
    let domains =
        read_domains(std::io::stdin().lock()).context("Failed to read standard input")?;
    tracing::info!("Read {} domains", domains.len());

    let fetcher =
        Arc::new(HttpFetcher::new(&config.fetcher).context("Failed to build HTTP client")?);

    run_batch(fetcher, &domains, config.batch.window_size, std::io::stdout())
        .await
        .context("Failed to write results")?;

    Ok(())
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_settings(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    if let Some(window_size) = cli.window_size {
        config.batch.window_size = window_size;
        validate(&config).context("Invalid --window-size")?;
    }

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs are written to stderr; stdout carries only CSV lines.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("logo_scout=warn,warn"),
            1 => EnvFilter::new("logo_scout=debug,info"),
            2 => EnvFilter::new("logo_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
