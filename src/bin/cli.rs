//! sitemapper CLI
//!
//! Crawls a site breadth-first and writes a Sitemap Protocol 0.9 XML
//! document to stdout. Progress and diagnostics go to stderr, so the XML
//! stream stays clean for redirection (`sitemapper > map.xml`).

use std::io;
use std::path::PathBuf;

use clap::Parser;
use sitemapper::{error::Result, models::Config, pipeline, sitemap};

/// sitemapper - same-domain sitemap generator
#[derive(Parser, Debug)]
#[command(name = "sitemapper", version, about = "Builds a sitemap by crawling a domain")]
struct Cli {
    /// Seed URL to start crawling from (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// Max number of links deep to traverse (overrides config)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "sitemapper.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(url) = cli.url {
        config.crawl.seed_url = url;
    }
    if let Some(depth) = cli.depth {
        config.crawl.max_depth = depth;
    }
    config.validate()?;

    // Fail-fast: a fetch failure aborts here with no partial sitemap.
    let pages = pipeline::run_crawl(&config).await?;

    // A serialization failure is reported but does not turn into a crash;
    // there is just no usable document on stdout.
    if let Err(e) = sitemap::write_sitemap(&pages, &mut io::stdout().lock()) {
        log::error!("Failed to write sitemap: {}", e);
    }

    Ok(())
}
