mod catalog;
mod chapters;
mod cli;
mod config;
mod crawler;
mod downloader;
mod fetch;
mod layout;
mod metadata;
mod record;
mod roman;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = config::CrawlConfig::from(&cli);
    let fetcher = fetch::HttpFetcher::new(config.timeout)?;

    let report = crawler::run(&config, &fetcher)?;
    eprintln!(
        "Downloaded {} of {} books{} to {}",
        report.downloaded,
        report.found,
        if report.skipped > 0 {
            format!(" ({} skipped)", report.skipped)
        } else {
            String::new()
        },
        config.output_dir.display()
    );

    Ok(())
}
