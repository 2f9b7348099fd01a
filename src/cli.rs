use clap::Parser;
use std::path::PathBuf;

/// Crawl books from Project Gutenberg via the Gutendex API
#[derive(Parser, Debug)]
#[command(name = "gutencrawl", version, about)]
pub struct Cli {
    /// Language filter (e.g. 'en' for English, 'vi' for Vietnamese)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Limit passed to the catalog query.
    /// Forwarded as-is; results are not truncated client-side.
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Search keyword for books
    #[arg(long, default_value = "")]
    pub search: String,

    /// Output directory for downloaded books and metadata
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Seconds to wait between books (0 disables the pause)
    #[arg(long, default_value_t = 2)]
    pub delay: u64,
}
