use crate::cli::Cli;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://gutendex.com/books/";

/// Fixed pause between books, the only rate limiting the crawler does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub delay: Duration,
}

impl RateLimit {
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// Blocks the current thread for the configured delay.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(2))
    }
}

/// Run configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub language: String,
    pub limit: u32,
    pub search: String,
    pub output_dir: PathBuf,
    pub api_url: String,
    /// Applied to every request, catalog and downloads alike
    pub timeout: Duration,
    pub rate_limit: RateLimit,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            limit: 10,
            search: String::new(),
            output_dir: PathBuf::from("output"),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            rate_limit: RateLimit::default(),
        }
    }
}

impl From<&Cli> for CrawlConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            language: cli.lang.clone(),
            limit: cli.limit,
            search: cli.search.clone(),
            output_dir: cli.output.clone(),
            rate_limit: match cli.delay {
                0 => RateLimit::none(),
                secs => RateLimit::fixed(Duration::from_secs(secs)),
            },
            ..Self::default()
        }
    }
}
