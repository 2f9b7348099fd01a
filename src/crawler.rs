use crate::catalog;
use crate::config::CrawlConfig;
use crate::downloader::{self, Outcome};
use crate::fetch::Fetcher;
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub found: usize,
    pub downloaded: usize,
    pub skipped: usize,
}

/// Fetch the catalog once and download every listed book, one at a time,
/// pausing between books.
pub fn run(config: &CrawlConfig, fetcher: &dyn Fetcher) -> Result<CrawlReport> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", config.output_dir.display())
    })?;

    let books = catalog::fetch_books(fetcher, config)?;
    info!("Catalog returned {} books", books.len());

    let mut report = CrawlReport {
        found: books.len(),
        ..CrawlReport::default()
    };

    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            config.rate_limit.pause();
        }

        match downloader::download_book(fetcher, book, &config.output_dir)? {
            Outcome::Downloaded(summary) => {
                debug!(
                    "{} chapters, {} images ({} failed) in {}",
                    summary.chapters,
                    summary.images_saved,
                    summary.images_failed,
                    summary.dir.display()
                );
                report.downloaded += 1;
            }
            Outcome::Skipped(_) => report.skipped += 1,
        }
    }

    Ok(report)
}
