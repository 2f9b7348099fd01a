use crate::chapters;
use crate::fetch::Fetcher;
use crate::layout::BookLayout;
use crate::metadata::BookMetadata;
use crate::record::BookRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither `text/plain` nor `text/html` is offered
    NoDownloadFormat,
    /// The book body could not be fetched
    ContentUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub dir: PathBuf,
    pub chapters: usize,
    pub images_saved: usize,
    pub images_failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Downloaded(BookSummary),
    Skipped(SkipReason),
}

/// Download one book and write its content, chapters, images and metadata
/// under `output_dir`.
///
/// Network failures never surface as `Err`: a missing format or unreachable
/// body skips the book before anything is written, a failed image is logged and
/// left out. Only filesystem errors are returned.
pub fn download_book(
    fetcher: &dyn Fetcher,
    book: &BookRecord,
    output_dir: &Path,
) -> Result<Outcome> {
    let title = book.title();
    let author = book.author();
    let language = book.language();

    let Some(download_url) = book.download_url() else {
        warn!("No downloadable format found for {} by {}", title, author);
        return Ok(Outcome::Skipped(SkipReason::NoDownloadFormat));
    };

    let content = match fetcher.text(download_url, &[]) {
        Ok(content) => content,
        Err(e) => {
            warn!("Error downloading {} by {}: {}", title, author, e);
            return Ok(Outcome::Skipped(SkipReason::ContentUnavailable));
        }
    };

    let layout = BookLayout::new(output_dir, &title, &author);
    fs::create_dir_all(&layout.dir)
        .with_context(|| format!("Failed to create book directory: {}", layout.dir.display()))?;

    fs::write(&layout.content_file, &content).with_context(|| {
        format!("Failed to write book content: {}", layout.content_file.display())
    })?;

    let chapter_count = write_chapters(&layout, &content)?;

    let image_urls = book.image_urls();
    let images_saved = download_images(fetcher, &layout, &image_urls, &title, &author)?;

    let metadata = BookMetadata::new(
        title.clone(),
        author.clone(),
        language,
        download_url.to_string(),
        &layout,
        chapter_count,
        image_urls.len(),
    );
    metadata.write(&layout)?;

    info!("Downloaded: {} by {}", title, author);

    Ok(Outcome::Downloaded(BookSummary {
        dir: layout.dir,
        chapters: chapter_count,
        images_saved,
        images_failed: image_urls.len() - images_saved,
    }))
}

fn write_chapters(layout: &BookLayout, content: &str) -> Result<usize> {
    let segments = chapters::segment(content);

    for (i, segment) in segments.iter().enumerate() {
        let number = i + 1;
        let dir = layout.chapter_dir(number);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create chapter directory: {}", dir.display()))?;

        let path = layout.chapter_file(number);
        fs::write(&path, segment)
            .with_context(|| format!("Failed to write chapter: {}", path.display()))?;
        debug!("Wrote {}", path.display());
    }

    Ok(segments.len())
}

/// Returns how many images were saved
fn download_images(
    fetcher: &dyn Fetcher,
    layout: &BookLayout,
    urls: &[&str],
    title: &str,
    author: &str,
) -> Result<usize> {
    let images_dir = layout.images_dir();
    fs::create_dir_all(&images_dir).with_context(|| {
        format!("Failed to create images directory: {}", images_dir.display())
    })?;

    let mut saved = 0;
    for (i, url) in urls.iter().enumerate() {
        let number = i + 1;
        let data = match fetcher.bytes(url) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "Error downloading image {} for {} by {}: {}",
                    number, title, author, e
                );
                continue;
            }
        };

        // Saved as .jpg whatever the actual encoding
        let path = layout.image_file(number);
        fs::write(&path, &data)
            .with_context(|| format!("Failed to write image: {}", path.display()))?;
        debug!("Wrote {} ({} bytes)", path.display(), data.len());
        saved += 1;
    }

    Ok(saved)
}
