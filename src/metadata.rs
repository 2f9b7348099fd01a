use crate::layout::{chapter_relative_path, image_relative_path, BookLayout};
use crate::roman::to_roman;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

pub const SOURCE: &str = "Project Gutenberg";

/// Contents of a book's `metadata.json`. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub language: String,
    pub download_url: String,
    pub local_file_path: String,
    pub source: String,
    pub chapters: Vec<ChapterEntry>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterEntry {
    pub chapter_number: String,
    pub local_file_path: String,
}

impl BookMetadata {
    /// Chapters are numbered from one. Images are listed positionally for
    /// every URL, whether or not its download succeeded.
    pub fn new(
        title: String,
        author: String,
        language: String,
        download_url: String,
        layout: &BookLayout,
        chapter_count: usize,
        image_count: usize,
    ) -> Self {
        let chapters = (1..=chapter_count)
            .map(|n| ChapterEntry {
                chapter_number: to_roman(n as i64),
                local_file_path: chapter_relative_path(n),
            })
            .collect();
        let images = (1..=image_count).map(image_relative_path).collect();

        Self {
            title,
            author,
            language,
            download_url,
            local_file_path: layout.content_file.display().to_string(),
            source: SOURCE.to_string(),
            chapters,
            images,
        }
    }

    /// Single-line JSON with a trailing newline, non-ASCII left as is
    pub fn to_json_line(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize metadata")?;
        Ok(json + "\n")
    }

    pub fn write(&self, layout: &BookLayout) -> Result<()> {
        let path = layout.metadata_file();
        fs::write(&path, self.to_json_line()?)
            .with_context(|| format!("Failed to write metadata: {}", path.display()))
    }
}
