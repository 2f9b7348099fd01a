use crate::roman::to_roman;
use std::path::{Path, PathBuf};

/// Characters that are not allowed in file names on common filesystems
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub const IMAGES_DIR: &str = "images";
pub const METADATA_FILE: &str = "metadata.json";

/// Drops reserved characters entirely, nothing is substituted.
pub fn sanitize(name: &str) -> String {
    name.chars().filter(|c| !RESERVED.contains(c)).collect()
}

/// `Chapter_<roman>` for a 1-based chapter number
pub fn chapter_name(number: usize) -> String {
    format!("Chapter_{}", to_roman(number as i64))
}

/// Chapter file path relative to the book directory
pub fn chapter_relative_path(number: usize) -> String {
    let name = chapter_name(number);
    format!("{name}/{name}.txt")
}

/// Image file path relative to the book directory, for a 1-based image number
pub fn image_relative_path(number: usize) -> String {
    format!("{IMAGES_DIR}/image_{number}.jpg")
}

/// Where every artifact of one book lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    pub dir: PathBuf,
    pub content_file: PathBuf,
}

impl BookLayout {
    /// `title` and `author` are the display names; they are sanitized here.
    pub fn new(output_dir: &Path, title: &str, author: &str) -> Self {
        let title = sanitize(title);
        let author = sanitize(author);
        let dir = output_dir.join(format!("{title} - {author}"));
        let content_file = dir.join(format!("{title}-{author}.html"));
        Self { dir, content_file }
    }

    pub fn chapter_dir(&self, number: usize) -> PathBuf {
        self.dir.join(chapter_name(number))
    }

    pub fn chapter_file(&self, number: usize) -> PathBuf {
        self.dir.join(chapter_relative_path(number))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.dir.join(IMAGES_DIR)
    }

    pub fn image_file(&self, number: usize) -> PathBuf {
        self.dir.join(image_relative_path(number))
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_removes_reserved_characters() {
        assert_eq!(sanitize(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
        assert_eq!(sanitize("Plain Title"), "Plain Title");
    }

    #[test]
    fn layout_uses_sanitized_names() {
        let layout = BookLayout::new(Path::new("out"), "Why? What:", "Doe, Jane");
        assert_eq!(layout.dir, PathBuf::from("out/Why What - Doe, Jane"));
        assert_eq!(
            layout.content_file,
            PathBuf::from("out/Why What - Doe, Jane/Why What-Doe, Jane.html")
        );
    }

    #[test]
    fn chapter_and_image_paths() {
        let layout = BookLayout::new(Path::new("out"), "T", "A");
        assert_eq!(chapter_relative_path(4), "Chapter_IV/Chapter_IV.txt");
        assert_eq!(layout.chapter_dir(2), PathBuf::from("out/T - A/Chapter_II"));
        assert_eq!(
            layout.chapter_file(2),
            PathBuf::from("out/T - A/Chapter_II/Chapter_II.txt")
        );
        assert_eq!(image_relative_path(1), "images/image_1.jpg");
        assert_eq!(layout.image_file(3), PathBuf::from("out/T - A/images/image_3.jpg"));
        assert_eq!(layout.metadata_file(), PathBuf::from("out/T - A/metadata.json"));
    }
}
