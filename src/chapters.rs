use regex::Regex;
use std::sync::LazyLock;

static CHAPTER_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Chapter\s+\d+").expect("valid chapter heading regex"));

/// Split raw book text on `Chapter <digits>` headings.
///
/// The headings themselves are dropped. Text before the first heading is kept
/// as the first segment, so the result always has at least one entry, possibly
/// empty strings when a heading sits at either end of the text.
pub fn segment(text: &str) -> Vec<&str> {
    CHAPTER_HEADING.split(text).collect()
}
