use serde::Deserialize;
use serde_json::{Map, Value};

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_LANGUAGE: &str = "Unknown";
const TITLE_CHARS: usize = 10;

/// One book as returned by the catalog. Only the fields the crawler reads are
/// modelled; every one of them may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    pub authors: Option<Vec<Person>>,
    pub languages: Option<Vec<String>>,
    /// MIME type → URL, in document order
    pub formats: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    pub name: Option<String>,
}

impl BookRecord {
    /// Display title: slashes become hyphens, then cut to ten characters.
    pub fn title(&self) -> String {
        self.title
            .as_deref()
            .unwrap_or(UNKNOWN_TITLE)
            .replace('/', "-")
            .chars()
            .take(TITLE_CHARS)
            .collect()
    }

    /// Name of the first listed author, slashes replaced with hyphens.
    pub fn author(&self) -> String {
        self.authors
            .as_ref()
            .and_then(|authors| authors.first())
            .and_then(|person| person.name.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR)
            .replace('/', "-")
    }

    pub fn language(&self) -> String {
        self.languages
            .as_ref()
            .and_then(|langs| langs.first())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string()
    }

    /// Plain text if offered, HTML otherwise.
    pub fn download_url(&self) -> Option<&str> {
        self.format("text/plain").or_else(|| self.format("text/html"))
    }

    /// Every `image/*` format URL, in the order the catalog listed them.
    pub fn image_urls(&self) -> Vec<&str> {
        self.formats
            .iter()
            .flatten()
            .filter(|(mime, _)| mime.starts_with("image/"))
            .filter_map(|(_, url)| url.as_str())
            .collect()
    }

    fn format(&self, mime: &str) -> Option<&str> {
        self.formats
            .as_ref()
            .and_then(|formats| formats.get(mime))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}
