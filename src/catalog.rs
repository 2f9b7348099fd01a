use crate::config::CrawlConfig;
use crate::fetch::Fetcher;
use crate::record::BookRecord;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, error};

/// Query the catalog once.
///
/// Transport errors, HTTP errors and non-JSON bodies are logged and give an
/// empty list. A JSON body without `results` is an error for the caller.
pub fn fetch_books(fetcher: &dyn Fetcher, config: &CrawlConfig) -> Result<Vec<BookRecord>> {
    let query = [
        ("language", config.language.clone()),
        ("search", config.search.clone()),
        ("limit", config.limit.to_string()),
    ];
    debug!("Querying {} with {:?}", config.api_url, query);

    let body = match fetcher.text(&config.api_url, &query) {
        Ok(body) => body,
        Err(e) => {
            error!("Error fetching data: {}", e);
            return Ok(Vec::new());
        }
    };

    let mut response: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("Error fetching data: invalid JSON from {}: {}", config.api_url, e);
            return Ok(Vec::new());
        }
    };

    let results = response
        .get_mut("results")
        .map(Value::take)
        .context("Catalog response has no `results` field")?;

    serde_json::from_value(results).context("Catalog `results` is not a list of book records")
}
