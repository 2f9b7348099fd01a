use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Blocking GET access to the network, shared by the catalog and book downloads
pub trait Fetcher {
    /// Fetch a URL with query parameters and decode the body as text
    fn text(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError>;
    /// Fetch a URL and return the raw body
    fn bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::blocking::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn text(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        self.get(url, query)?
            .text()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }

    fn bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.get(url, &[])?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

/// In-memory fetcher for tests: canned bodies per URL, everything else is a 404
#[cfg(test)]
pub mod stub {
    use super::{FetchError, Fetcher};
    use std::cell::RefCell;
    use std::collections::HashMap;

    enum Canned {
        Body(Vec<u8>),
        Status(u16),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Request {
        pub url: String,
        pub query: Vec<(String, String)>,
    }

    #[derive(Default)]
    pub struct StubFetcher {
        responses: HashMap<String, Canned>,
        requests: RefCell<Vec<Request>>,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.responses
                .insert(url.to_string(), Canned::Body(body.into()));
            self
        }

        pub fn with_status(mut self, url: &str, status: u16) -> Self {
            self.responses.insert(url.to_string(), Canned::Status(status));
            self
        }

        pub fn requests(&self) -> Vec<Request> {
            self.requests.borrow().clone()
        }

        fn respond(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<u8>, FetchError> {
            self.requests.borrow_mut().push(Request {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
            match self.responses.get(url) {
                Some(Canned::Body(body)) => Ok(body.clone()),
                Some(Canned::Status(status)) => Err(FetchError::Status {
                    url: url.to_string(),
                    status: *status,
                }),
                None => Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }

    impl Fetcher for StubFetcher {
        fn text(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
            self.respond(url, query)
                .map(|body| String::from_utf8_lossy(&body).into_owned())
        }

        fn bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.respond(url, &[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubFetcher;
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = FetchError::Status {
            url: "https://example.org/a.txt".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "https://example.org/a.txt returned HTTP 503");
    }

    #[test]
    fn stub_records_requests_and_defaults_to_not_found() {
        let fetcher = StubFetcher::new().with_body("https://example.org/a", "hello");

        assert_eq!(
            fetcher.text("https://example.org/a", &[("q", "x".to_string())]).unwrap(),
            "hello"
        );
        match fetcher.bytes("https://example.org/missing") {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected 404, got {:?}", other.map(|b| b.len())),
        }

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].query, vec![("q".to_string(), "x".to_string())]);
    }

    #[test]
    fn http_fetcher_builds_with_timeout() {
        assert!(HttpFetcher::new(Duration::from_secs(10)).is_ok());
    }
}
