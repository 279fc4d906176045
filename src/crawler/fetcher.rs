//! HTTP fetcher implementation
//!
//! One GET per URL, no retry, reqwest's default timeout and redirect
//! policy. Any non-2xx status or transport failure is returned as an error
//! for the caller to log and skip.

use crate::config::UserAgentConfig;
use crate::ScraperError;
use reqwest::Client;

/// Builds an HTTP client with the configured user agent
///
/// # Example
///
/// ```no_run
/// use book_scraper::config::UserAgentConfig;
/// use book_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Non-2xx status | `ScraperError::HttpStatus` |
/// | Connection, timeout, or body read failure | `ScraperError::Http` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScraperError> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await.map_err(|e| ScraperError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| ScraperError::Http {
        url: url.to_string(),
        source: e,
    })
}
