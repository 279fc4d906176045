//! Scrape coordinator - the sequential listing/detail pipeline
//!
//! This module walks listing pages in order, collects the book links they
//! advertise, and parses each detail page in turn:
//! - Building listing URLs from the configured template
//! - Skipping listing pages that fail to fetch
//! - Skipping detail pages that fail to fetch or parse
//! - Pausing between consecutive detail fetches

use crate::book::Book;
use crate::config::{Config, ScraperConfig};
use crate::crawler::detail::parse_book;
use crate::crawler::parser::extract_links;
use crate::crawler::{build_http_client, fetch_page};
use crate::url::listing_url;
use crate::ScraperError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Which unit of work a failure skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A listing page; none of its books were attempted
    Listing,
    /// A single book detail page
    Detail,
}

/// A skipped unit of work
#[derive(Debug, Clone)]
pub struct ScrapeFailure {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Parsed books in listing order
    pub books: Vec<Book>,

    /// Every listing or detail page that was skipped
    pub failures: Vec<ScrapeFailure>,

    /// Number of listing pages requested
    pub pages_requested: u32,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScrapeReport {
    /// Number of failures of the given kind
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }

    /// Wall-clock duration of the run
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Main scrape coordinator structure
pub struct Coordinator {
    config: ScraperConfig,
    base_url: Url,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - HTTP client built and base URL parsed
    /// * `Err(ScraperError)` - Failed to initialize
    pub fn new(config: &Config) -> Result<Self, ScraperError> {
        let base_url = Url::parse(&config.scraper.base_url)?;
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config: config.scraper.clone(),
            base_url,
            client,
        })
    }

    /// Scrapes listing pages `1..=page_count` and returns the parsed books
    pub async fn run(&self, page_count: u32) -> Vec<Book> {
        self.run_with_report(page_count).await.books
    }

    /// Scrapes listing pages `1..=page_count` and reports skipped pages too
    ///
    /// Strictly sequential: each request completes before the next starts.
    /// A fixed pause separates consecutive detail page fetches.
    pub async fn run_with_report(&self, page_count: u32) -> ScrapeReport {
        let started_at = Utc::now();
        let delay = Duration::from_millis(self.config.request_delay_ms);

        let mut books = Vec::new();
        let mut failures = Vec::new();
        let mut fetched_detail = false;

        tracing::info!("Scraping {} listing pages", page_count);

        for page in 1..=page_count {
            let links = match self.scrape_listing(page).await {
                Ok(links) => links,
                Err((url, e)) => {
                    tracing::warn!("Skipping listing page {}: {}", page, e);
                    failures.push(ScrapeFailure {
                        url,
                        kind: FailureKind::Listing,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            tracing::info!("Listing page {}: {} book links", page, links.len());

            for link in links {
                if fetched_detail && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                fetched_detail = true;

                match self.scrape_book(&link).await {
                    Ok(book) => {
                        tracing::debug!("Parsed '{}'", book.title);
                        books.push(book);
                    }
                    Err(e) => {
                        tracing::warn!("Skipping book {}: {}", link, e);
                        failures.push(ScrapeFailure {
                            url: link,
                            kind: FailureKind::Detail,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        tracing::info!(
            "Scrape finished: {} books, {} failures",
            books.len(),
            failures.len()
        );

        ScrapeReport {
            books,
            failures,
            pages_requested: page_count,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Fetches one listing page and extracts its book links
    ///
    /// On failure, returns the URL that was attempted alongside the error.
    async fn scrape_listing(&self, page: u32) -> Result<Vec<String>, (String, ScraperError)> {
        let url = listing_url(&self.config.listing_template, page)
            .map_err(|e| (self.config.listing_template.clone(), ScraperError::from(e)))?;

        let html = fetch_page(&self.client, url.as_str())
            .await
            .map_err(|e| (url.to_string(), e))?;

        Ok(extract_links(&html, &self.base_url))
    }

    /// Fetches and parses one book detail page
    async fn scrape_book(&self, url: &str) -> Result<Book, ScraperError> {
        let html = fetch_page(&self.client, url).await?;
        Ok(parse_book(&html, url)?)
    }
}
