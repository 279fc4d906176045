//! Crawler module for catalogue fetching and parsing
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching, one GET per page, no retry
//! - Listing page link extraction
//! - Book detail page parsing
//! - Sequential coordination with a fixed pause between detail fetches

mod coordinator;
mod detail;
mod fetcher;
mod parser;

pub use coordinator::{Coordinator, FailureKind, ScrapeFailure, ScrapeReport};
pub use detail::parse_book;
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_links, BOOK_LINK_SELECTOR};

use crate::config::{validate, Config};
use crate::ScraperError;

/// Runs a complete scrape
///
/// This is the main entry point for scraping. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Walk `page_count` listing pages in order
/// 4. Fetch and parse every advertised book
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `page_count` - Number of listing pages to walk
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - Scrape ran to completion (possibly with skipped pages)
/// * `Err(ScraperError)` - Invalid configuration, or the client could not be initialized
pub async fn scrape(config: &Config, page_count: u32) -> Result<ScrapeReport, ScraperError> {
    validate(config)?;
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run_with_report(page_count).await)
}
