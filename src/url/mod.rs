//! URL handling module for Book Scraper
//!
//! This module builds listing page URLs from the configured template and
//! resolves the relative book links found on those pages.

use crate::config::PAGE_PLACEHOLDER;
use url::Url;

/// Builds the URL of a 1-based listing page from the template
///
/// # Examples
///
/// ```
/// use book_scraper::url::listing_url;
///
/// let url = listing_url("https://books.toscrape.com/catalogue/page-{n}.html", 3).unwrap();
/// assert_eq!(url.as_str(), "https://books.toscrape.com/catalogue/page-3.html");
/// ```
pub fn listing_url(template: &str, page: u32) -> Result<Url, url::ParseError> {
    Url::parse(&template.replace(PAGE_PLACEHOLDER, &page.to_string()))
}

/// Resolves a link href to an absolute URL
///
/// Returns None if the link should be skipped:
/// - empty or fragment-only hrefs
/// - hrefs that do not resolve against the base
/// - non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
