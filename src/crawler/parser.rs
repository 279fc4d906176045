//! Listing page parser
//!
//! Extracts the book detail links advertised on a catalogue listing page.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Anchors pointing at book detail pages on a listing page
pub const BOOK_LINK_SELECTOR: &str = "article.product_pod h3 a";

/// Extracts book detail links from a listing page
///
/// Each `href` is resolved against `base_url` (the catalogue root, not the
/// listing page). Links keep document order and duplicates are not removed.
/// A page with no matching anchors yields an empty list.
///
/// # Example
///
/// ```
/// use book_scraper::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<article class="product_pod">
///     <h3><a href="a-book_1/index.html">A</a></h3>
/// </article>"#;
/// let base_url = Url::parse("https://books.toscrape.com/catalogue/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links, vec!["https://books.toscrape.com/catalogue/a-book_1/index.html"]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(BOOK_LINK_SELECTOR) {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}
