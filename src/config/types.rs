use serde::Deserialize;

/// Catalogue root that detail links are resolved against
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue/";

/// Listing page URL template; `{n}` is replaced with the 1-based page index
pub const DEFAULT_LISTING_TEMPLATE: &str = "https://books.toscrape.com/catalogue/page-{n}.html";

/// Placeholder substituted in the listing template
pub const PAGE_PLACEHOLDER: &str = "{n}";

/// Main configuration structure for Book Scraper
///
/// Every section is optional; missing sections fall back to the defaults
/// for the public demo catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Base URL for resolving book links found on listing pages
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Listing page URL template containing `{n}`
    #[serde(rename = "listing-template")]
    pub listing_template: String,

    /// Number of listing pages to walk
    #[serde(rename = "page-count")]
    pub page_count: u32,

    /// Pause between consecutive detail page fetches (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_template: DEFAULT_LISTING_TEMPLATE.to_string(),
            page_count: 5,
            request_delay_ms: 500,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "BookScraper".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
            contact_email: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version`, followed by `(+ContactURL; ContactEmail)`
    /// when contact details are configured.
    pub fn header_value(&self) -> String {
        let mut ua = format!("{}/{}", self.crawler_name, self.crawler_version);
        match (&self.contact_url, &self.contact_email) {
            (Some(url), Some(email)) => ua.push_str(&format!(" (+{}; {})", url, email)),
            (Some(url), None) => ua.push_str(&format!(" (+{})", url)),
            (None, Some(email)) => ua.push_str(&format!(" ({})", email)),
            (None, None) => {}
        }
        ua
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Path to the markdown summary file
    #[serde(rename = "summary-path")]
    pub summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "books.csv".to_string(),
            database_path: "books.db".to_string(),
            summary_path: "books_summary.md".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_without_contact() {
        let ua = UserAgentConfig {
            crawler_name: "BookScraper".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: None,
            contact_email: None,
        };
        assert_eq!(ua.header_value(), "BookScraper/1.0");
    }

    #[test]
    fn test_user_agent_with_contact() {
        let ua = UserAgentConfig {
            crawler_name: "BookScraper".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: Some("https://example.com/about".to_string()),
            contact_email: Some("admin@example.com".to_string()),
        };
        assert_eq!(
            ua.header_value(),
            "BookScraper/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[test]
    fn test_defaults_target_demo_catalogue() {
        let config = Config::default();
        assert_eq!(config.scraper.page_count, 5);
        assert_eq!(config.scraper.request_delay_ms, 500);
        assert_eq!(config.scraper.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output.csv_path, "books.csv");
        assert_eq!(config.output.database_path, "books.db");
    }
}
