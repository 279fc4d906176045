//! Configuration module for Book Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file section falls back to defaults for the public demo catalogue.
//!
//! # Example
//!
//! ```no_run
//! use book_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraping {} listing pages", config.scraper.page_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, ScraperConfig, UserAgentConfig, DEFAULT_BASE_URL,
    DEFAULT_LISTING_TEMPLATE, PAGE_PLACEHOLDER,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
