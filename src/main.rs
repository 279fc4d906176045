//! Book Scraper main entry point
//!
//! This is the command-line interface for the catalogue scraper.

use anyhow::Context;
use book_scraper::config::{load_config_with_hash, Config};
use book_scraper::crawler::{scrape, FailureKind};
use book_scraper::output::{
    generate_markdown_report, load_csv_report, load_report, print_report, write_csv,
    CatalogueReport,
};
use book_scraper::storage::{open_storage, write_table};
use book_scraper::url::listing_url;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Book Scraper: a sequential catalogue scraper
///
/// Walks the catalogue's listing pages, parses every advertised book, and
/// saves the result to a CSV file and a SQLite table.
#[derive(Parser, Debug)]
#[command(name = "book-scraper")]
#[command(version)]
#[command(about = "A sequential book catalogue scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of listing pages to scrape (overrides page-count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without scraping
    #[arg(long, conflicts_with_all = ["stats", "export_summary"])]
    dry_run: bool,

    /// Show the catalogue report from the database and exit
    #[arg(long, conflicts_with_all = ["dry_run", "export_summary"])]
    stats: bool,

    /// Write the catalogue report as markdown and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    export_summary: bool,

    /// Build the report from the CSV file instead of the database
    #[arg(long, conflicts_with = "dry_run")]
    from_csv: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(pages) = cli.pages {
        config.scraper.page_count = pages;
    }

    if cli.dry_run {
        handle_dry_run(&config)
    } else if cli.stats {
        handle_stats(&config, cli.from_csv)
    } else if cli.export_summary {
        handle_export_summary(&config, cli.from_csv)
    } else {
        handle_scrape(&config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("book_scraper=info,warn"),
            1 => EnvFilter::new("book_scraper=debug,info"),
            2 => EnvFilter::new("book_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Book Scraper Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  Base URL: {}", config.scraper.base_url);
    println!("  Listing template: {}", config.scraper.listing_template);
    println!("  Pages: {}", config.scraper.page_count);
    println!("  Delay between books: {}ms", config.scraper.request_delay_ms);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  Database: {}", config.output.database_path);
    println!("  Summary: {}", config.output.summary_path);

    println!("\nListing pages:");
    for page in 1..=config.scraper.page_count {
        let url = listing_url(&config.scraper.listing_template, page)?;
        println!("  * {}", url);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Loads the report from the database, or from the CSV file with --from-csv
fn load_catalogue_report(config: &Config, from_csv: bool) -> anyhow::Result<CatalogueReport> {
    if from_csv {
        tracing::info!("Loading books from {}...", config.output.csv_path);
        let report = load_csv_report(Path::new(&config.output.csv_path))
            .with_context(|| format!("Failed to read {}", config.output.csv_path))?;
        return Ok(report);
    }

    tracing::info!("Loading books from {}...", config.output.database_path);
    let storage = open_storage(Path::new(&config.output.database_path))?;
    Ok(load_report(&storage)?)
}

/// Handles the --stats mode: prints the catalogue report
fn handle_stats(config: &Config, from_csv: bool) -> anyhow::Result<()> {
    let source = if from_csv {
        &config.output.csv_path
    } else {
        &config.output.database_path
    };
    println!("Source: {}\n", source);

    let report = load_catalogue_report(config, from_csv)?;
    print_report(&report);

    Ok(())
}

/// Handles the --export-summary mode: writes the report as markdown
fn handle_export_summary(config: &Config, from_csv: bool) -> anyhow::Result<()> {
    println!("=== Exporting Catalogue Summary ===\n");
    println!("Output: {}", config.output.summary_path);
    println!();

    let report = load_catalogue_report(config, from_csv)?;

    tracing::info!("Generating markdown summary...");
    generate_markdown_report(&report, Path::new(&config.output.summary_path))
        .with_context(|| format!("Failed to write {}", config.output.summary_path))?;

    println!("✓ Summary exported to: {}", config.output.summary_path);

    Ok(())
}

/// Handles the main scrape: fetch, parse, then write both sinks
async fn handle_scrape(config: &Config) -> anyhow::Result<()> {
    let pages = config.scraper.page_count;
    println!("Scraping {} pages in progress...", pages);

    let report = scrape(config, pages).await?;

    println!("Scraping complete.");
    println!(
        "  {} books parsed, {} listing pages skipped, {} books skipped ({}s)",
        report.books.len(),
        report.failure_count(FailureKind::Listing),
        report.failure_count(FailureKind::Detail),
        report.duration_seconds()
    );

    if report.books.is_empty() {
        println!("No books to save.");
        return Ok(());
    }

    let csv_path = Path::new(&config.output.csv_path);
    write_csv(&report.books, csv_path)
        .with_context(|| format!("Failed to write {}", csv_path.display()))?;
    println!("Data saved to {}", csv_path.display());

    let db_path = Path::new(&config.output.database_path);
    write_table(&report.books, db_path)
        .with_context(|| format!("Failed to write {}", db_path.display()))?;
    println!("Data saved to {}", db_path.display());

    Ok(())
}
