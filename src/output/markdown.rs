//! Markdown report generation
//!
//! This module renders the catalogue report as a markdown document.

use crate::output::report::{CatalogueReport, EXPENSIVE_THRESHOLD};
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the catalogue report to a markdown file
///
/// # Arguments
///
/// * `report` - The catalogue report
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_report(report: &CatalogueReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a catalogue report as markdown
pub fn format_markdown_report(report: &CatalogueReport) -> String {
    let mut md = String::new();

    md.push_str("# Book Catalogue Summary\n\n");

    // Overview
    md.push_str("## Overview\n\n");
    md.push_str(&format!("- **Total Books**: {}\n", report.total_books));
    if let Some(avg) = report.average_price {
        md.push_str(&format!("- **Average Price**: £{:.2}\n", avg));
    }
    if let Some(cheapest) = &report.cheapest {
        md.push_str(&format!(
            "- **Cheapest Book**: {} (£{:.2})\n",
            cheapest.title, cheapest.price
        ));
    }
    md.push_str(&format!(
        "- **Expensive Books** (> £{:.0}): {}\n",
        EXPENSIVE_THRESHOLD, report.expensive_count
    ));
    md.push_str(&format!(
        "- **Missing Descriptions**: {}\n",
        report.missing_description
    ));
    if let Some((word, count)) = &report.most_common_title_word {
        md.push_str(&format!("- **Most Common Title Word**: {} ({})\n", word, count));
    }
    md.push('\n');

    // Most expensive
    if !report.most_expensive.is_empty() {
        md.push_str("## Most Expensive Books\n\n");
        md.push_str("| Title | Price |\n");
        md.push_str("|-------|-------|\n");
        for entry in &report.most_expensive {
            md.push_str(&format!("| {} | £{:.2} |\n", escape_cell(&entry.title), entry.price));
        }
        md.push('\n');
    }

    // Ratings
    md.push_str("## Books by Rating\n\n");
    md.push_str("| Rating | Count |\n");
    md.push_str("|--------|-------|\n");
    for (rating, count) in &report.rating_counts {
        md.push_str(&format!("| {} | {} |\n", rating, count));
    }
    md.push('\n');

    // Categories
    if !report.category_counts.is_empty() {
        md.push_str("## Books by Category\n\n");
        md.push_str("| Category | Count | Cheapest |\n");
        md.push_str("|----------|-------|----------|\n");
        for (category, count) in &report.category_counts {
            let cheapest = report
                .cheapest_per_category
                .get(category)
                .map(|p| format!("{} (£{:.2})", escape_cell(&p.title), p.price))
                .unwrap_or_else(|| "-".to_string());
            md.push_str(&format!("| {} | {} | {} |\n", escape_cell(category), count, cheapest));
        }
        if let Some((category, avg)) = &report.lowest_average_category {
            md.push_str(&format!("\nLowest average price: **{}** (£{:.2})\n", category, avg));
        }
        md.push('\n');
    }

    // Stock
    md.push_str("## Stock\n\n");
    md.push_str(&format!("- **In Stock**: {}\n", report.in_stock));
    md.push_str(&format!("- **Out of Stock**: {}\n", report.out_of_stock));
    md.push_str(&format!("- **Multiple Copies**: {}\n", report.multiple_copies));

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
