//! Catalogue report
//!
//! Summary statistics over a scraped book set: prices, ratings, stock and
//! category breakdowns. Books whose price cannot be parsed are left out of
//! the price aggregates but still counted elsewhere.

use crate::book::{Book, Rating};
use std::collections::{BTreeMap, HashMap};

/// Price above which a book counts as expensive
pub const EXPENSIVE_THRESHOLD: f64 = 40.0;

/// Number of entries in the most-expensive list
const TOP_N: usize = 5;

/// A book title paired with its numeric price
#[derive(Debug, Clone, PartialEq)]
pub struct PricedTitle {
    pub title: String,
    pub price: f64,
}

/// Summary statistics for a set of books
#[derive(Debug, Clone, Default)]
pub struct CatalogueReport {
    // Overall
    pub total_books: usize,
    pub average_price: Option<f64>,

    // Price extremes
    pub most_expensive: Vec<PricedTitle>,
    pub cheapest: Option<PricedTitle>,

    // Expensive books (price > EXPENSIVE_THRESHOLD)
    pub expensive_count: usize,
    pub expensive_average: Option<f64>,

    // Rating -> count, for every rating level
    pub rating_counts: BTreeMap<Rating, usize>,

    // (category, count), most populated first
    pub category_counts: Vec<(String, usize)>,
    pub cheapest_per_category: BTreeMap<String, PricedTitle>,
    pub lowest_average_category: Option<(String, f64)>,

    // Stock
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub multiple_copies: usize,

    pub missing_description: usize,
    pub most_common_title_word: Option<(String, usize)>,
}

impl CatalogueReport {
    /// Computes the report for a set of books
    pub fn from_books(books: &[Book]) -> Self {
        let priced: Vec<(&Book, f64)> = books
            .iter()
            .filter_map(|book| book.price_value().map(|price| (book, price)))
            .collect();

        let mut by_price = priced.clone();
        by_price.sort_by(|a, b| b.1.total_cmp(&a.1));
        let most_expensive = by_price
            .iter()
            .take(TOP_N)
            .map(|(book, price)| priced_title(book, *price))
            .collect();

        let cheapest = priced
            .iter()
            .fold(None::<(&Book, f64)>, |best, &(book, price)| match best {
                Some((_, best_price)) if best_price <= price => best,
                _ => Some((book, price)),
            })
            .map(|(book, price)| priced_title(book, price));

        let expensive: Vec<f64> = priced
            .iter()
            .map(|(_, price)| *price)
            .filter(|price| *price > EXPENSIVE_THRESHOLD)
            .collect();

        let mut rating_counts: BTreeMap<Rating, usize> =
            Rating::all_ratings().into_iter().map(|r| (r, 0)).collect();
        for book in books {
            *rating_counts.entry(book.rating).or_default() += 1;
        }

        let (category_counts, cheapest_per_category, lowest_average_category) =
            category_breakdown(books, &priced);

        let stock: Vec<u32> = books.iter().map(Book::stock_count).collect();

        Self {
            total_books: books.len(),
            average_price: mean(priced.iter().map(|(_, price)| *price)),
            most_expensive,
            cheapest,
            expensive_count: expensive.len(),
            expensive_average: mean(expensive.iter().copied()),
            rating_counts,
            category_counts,
            cheapest_per_category,
            lowest_average_category,
            in_stock: stock.iter().filter(|n| **n > 0).count(),
            out_of_stock: stock.iter().filter(|n| **n == 0).count(),
            multiple_copies: stock.iter().filter(|n| **n > 1).count(),
            missing_description: books.iter().filter(|b| !b.has_description()).count(),
            most_common_title_word: most_common_word(books.iter().map(|b| b.title.as_str())),
        }
    }

    /// Count of books with the given rating
    pub fn rating_count(&self, rating: Rating) -> usize {
        self.rating_counts.get(&rating).copied().unwrap_or(0)
    }
}

fn priced_title(book: &Book, price: f64) -> PricedTitle {
    PricedTitle {
        title: book.title.clone(),
        price,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

type CategoryBreakdown = (
    Vec<(String, usize)>,
    BTreeMap<String, PricedTitle>,
    Option<(String, f64)>,
);

/// Per-category counts, cheapest book, and the lowest-average category
fn category_breakdown(books: &[Book], priced: &[(&Book, f64)]) -> CategoryBreakdown {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.category.as_str()).or_default() += 1;
    }
    let mut category_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    category_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut cheapest: BTreeMap<String, PricedTitle> = BTreeMap::new();
    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (book, price) in priced {
        let category = book.category.clone();

        let entry = totals.entry(category.clone()).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;

        match cheapest.get(&category) {
            Some(current) if current.price <= *price => {}
            _ => {
                cheapest.insert(category, priced_title(book, *price));
            }
        }
    }

    let lowest_average = totals
        .into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .fold(None::<(String, f64)>, |best, (category, avg)| match best {
            Some((_, best_avg)) if best_avg <= avg => best,
            _ => Some((category, avg)),
        });

    (category_counts, cheapest, lowest_average)
}

/// Most frequent lowercase word across titles; ties go to the word seen first
fn most_common_word<'a>(titles: impl Iterator<Item = &'a str>) -> Option<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for title in titles {
        for word in title
            .to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
        {
            let count = counts.entry(word.to_string()).or_insert(0);
            if *count == 0 {
                order.push(word.to_string());
            }
            *count += 1;
        }
    }

    order.into_iter().fold(None, |best, word| {
        let count = counts[&word];
        match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((word, count)),
        }
    })
}

/// Prints the report to stdout
pub fn print_report(report: &CatalogueReport) {
    println!("=== Catalogue Report ===\n");

    println!("Overview:");
    println!("  Total books: {}", report.total_books);
    if let Some(avg) = report.average_price {
        println!("  Average price: £{:.2}", avg);
    }
    if let Some(cheapest) = &report.cheapest {
        println!("  Cheapest: {} (£{:.2})", cheapest.title, cheapest.price);
    }
    println!("  Missing description: {}", report.missing_description);
    if let Some((word, count)) = &report.most_common_title_word {
        println!("  Most common title word: {} ({})", word, count);
    }
    println!();

    if !report.most_expensive.is_empty() {
        println!("Most Expensive:");
        for entry in &report.most_expensive {
            println!("  £{:>7.2}  {}", entry.price, entry.title);
        }
        println!();
    }

    println!(
        "Expensive books (> £{:.0}): {}",
        EXPENSIVE_THRESHOLD, report.expensive_count
    );
    if let Some(avg) = report.expensive_average {
        println!("  Average price: £{:.2}", avg);
    }
    println!();

    println!("Books by Rating:");
    for (rating, count) in &report.rating_counts {
        println!("  {}: {}", rating, count);
    }
    println!();

    println!("Books by Category:");
    for (category, count) in &report.category_counts {
        println!("  {}: {}", category, count);
    }
    if let Some((category, avg)) = &report.lowest_average_category {
        println!("  Lowest average price: {} (£{:.2})", category, avg);
    }
    println!();

    println!("Stock:");
    println!("  In stock: {}", report.in_stock);
    println!("  Out of stock: {}", report.out_of_stock);
    println!("  Multiple copies: {}", report.multiple_copies);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{NO_CATEGORY, NO_DESCRIPTION};

    fn book(title: &str, price: &str, stock: &str, rating: Rating, category: &str) -> Book {
        Book {
            title: title.to_string(),
            price: price.to_string(),
            availability: stock.to_string(),
            rating,
            description: "text".to_string(),
            category: category.to_string(),
            url: format!("https://books.toscrape.com/catalogue/{}/index.html", title),
        }
    }

    fn sample_books() -> Vec<Book> {
        let in_stock = |n: u32| format!("In stock ({} available)", n);
        vec![
            book("The Python Book", "£45.00", &in_stock(5), Rating::Five, "Programming"),
            book("Learning Python", "£30.00", &in_stock(1), Rating::Three, "Programming"),
            book("Night Poems", "£12.50", "Out of stock", Rating::One, "Poetry"),
            book("Day Poems", "£60.00", &in_stock(2), Rating::Five, "Poetry"),
            book("Loose Leaf", "£20.00", &in_stock(3), Rating::Unrated, NO_CATEGORY),
        ]
    }

    #[test]
    fn test_overall_figures() {
        let report = CatalogueReport::from_books(&sample_books());

        assert_eq!(report.total_books, 5);
        let avg = report.average_price.unwrap();
        assert!((avg - 33.5).abs() < 1e-9);
        assert_eq!(
            report.cheapest,
            Some(PricedTitle {
                title: "Night Poems".to_string(),
                price: 12.5
            })
        );
    }

    #[test]
    fn test_most_expensive_order() {
        let report = CatalogueReport::from_books(&sample_books());
        let titles: Vec<&str> = report
            .most_expensive
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Day Poems",
                "The Python Book",
                "Learning Python",
                "Loose Leaf",
                "Night Poems"
            ]
        );
    }

    #[test]
    fn test_expensive_books() {
        let report = CatalogueReport::from_books(&sample_books());
        assert_eq!(report.expensive_count, 2);
        assert!((report.expensive_average.unwrap() - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_rating_counts_include_every_level() {
        let report = CatalogueReport::from_books(&sample_books());
        assert_eq!(report.rating_counts.len(), 6);
        assert_eq!(report.rating_count(Rating::Five), 2);
        assert_eq!(report.rating_count(Rating::Two), 0);
        assert_eq!(report.rating_count(Rating::Unrated), 1);
    }

    #[test]
    fn test_category_breakdown() {
        let report = CatalogueReport::from_books(&sample_books());

        assert_eq!(
            report.category_counts,
            vec![
                ("Poetry".to_string(), 2),
                ("Programming".to_string(), 2),
                ("No Category".to_string(), 1),
            ]
        );
        assert_eq!(report.cheapest_per_category["Poetry"].title, "Night Poems");
        assert_eq!(
            report.cheapest_per_category["Programming"].title,
            "Learning Python"
        );

        let (category, avg) = report.lowest_average_category.unwrap();
        assert_eq!(category, "No Category");
        assert!((avg - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_stock_counts() {
        let report = CatalogueReport::from_books(&sample_books());
        assert_eq!(report.in_stock, 4);
        assert_eq!(report.out_of_stock, 1);
        assert_eq!(report.multiple_copies, 3);
    }

    #[test]
    fn test_most_common_title_word() {
        let report = CatalogueReport::from_books(&sample_books());
        // "python" and "poems" both appear twice; "python" is seen first
        assert_eq!(
            report.most_common_title_word,
            Some(("python".to_string(), 2))
        );
    }

    #[test]
    fn test_unparseable_price_is_left_out_of_price_figures() {
        let mut books = sample_books();
        books.push(book(
            "Mystery Price",
            "n/a",
            "Out of stock",
            Rating::Two,
            "Poetry",
        ));

        let report = CatalogueReport::from_books(&books);
        assert_eq!(report.total_books, 6);
        assert!((report.average_price.unwrap() - 33.5).abs() < 1e-9);
        assert_eq!(report.category_counts[0], ("Poetry".to_string(), 3));
    }

    #[test]
    fn test_missing_description_count() {
        let mut books = sample_books();
        books[0].description = NO_DESCRIPTION.to_string();
        let report = CatalogueReport::from_books(&books);
        assert_eq!(report.missing_description, 1);
    }

    #[test]
    fn test_empty_book_set() {
        let report = CatalogueReport::from_books(&[]);
        assert_eq!(report.total_books, 0);
        assert_eq!(report.average_price, None);
        assert_eq!(report.cheapest, None);
        assert!(report.most_expensive.is_empty());
        assert_eq!(report.most_common_title_word, None);
    }
}
