//! Book detail page parser
//!
//! Each field is extracted independently. Title, price and availability are
//! required; rating, description and category fall back to their documented
//! defaults when the page lacks the corresponding element. Any error fails
//! the whole record.

use crate::book::{Book, Rating, NO_CATEGORY, NO_DESCRIPTION};
use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html, Selector};

const TITLE_SELECTOR: &str = "h1";
const PRICE_SELECTOR: &str = "p.price_color";
const AVAILABILITY_SELECTOR: &str = "p.instock.availability";
const RATING_SELECTOR: &str = "p.star-rating";
const DESCRIPTION_SELECTOR: &str = "div#product_description";
const BREADCRUMB_SELECTOR: &str = "ul.breadcrumb li a";

/// Parses a book detail page into a `Book`
///
/// # Arguments
///
/// * `html` - The detail page markup
/// * `source_url` - The URL the page was fetched from
///
/// # Returns
///
/// * `Ok(Book)` - All required fields were found
/// * `Err(ParseError)` - A required element is missing or malformed
///
/// # Example
///
/// ```
/// use book_scraper::crawler::parse_book;
///
/// let html = r#"<h1>Sapiens</h1>
///     <p class="price_color">£54.23</p>
///     <p class="instock availability">In stock (20 available)</p>"#;
/// let url = "https://books.toscrape.com/catalogue/sapiens_996/index.html";
/// let book = parse_book(html, url).unwrap();
/// assert_eq!(book.title, "Sapiens");
/// assert_eq!(book.description, "No Description");
/// ```
pub fn parse_book(html: &str, source_url: &str) -> ParseResult<Book> {
    let document = Html::parse_document(html);

    let title = required_text(&document, TITLE_SELECTOR, "title", source_url)?;
    let price = required_text(&document, PRICE_SELECTOR, "price", source_url)?;
    let availability =
        required_text(&document, AVAILABILITY_SELECTOR, "availability", source_url)?;
    let rating = extract_rating(&document, source_url)?;
    let description = extract_description(&document, source_url)?;
    let category = extract_category(&document)?;

    Ok(Book {
        title,
        price,
        availability,
        rating,
        description,
        category,
        url: source_url.to_string(),
    })
}

fn selector(css: &str) -> ParseResult<Selector> {
    Selector::parse(css).map_err(|_| ParseError::Selector(css.to_string()))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first element matching `css`, or a MissingField error
fn required_text(
    document: &Html,
    css: &str,
    field: &'static str,
    url: &str,
) -> ParseResult<String> {
    document
        .select(&selector(css)?)
        .next()
        .map(element_text)
        .ok_or_else(|| ParseError::MissingField {
            field,
            url: url.to_string(),
        })
}

/// Rating from the second class token of the star-rating element
///
/// A page without the element is unrated. An element without a second
/// token, or with an unknown label, is an error.
fn extract_rating(document: &Html, url: &str) -> ParseResult<Rating> {
    let Some(element) = document.select(&selector(RATING_SELECTOR)?).next() else {
        return Ok(Rating::Unrated);
    };

    let label = element
        .value()
        .attr("class")
        .and_then(|classes| classes.split_whitespace().nth(1))
        .ok_or_else(|| ParseError::MissingField {
            field: "rating label",
            url: url.to_string(),
        })?;

    Rating::from_label(label).ok_or_else(|| ParseError::UnknownRating {
        label: label.to_string(),
        url: url.to_string(),
    })
}

/// Text of the first paragraph following the description container
///
/// Returns the placeholder if the container is absent. A container with no
/// paragraph after it is an error.
fn extract_description(document: &Html, url: &str) -> ParseResult<String> {
    let Some(container) = document.select(&selector(DESCRIPTION_SELECTOR)?).next() else {
        return Ok(NO_DESCRIPTION.to_string());
    };

    container
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "p")
        .map(element_text)
        .ok_or_else(|| ParseError::MissingField {
            field: "description paragraph",
            url: url.to_string(),
        })
}

/// Second-to-last breadcrumb label, or the placeholder with fewer than two
fn extract_category(document: &Html) -> ParseResult<String> {
    let crumbs: Vec<String> = document
        .select(&selector(BREADCRUMB_SELECTOR)?)
        .map(element_text)
        .collect();

    if crumbs.len() < 2 {
        return Ok(NO_CATEGORY.to_string());
    }

    Ok(crumbs[crumbs.len() - 2].clone())
}
