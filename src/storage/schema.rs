//! Database schema definitions
//!
//! This module contains the SQL schema for the books table.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    title TEXT,
    price TEXT,
    availability TEXT,
    rating TEXT,
    description TEXT,
    category TEXT,
    url TEXT
);
"#;

/// Column names of the books table, in insert order
pub const BOOK_COLUMNS: [&str; 7] = [
    "title",
    "price",
    "availability",
    "rating",
    "description",
    "category",
    "url",
];

/// Initializes the database schema
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
