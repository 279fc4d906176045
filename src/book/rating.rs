/// Star rating definitions for catalogue entries
///
/// The catalogue marks each book with a `star-rating <Label>` class pair.
use std::fmt;

/// Placeholder written when a book carries no rating element
pub const NO_RATING: &str = "No Rating";

/// Five-level ordinal rating as advertised by the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    /// No rating element on the detail page
    Unrated,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Converts a catalogue class token into a rating
    ///
    /// Returns None if the token is not one of the five known labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "One" => Some(Self::One),
            "Two" => Some(Self::Two),
            "Three" => Some(Self::Three),
            "Four" => Some(Self::Four),
            "Five" => Some(Self::Five),
            _ => None,
        }
    }

    /// Parses the persisted form, which also accepts the unrated placeholder
    pub fn from_db_string(s: &str) -> Option<Self> {
        if s == NO_RATING {
            Some(Self::Unrated)
        } else {
            Self::from_label(s)
        }
    }

    /// Returns the label as written to CSV and SQLite
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Unrated => NO_RATING,
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
        }
    }

    /// Number of stars, 0 for unrated books
    pub fn stars(&self) -> u8 {
        match self {
            Self::Unrated => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Returns all ratings, unrated first
    pub fn all_ratings() -> Vec<Self> {
        vec![
            Self::Unrated,
            Self::One,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
        ]
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_string())
    }
}
