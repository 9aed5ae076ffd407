//! Patron model and related types

use validator::Validate;

use super::book::Book;
use super::validate_name_part;

/// A library patron. `checked_out_books` holds owned copies of the
/// books taken at checkout time, not references into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    pub first_name: String,
    pub last_name: String,
    pub checked_out_books: Vec<Book>,
}

impl Patron {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            checked_out_books: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on both name parts.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
            && self.last_name.to_lowercase() == last_name.to_lowercase()
    }

    pub fn has_checkouts(&self) -> bool {
        !self.checked_out_books.is_empty()
    }

    /// Record a checkout by storing a copy of the book.
    pub fn hold(&mut self, book: Book) {
        self.checked_out_books.push(book);
    }

    /// Remove and return the held copy matching `title`
    /// (case-insensitive), if this patron holds one.
    pub fn release(&mut self, title: &str) -> Option<Book> {
        let pos = self
            .checked_out_books
            .iter()
            .position(|book| book.matches_title(title))?;
        Some(self.checked_out_books.remove(pos))
    }
}

impl std::fmt::Display for Patron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Add-patron request
#[derive(Debug, Validate)]
pub struct CreatePatron {
    #[validate(custom(function = validate_name_part))]
    pub first_name: String,
    #[validate(custom(function = validate_name_part))]
    pub last_name: String,
}
