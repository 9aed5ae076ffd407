//! In-memory catalog of books and patrons.
//!
//! All operations are linear scans over insertion-ordered lists;
//! there are no indexes and no generated keys. Matching is
//! case-insensitive for searches, checkouts and returns, and
//! case-sensitive for removals.

mod books;
mod loans;
mod patrons;

use crate::models::{Book, Patron};

/// The in-memory aggregate of all book and patron records.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    patrons: Vec<Patron>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }
}
