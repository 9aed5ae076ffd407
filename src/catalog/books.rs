//! Book operations on the catalog

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Book, CreateBook};

use super::Catalog;

impl Catalog {
    /// Add a book; the author name parts are stored concatenated as
    /// `"first last"`. Duplicate titles are allowed.
    pub fn add_book(&mut self, new: CreateBook) -> AppResult<Book> {
        new.validate()?;
        let author = format!("{} {}", new.author_first_name, new.author_last_name);
        let book = Book::new(new.title, author);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Remove the first book matching `title` and `author` exactly
    /// (case-sensitive). Checked-out books cannot be removed.
    pub fn remove_book(&mut self, title: &str, author: &str) -> AppResult<Book> {
        let pos = self
            .books
            .iter()
            .position(|book| book.title == title && book.author == author)
            .ok_or_else(|| {
                AppError::NotFound(format!("Book '{}' by {} not found", title, author))
            })?;

        if self.books[pos].checked_out {
            return Err(AppError::BusinessRule(
                "Book is checked out and cannot be removed".to_string(),
            ));
        }

        Ok(self.books.remove(pos))
    }

    /// First book whose title matches, ignoring case.
    pub fn search_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.matches_title(title))
    }

    /// All books by the given author, ignoring case.
    pub fn search_by_author(&self, first_name: &str, last_name: &str) -> Vec<&Book> {
        let author = format!("{} {}", first_name, last_name);
        self.books
            .iter()
            .filter(|book| book.matches_author(&author))
            .collect()
    }

    pub fn sort_by_title(&mut self) {
        self.books.sort_by(|a, b| a.title.cmp(&b.title));
    }

    pub fn sort_by_author(&mut self) {
        self.books.sort_by(|a, b| a.author.cmp(&b.author));
    }

    /// Append loaded records after the books already in memory.
    pub fn import_books(&mut self, books: Vec<Book>) {
        self.books.extend(books);
    }
}
