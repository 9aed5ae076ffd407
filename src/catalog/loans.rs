//! Checkout and return transitions.
//!
//! Each transition touches two records: the book's `checked_out`
//! flag and the patron's list of held copies. Both change together
//! or not at all.

use crate::error::{AppError, AppResult};
use crate::models::Book;

use super::Catalog;

impl Catalog {
    /// Check a book out to a patron. Both lookups are
    /// case-insensitive; the first matching title wins.
    pub fn check_out(
        &mut self,
        first_name: &str,
        last_name: &str,
        title: &str,
    ) -> AppResult<Book> {
        let patron_pos = self
            .patrons
            .iter()
            .position(|p| p.matches_name(first_name, last_name))
            .ok_or_else(|| {
                AppError::NotFound(format!("Patron {} {} not found", first_name, last_name))
            })?;
        let book_pos = self
            .books
            .iter()
            .position(|b| b.matches_title(title))
            .ok_or_else(|| AppError::NotFound(format!("Book '{}' not found", title)))?;

        if self.books[book_pos].checked_out {
            return Err(AppError::BusinessRule(
                "Book is already checked out".to_string(),
            ));
        }

        self.books[book_pos].checked_out = true;
        let snapshot = self.books[book_pos].clone();
        self.patrons[patron_pos].hold(snapshot.clone());
        Ok(snapshot)
    }

    /// Return a book held by a patron. The flag is only cleared when
    /// the patron actually holds a copy of the title.
    pub fn return_book(
        &mut self,
        first_name: &str,
        last_name: &str,
        title: &str,
    ) -> AppResult<Book> {
        let patron_pos = self
            .patrons
            .iter()
            .position(|p| p.matches_name(first_name, last_name))
            .ok_or_else(|| {
                AppError::NotFound(format!("Patron {} {} not found", first_name, last_name))
            })?;
        let book_pos = self
            .books
            .iter()
            .position(|b| b.matches_title(title))
            .ok_or_else(|| AppError::NotFound(format!("Book '{}' not found", title)))?;

        if !self.books[book_pos].checked_out {
            return Err(AppError::BusinessRule(
                "Book is not checked out".to_string(),
            ));
        }

        if self.patrons[patron_pos].release(title).is_none() {
            return Err(AppError::BusinessRule(format!(
                "Book is not checked out by {}",
                self.patrons[patron_pos].full_name()
            )));
        }

        self.books[book_pos].checked_out = false;
        Ok(self.books[book_pos].clone())
    }
}
