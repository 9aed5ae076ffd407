//! Patron operations on the catalog

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Book, CreatePatron, Patron};

use super::Catalog;

impl Catalog {
    pub fn add_patron(&mut self, new: CreatePatron) -> AppResult<Patron> {
        new.validate()?;
        let patron = Patron::new(new.first_name, new.last_name);
        self.patrons.push(patron.clone());
        Ok(patron)
    }

    /// Remove the first patron matching both names exactly
    /// (case-sensitive). Patrons holding checked-out books cannot be
    /// removed.
    pub fn remove_patron(&mut self, first_name: &str, last_name: &str) -> AppResult<Patron> {
        let pos = self
            .patrons
            .iter()
            .position(|p| p.first_name == first_name && p.last_name == last_name)
            .ok_or_else(|| {
                AppError::NotFound(format!("Patron {} {} not found", first_name, last_name))
            })?;

        if self.patrons[pos].has_checkouts() {
            return Err(AppError::BusinessRule(
                "Patron has checked-out books and cannot be removed".to_string(),
            ));
        }

        Ok(self.patrons.remove(pos))
    }

    /// Books currently held by the patron (case-insensitive name match).
    pub fn checked_out_books_of(&self, first_name: &str, last_name: &str) -> AppResult<&[Book]> {
        let patron = self
            .patrons
            .iter()
            .find(|p| p.matches_name(first_name, last_name))
            .ok_or_else(|| {
                AppError::NotFound(format!("Patron {} {} not found", first_name, last_name))
            })?;
        Ok(&patron.checked_out_books)
    }
}
