//! Prompted patron commands

use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::models::CreatePatron;

use super::Shell;

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub(super) fn add_patron(&mut self) -> AppResult<()> {
        let first_name = self.require_line("Enter the patron's first name: ")?;
        let last_name = self.require_line("Enter the patron's last name: ")?;

        self.catalog.add_patron(CreatePatron {
            first_name,
            last_name,
        })?;
        writeln!(self.output, "Patron added to the library.")?;
        Ok(())
    }

    pub(super) fn remove_patron(&mut self) -> AppResult<()> {
        writeln!(self.output, "Note: removal matches the exact name.")?;
        let first = self.require_line("Enter the patron's first name: ")?;
        let last = self.require_line("Enter the patron's last name: ")?;

        let removed = self.catalog.remove_patron(&first, &last)?;
        writeln!(self.output, "{} is no longer a patron.", removed.full_name())?;
        Ok(())
    }

    pub(super) fn list_patrons(&mut self) -> AppResult<()> {
        if self.catalog.patrons().is_empty() {
            writeln!(self.output, "No patrons in the library.")?;
            return Ok(());
        }
        writeln!(self.output, "List of Patrons:")?;
        for patron in self.catalog.patrons() {
            writeln!(self.output, "- {}", patron)?;
        }
        Ok(())
    }

    pub(super) fn patron_checkouts(&mut self) -> AppResult<()> {
        let first = self.require_line("Enter the patron's first name: ")?;
        let last = self.require_line("Enter the patron's last name: ")?;

        let held = self.catalog.checked_out_books_of(&first, &last)?;
        if held.is_empty() {
            writeln!(self.output, "{} {} has no books checked out.", first, last)?;
            return Ok(());
        }
        writeln!(self.output, "Books checked out by {} {}:", first, last)?;
        for book in held {
            writeln!(self.output, "- {}", book)?;
        }
        Ok(())
    }
}
