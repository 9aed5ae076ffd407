//! Prompted checkout and return commands

use std::io::{BufRead, Write};

use crate::error::AppResult;

use super::Shell;

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub(super) fn check_out(&mut self) -> AppResult<()> {
        let first = self.require_line("Enter the patron's first name: ")?;
        let last = self.require_line("Enter the patron's last name: ")?;
        let title = self.require_line("Enter the title: ")?;

        let book = self.catalog.check_out(&first, &last, &title)?;
        writeln!(
            self.output,
            "{} has been checked out by {} {}.",
            book.title, first, last
        )?;
        Ok(())
    }

    pub(super) fn return_book(&mut self) -> AppResult<()> {
        let first = self.require_line("Enter the patron's first name: ")?;
        let last = self.require_line("Enter the patron's last name: ")?;
        let title = self.require_line("Enter the title: ")?;

        let book = self.catalog.return_book(&first, &last, &title)?;
        writeln!(self.output, "{} has been returned.", book.title)?;
        Ok(())
    }
}
