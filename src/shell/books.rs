//! Prompted book commands

use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::models::CreateBook;

use super::Shell;

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub(super) fn add_book(&mut self) -> AppResult<()> {
        let title = self.require_line("Enter the title: ")?;
        let author_first_name = self.require_line("Enter the author's first name: ")?;
        let author_last_name = self.require_line("Enter the author's last name: ")?;

        self.catalog.add_book(CreateBook {
            title,
            author_first_name,
            author_last_name,
        })?;
        writeln!(self.output, "Book added to the library.")?;
        Ok(())
    }

    pub(super) fn remove_book(&mut self) -> AppResult<()> {
        writeln!(self.output, "Note: removal matches the exact title and author.")?;
        let title = self.require_line("Enter the title: ")?;
        let first = self.require_line("Enter the author's first name: ")?;
        let last = self.require_line("Enter the author's last name: ")?;

        let removed = self
            .catalog
            .remove_book(&title, &format!("{} {}", first, last))?;
        writeln!(
            self.output,
            "{} has been removed from the library.",
            removed.title
        )?;
        Ok(())
    }

    pub(super) fn search_by_title(&mut self) -> AppResult<()> {
        let title = self.require_line("Enter the title: ")?;
        match self.catalog.search_by_title(&title) {
            Some(book) => {
                writeln!(self.output, "{}", book)?;
                writeln!(self.output, "Book is {}.", book.availability())?;
            }
            None => writeln!(self.output, "Book not found.")?,
        }
        Ok(())
    }

    pub(super) fn search_by_author(&mut self) -> AppResult<()> {
        let first = self.require_line("Enter the author's first name: ")?;
        let last = self.require_line("Enter the author's last name: ")?;

        let found = self.catalog.search_by_author(&first, &last);
        if found.is_empty() {
            writeln!(self.output, "No books found by {} {}.", first, last)?;
            return Ok(());
        }
        writeln!(self.output, "Books by {} {}:", first, last)?;
        for book in found {
            writeln!(self.output, "- {}", book)?;
        }
        Ok(())
    }

    pub(super) fn sort_books(&mut self) -> AppResult<()> {
        let choice = self.require_line("Sort by (T)itle or (A)uthor? ")?;
        match choice.to_lowercase().as_str() {
            "t" => self.catalog.sort_by_title(),
            "a" => self.catalog.sort_by_author(),
            _ => {
                writeln!(self.output, "Invalid choice; sorting by title.")?;
                self.catalog.sort_by_title();
            }
        }
        self.list_books()
    }

    pub(super) fn list_books(&mut self) -> AppResult<()> {
        if self.catalog.books().is_empty() {
            writeln!(self.output, "No books in the library.")?;
            return Ok(());
        }
        writeln!(self.output, "List of Books:")?;
        for book in self.catalog.books() {
            writeln!(self.output, "- {}", book)?;
        }
        Ok(())
    }
}
