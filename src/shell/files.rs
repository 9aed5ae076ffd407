//! Load and save commands over the book store

use std::io::{BufRead, Write};

use crate::error::AppResult;

use super::Shell;

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Append the book file's records to the catalog. A file that
    /// fails to read or parse changes nothing in memory.
    pub(super) fn load_file(&mut self) -> AppResult<()> {
        let books = self.store.load()?;
        let count = books.len();
        self.catalog.import_books(books);
        tracing::info!("Loaded {} book(s) from the book file", count);
        writeln!(self.output, "Loaded {} book(s).", count)?;
        Ok(())
    }

    pub(super) fn save_file(&mut self) -> AppResult<()> {
        self.store.save(self.catalog.books())?;
        let count = self.catalog.books().len();
        tracing::info!("Wrote {} book(s) to the save file", count);
        writeln!(self.output, "Saved {} book(s).", count)?;
        Ok(())
    }
}
