//! Book file persistence.
//!
//! The whole book list is written and read as one JSON array. A load
//! either deserializes the entire file or fails without touching
//! anything in memory; there is no partial import.

use std::fs;
use std::path::PathBuf;

use crate::error::AppResult;
use crate::models::Book;

/// Persistence seam between the shell and the book file.
#[cfg_attr(test, mockall::automock)]
pub trait BookStore {
    fn load(&self) -> AppResult<Vec<Book>>;
    fn save(&self, books: &[Book]) -> AppResult<()>;
}

/// JSON-file store. Load and save targets are distinct paths so a
/// save never clobbers the original input file.
pub struct JsonFileStore {
    load_path: PathBuf,
    save_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(load_path: impl Into<PathBuf>, save_path: impl Into<PathBuf>) -> Self {
        Self {
            load_path: load_path.into(),
            save_path: save_path.into(),
        }
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<Book>> {
        let contents = fs::read_to_string(&self.load_path)?;
        let books = serde_json::from_str(&contents)?;
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(books)?;
        fs::write(&self.save_path, contents)?;
        Ok(())
    }
}
